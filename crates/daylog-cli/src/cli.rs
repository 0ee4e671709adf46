use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use daylog_core::VERSION;

/// daylog - a single-user journal of date-keyed entries in one flat file
#[derive(Parser)]
#[command(name = "daylog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal log file
    #[arg(short, long, global = true, env = "DAYLOG_JOURNAL")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal log will live
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

/// Arguments for the `today` command
#[derive(Args)]
pub struct TodayArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (DDMMYYYY); defaults to today
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Entry content (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (DDMMYYYY)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Highlight every occurrence of a term in the content
    #[arg(long, value_name = "TERM")]
    pub highlight: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search term (case-insensitive)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record the journal location and create the log file
    Init(InitArgs),

    /// Show today's entry (blank if not written yet)
    Today(TodayArgs),

    /// Write an entry; today's entry is created if missing
    Edit(EditArgs),

    /// Show one entry with its previous/next neighbors
    Show(ShowArgs),

    /// List every entry, newest-created first
    List(ListArgs),

    /// Search entry content for a term
    Search(SearchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
