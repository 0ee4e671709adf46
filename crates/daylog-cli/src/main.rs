//! daylog CLI - a single-user journal of date-keyed entries in one flat file
//!
//! This is the command-line frontend for daylog. It decodes user input,
//! drives the core record store, and renders the structured results as
//! text or JSON.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod output;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use daylog_core::{DaylogError, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let result = match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(&ctx, args),
        Some(Commands::Today(args)) => commands::handle_today(&ctx, args),
        Some(Commands::Edit(args)) => commands::handle_edit(&ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(&ctx, args),
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Search(args)) => commands::handle_search(&ctx, args),
        Some(Commands::Completions(args)) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "daylog", &mut std::io::stdout());
            Ok(())
        }
        None => {
            println!("daylog v{}", VERSION);
            println!();
            println!("Quickstart:");
            println!("  daylog init                   # choose where the journal lives");
            println!("  daylog edit --body \"...\"      # write today's entry");
            println!("  daylog today                  # read it back");
            println!();
            println!("Run `daylog --help` for all commands.");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

/// Process exit codes: 1 generic, 2 usage (clap), 3 entry not found,
/// 4 structure fault.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DaylogError>() {
        Some(DaylogError::NotFound(_)) => 3,
        Some(DaylogError::Structure(_)) => 4,
        _ => 1,
    }
}
