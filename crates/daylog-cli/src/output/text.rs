//! Text output formatting for journal results.

use owo_colors::OwoColorize;

use daylog_core::highlight::{highlight, HighlightMark};
use daylog_core::store::{Entry, SearchResults};
use daylog_core::{Draft, EntryView};

/// ANSI marks wrapped around highlighted terms.
const HIGHLIGHT: HighlightMark<'static> = HighlightMark {
    open: "\u{1b}[1;33m",
    close: "\u{1b}[0m",
};

pub fn print_draft(draft: &Draft, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("{}", draft.id.label()?.bold());
        if !draft.existing {
            println!("(no entry yet - write one with `daylog edit`)");
        }
        println!();
    }
    if !draft.content.is_empty() {
        println!("{}", draft.content);
    }
    Ok(())
}

pub fn print_view(view: &EntryView, term: Option<&str>, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("{}", view.id.label()?.bold());
        println!();
    }

    match term {
        Some(term) => println!("{}", highlight(&view.content, term, HIGHLIGHT)),
        None => println!("{}", view.content),
    }

    if !quiet {
        println!();
        if let Some(ref previous) = view.previous {
            println!("Previous: {} ({})", previous.label()?, previous);
        }
        if let Some(ref next) = view.next {
            println!("Next:     {} ({})", next.label()?, next);
        }
    }
    Ok(())
}

pub fn print_entry_list(entries: &[Entry], quiet: bool) -> anyhow::Result<()> {
    if entries.is_empty() {
        if !quiet {
            println!("No entries found.");
        }
        return Ok(());
    }

    for entry in entries {
        if !quiet {
            println!("{} ({})", entry.id.label()?.bold(), entry.id);
        }
        println!("{}", entry.content);
        println!();
    }
    Ok(())
}

pub fn print_search(results: &SearchResults, term: &str, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("Results for {}", term.bold());
        println!();
    }

    for m in &results.matches {
        let date = match &m.id {
            Some(id) => id.label()?,
            None => String::new(),
        };
        println!("{:<18} {}  #{}", date, m.line, m.offset);
    }

    if !results.matches.is_empty() && !quiet {
        println!();
    }
    println!(
        "{} {}",
        results.total,
        if results.total == 1 { "match" } else { "matches" }
    );
    Ok(())
}
