use daylog_core::Entry;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{entries_json, print_entry_list};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let entries: Vec<Entry> = store.entries()?.collect::<Result<_, _>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries_json(&entries))?);
    } else {
        print_entry_list(&entries, ctx.quiet())?;
    }
    Ok(())
}
