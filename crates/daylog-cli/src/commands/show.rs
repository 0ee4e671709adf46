use daylog_core::EntryId;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{print_view, view_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id: EntryId = args.id.parse()?;
    let store = ctx.open_store()?;
    let view = store.view(&id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view_json(&view))?);
    } else {
        print_view(&view, args.highlight.as_deref(), ctx.quiet())?;
    }
    Ok(())
}
