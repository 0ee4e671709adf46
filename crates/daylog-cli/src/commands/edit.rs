use daylog_core::{EntryId, Saved};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::read_entry_body;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let today = ctx.today();
    let id: EntryId = match &args.id {
        Some(value) => value.parse()?,
        None => today.clone(),
    };

    let store = ctx.open_store()?;
    let draft = store.read_or_create(&id)?;
    let body = read_entry_body(args.no_input, args.body.clone(), &draft.content)?;

    let saved = store.save(&id, &body, &today)?;

    if !ctx.quiet() {
        match saved {
            Saved::Created => println!("Created entry for {}", id.label()?),
            Saved::Updated => println!("Saved entry for {}", id.label()?),
        }
    }
    Ok(())
}
