use crate::app::AppContext;
use crate::cli::TodayArgs;
use crate::output::{draft_json, print_draft};

pub fn handle_today(ctx: &AppContext, args: &TodayArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let draft = store.read_or_create(&ctx.today())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&draft_json(&draft))?);
    } else {
        print_draft(&draft, ctx.quiet())?;
    }
    Ok(())
}
