use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{print_search, search_json};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let results = store.search(&args.term)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&search_json(&results))?);
    } else {
        print_search(&results, &args.term, ctx.quiet())?;
    }
    Ok(())
}
