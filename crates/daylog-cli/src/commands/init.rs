use std::path::PathBuf;

use daylog_core::store::LogStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_journal_path, write_config, DaylogConfig};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let journal_path = match args.path.as_ref().or(ctx.cli().journal.as_ref()) {
        Some(path) => PathBuf::from(path),
        None => default_journal_path()?,
    };

    let config_path = resolve_config_path()?;
    write_config(&config_path, &DaylogConfig::new(journal_path.clone()))?;

    let store = LogStore::open_path(&journal_path);
    let created = store.init_if_missing()?;

    if !ctx.quiet() {
        if created {
            println!("Initialized journal at {}", journal_path.display());
        } else {
            println!("Journal already present at {}", journal_path.display());
        }
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
