use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AppStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = AppStore::open(&cfg.database)?;
        ExportLogic::export(
            &store,
            cfg,
            *format,
            file.as_deref(),
            range.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
