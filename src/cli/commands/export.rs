use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        semester,
        force,
    } = cmd
    {
        let filter = cfg.semester_filter(semester.as_deref())?;
        let mut pool = DbPool::open_ready(&cfg.database)?;
        ExportLogic::export(&mut pool, *format, file, &filter, *force)?;
    }
    Ok(())
}
