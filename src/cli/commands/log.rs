use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::open_ready(&cfg.database)?;
        LogLogic::print_log(&mut pool)?;
    } else {
        info("Use `log --print` to show the internal log.");
    }

    Ok(())
}
