use crate::cli::commands::{autoclean_notice, parse_activity};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, RowPatch};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        index,
        date,
        time,
        activity,
        hours,
    } = cmd
    {
        let patch = RowPatch {
            date: date.clone(),
            time: time.clone(),
            activity: activity.as_deref().map(parse_activity).transpose()?,
            hours: *hours,
        };

        if patch.is_empty() {
            info("Nothing to change: pass --date, --time, --activity or --hours.");
            return Ok(());
        }

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let outcome = EditLogic::apply(&mut pool, *index, patch)?;

        if outcome.invalid_rows {
            autoclean_notice();
        } else {
            success(format!("Shift #{} updated.", index));
        }
    }

    Ok(())
}
