use crate::cli::commands::{autoclean_notice, parse_activity};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::NewShift;
use crate::ui::messages::success;

/// Log a new shift.
///
/// A shift whose date or time does not parse is not an error: it is
/// dropped from the log and the user gets the auto-clean warning.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        activity,
        hours,
    } = cmd
    {
        let activity = parse_activity(activity)?;

        let mut pool = DbPool::open_ready(&cfg.database)?;

        let outcome = AddLogic::apply(
            &mut pool,
            NewShift {
                date: date.trim().to_string(),
                raw_time: time.clone(),
                activity,
                hours: *hours,
            },
        )?;

        if outcome.invalid_rows {
            autoclean_notice();
        } else {
            success(format!(
                "Added {} shift on {} at {} ({} h). {} shifts logged.",
                activity.label(),
                date.trim(),
                crate::core::clean_time_input(time),
                hours,
                outcome.log.len()
            ));
        }
    }

    Ok(())
}
