use crate::cli::commands::autoclean_notice;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;

        let entry = DeleteLogic::find(&mut pool, *index)?;

        let prompt = format!(
            "Delete shift #{} ({} {}, {}, {} h)? This action is irreversible.",
            index,
            entry.date_str(),
            entry.time_str(),
            entry.activity.label(),
            entry.hours
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let outcome = DeleteLogic::apply(&mut pool, *index)?;

        if outcome.invalid_rows {
            autoclean_notice();
        }
        success(format!(
            "Shift #{} has been deleted. {} shifts left.",
            index,
            outcome.log.len()
        ));
    }

    Ok(())
}
