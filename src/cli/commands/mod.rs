pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod semesters;
pub mod summary;

use crate::core::view::AUTOCLEAN_NOTICE;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityKind;
use crate::ui::messages::notice;

/// Parse an activity given on the command line.
pub(crate) fn parse_activity(input: &str) -> AppResult<ActivityKind> {
    input.parse().map_err(AppError::InvalidActivity)
}

/// Warn that rows were auto-removed from the work log.
pub(crate) fn autoclean_notice() {
    notice(&AUTOCLEAN_NOTICE);
}
