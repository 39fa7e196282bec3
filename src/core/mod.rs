//! Work-log core: the pure reconciler, aggregator and view, plus the
//! command-level logic that runs them against the store.

pub mod add;
pub mod backup;
pub mod del;
pub mod edit;
pub mod log;
pub mod logic;
pub mod reconcile;
pub mod summary;
pub mod view;

pub use reconcile::{LogEvent, Reconciled, clean_time_input, reconcile};
pub use summary::{Breakdown, PayRate, Summary, summarize, summarize_with_rate};
pub use view::{DisplayRow, WorkLogView};
