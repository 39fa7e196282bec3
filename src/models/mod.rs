pub mod activity;
pub mod entry;
pub mod semester;
pub mod work_log;

pub use activity::ActivityKind;
pub use entry::{NewShift, ShiftRow, WorkEntry};
pub use semester::{Semester, SemesterBucket, SemesterFilter, Term};
pub use work_log::WorkLog;
