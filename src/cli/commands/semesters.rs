use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_work_log;
use crate::errors::AppResult;
use crate::models::SemesterFilter;

/// Print every semester filter that selects at least one shift.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open_ready(&cfg.database)?;
    let log = load_work_log(&mut pool)?;

    println!("Available semester filters:");
    for option in SemesterFilter::options(log.iter().map(|e| e.date)) {
        match option {
            SemesterFilter::All => println!("  all  (All Semesters)"),
            SemesterFilter::Only(s) => println!("  {}", s),
        }
    }
    Ok(())
}
