use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::summarize_with_rate;
use crate::db::pool::DbPool;
use crate::db::queries::load_work_log;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { semester } = cmd {
        let filter = cfg.semester_filter(semester.as_deref())?;

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let log = load_work_log(&mut pool)?;

        let summary = summarize_with_rate(log.entries(), &filter, &cfg.pay_rate());

        header(&summary.title);
        println!("Total Hours Worked:  {}", summary.hours_display());
        println!("Total Money Earned:  {}", summary.pay_display());
        println!("Shift Breakdown:");
        for line in summary.breakdown.lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}
