use crate::cli::commands::autoclean_notice;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::{DisplayRow, EMPTY_LOG, EMPTY_SEMESTER, WorkLogView};
use crate::db::pool::DbPool;
use crate::db::queries::{load_invalid_flag, load_work_log};
use crate::errors::AppResult;
use crate::models::SemesterFilter;
use crate::ui::messages::{header, info};
use crate::utils::formatting::format_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { semester } = cmd {
        let filter = cfg.semester_filter(semester.as_deref())?;

        let mut pool = DbPool::open_ready(&cfg.database)?;
        let log = load_work_log(&mut pool)?;
        let invalid_flag = load_invalid_flag(&pool.conn)?;

        let view = WorkLogView::build(&log, &filter, invalid_flag);

        if view.shows_notice() {
            autoclean_notice();
        }

        match &view {
            WorkLogView::Empty { .. } => info(EMPTY_LOG),
            WorkLogView::NoneForSemester { .. } => info(EMPTY_SEMESTER),
            WorkLogView::Rows { rows, .. } => print_rows(&filter, rows),
        }
    }
    Ok(())
}

fn print_rows(filter: &SemesterFilter, rows: &[DisplayRow]) {
    header(match filter {
        SemesterFilter::All => "Work Log".to_string(),
        SemesterFilter::Only(s) => format!("Work Log – {}", s),
    });

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Date"),
        Column::right("Time"),
        Column::left("Work"),
        Column::right("Hours"),
    ]);

    for row in rows {
        table.add_row(vec![
            row.index.to_string(),
            row.date.clone(),
            row.time.clone(),
            row.activity.label(),
            format_hours(row.hours),
        ]);
    }

    print!("{}", table.render());
}
