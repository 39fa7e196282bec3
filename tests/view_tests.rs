mod common;
use common::row;
use huskyhours::core::{LogEvent, WorkLogView, reconcile};
use huskyhours::models::{ActivityKind, SemesterFilter, WorkLog};

fn sample_log() -> WorkLog {
    reconcile(
        &WorkLog::new(),
        LogEvent::TableSync(vec![
            row("2024-02-01", "09:00", ActivityKind::Tour, 3.0),
            row("2024-10-15", "14:05", ActivityKind::Registration, 2.0),
            row("2024-06-01", "00:30", ActivityKind::Training, 5.0),
            row("2024-02-01", "17:45", ActivityKind::Other, 1.0),
        ]),
    )
    .log
}

#[test]
fn test_empty_log_view() {
    let view = WorkLogView::build(&WorkLog::new(), &SemesterFilter::All, false);
    assert_eq!(view, WorkLogView::Empty { notice: false });
}

#[test]
fn test_rows_are_newest_first_on_12_hour_clock() {
    let view = WorkLogView::build(&sample_log(), &SemesterFilter::All, false);
    let rows = view.rows();

    let dates_times: Vec<(String, String)> = rows
        .iter()
        .map(|r| (r.date.clone(), r.time.clone()))
        .collect();

    assert_eq!(
        dates_times,
        vec![
            ("2024-10-15".to_string(), "2:05".to_string()),
            ("2024-06-01".to_string(), "12:30".to_string()),
            ("2024-02-01".to_string(), "5:45".to_string()),
            ("2024-02-01".to_string(), "9:00".to_string()),
        ]
    );
    assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn test_filtered_rows_keep_global_index() {
    let filter: SemesterFilter = "Spring 2024".parse().unwrap();
    let view = WorkLogView::build(&sample_log(), &filter, false);

    let indexes: Vec<usize> = view.rows().iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![3, 4]);
}

#[test]
fn test_semester_without_rows() {
    let filter: SemesterFilter = "Fall 2030".parse().unwrap();
    let view = WorkLogView::build(&sample_log(), &filter, true);

    assert_eq!(view, WorkLogView::NoneForSemester { notice: true });
    assert!(view.shows_notice());
}

#[test]
fn test_position_of_maps_display_index() {
    let log = sample_log();

    assert_eq!(log.position_of(1), Some(1));
    assert_eq!(log.position_of(4), Some(0));
    assert_eq!(log.position_of(0), None);
    assert_eq!(log.position_of(5), None);
}
