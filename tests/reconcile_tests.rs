mod common;
use common::{row, submit};
use huskyhours::core::{LogEvent, clean_time_input, reconcile};
use huskyhours::models::{ActivityKind, WorkLog};

fn clean_log() -> WorkLog {
    let rows = vec![
        row("2024-02-01", "09:00", ActivityKind::Tour, 3.0),
        row("2024-06-01", "14:30", ActivityKind::Training, 5.0),
        row("2024-10-15", "10:00", ActivityKind::Registration, 2.5),
    ];
    reconcile(&WorkLog::new(), LogEvent::TableSync(rows)).log
}

#[test]
fn test_clean_time_input_pads_and_fills() {
    assert_eq!(clean_time_input("9"), "09:00");
    assert_eq!(clean_time_input("14"), "14:00");
    assert_eq!(clean_time_input("1:0"), "01:00");
    assert_eq!(clean_time_input("14:9"), "14:09");
    assert_eq!(clean_time_input("09:30"), "09:30");
    assert_eq!(clean_time_input(""), "");
}

#[test]
fn test_clean_time_input_passes_other_text_through() {
    assert_eq!(clean_time_input("noon"), "noon");
    assert_eq!(clean_time_input("9.30"), "9.30");
    assert_eq!(clean_time_input(" 9 "), "09:00");
}

#[test]
fn test_submit_valid_entry_onto_empty_log() {
    let out = reconcile(
        &WorkLog::new(),
        LogEvent::Submit(submit("2024-03-10", "9", ActivityKind::Tour, 2.0)),
    );

    assert_eq!(out.log.len(), 1);
    assert!(!out.invalid_rows);
    assert!(out.removed.is_empty());

    let entry = &out.log.entries()[0];
    assert_eq!(entry.time_str(), "09:00");
    assert_eq!(entry.date_str(), "2024-03-10");
    assert_eq!(entry.activity, ActivityKind::Tour);
    assert_eq!(entry.hours, 2.0);
}

#[test]
fn test_submit_with_bad_date_is_dropped_and_flagged() {
    let log = clean_log();
    let out = reconcile(
        &log,
        LogEvent::Submit(submit("2024-13-45", "10:00", ActivityKind::Other, 1.0)),
    );

    assert!(out.invalid_rows);
    assert_eq!(out.log, log);
    assert_eq!(out.removed.len(), 1);
    assert_eq!(out.removed[0].date, "2024-13-45");
}

#[test]
fn test_submit_with_empty_time_is_dropped() {
    let out = reconcile(
        &WorkLog::new(),
        LogEvent::Submit(submit("2024-03-10", "", ActivityKind::Tour, 1.0)),
    );

    assert!(out.invalid_rows);
    assert!(out.log.is_empty());
}

#[test]
fn test_submit_appends_after_existing_entries() {
    let log = clean_log();
    let out = reconcile(
        &log,
        LogEvent::Submit(submit("2023-01-05", "8:5", ActivityKind::OrgWide, 1.5)),
    );

    assert!(!out.invalid_rows);
    assert_eq!(out.log.len(), 4);
    assert_eq!(&out.log.entries()[..3], log.entries());
    assert_eq!(out.log.entries()[3].time_str(), "08:05");
}

#[test]
fn test_table_sync_drops_exactly_the_malformed_rows() {
    let rows = vec![
        row("2024-02-01", "09:00", ActivityKind::Tour, 3.0),
        row("2024-02-02", "9am", ActivityKind::Tour, 1.0),
        row("not a date", "10:00", ActivityKind::Other, 1.0),
        row("2024-06-01", "14:30", ActivityKind::Training, 5.0),
        row("2024-06-02", "25:00", ActivityKind::Training, 5.0),
    ];

    let out = reconcile(&WorkLog::new(), LogEvent::TableSync(rows.clone()));

    assert!(out.invalid_rows);
    assert_eq!(out.log.len(), 2);
    assert_eq!(out.log.entries()[0].date_str(), "2024-02-01");
    assert_eq!(out.log.entries()[1].date_str(), "2024-06-01");
    assert_eq!(out.removed, vec![rows[1].clone(), rows[2].clone(), rows[4].clone()]);
}

#[test]
fn test_table_sync_replaces_the_working_set() {
    let log = clean_log();
    let mut rows = log.to_rows();
    rows.remove(1);

    let out = reconcile(&log, LogEvent::TableSync(rows));

    assert!(!out.invalid_rows);
    assert_eq!(out.log.len(), 2);
    assert!(
        out.log
            .iter()
            .all(|e| e.activity != ActivityKind::Training)
    );
}

#[test]
fn test_table_sync_of_clean_log_is_identity() {
    let log = clean_log();
    let out = reconcile(&log, LogEvent::TableSync(log.to_rows()));

    assert_eq!(out.log, log);
    assert!(!out.invalid_rows);
}

#[test]
fn test_refresh_is_a_no_op_on_clean_log() {
    let log = clean_log();
    let out = reconcile(&log, LogEvent::Refresh);

    assert_eq!(out.log, log);
    assert!(!out.invalid_rows);
    assert!(out.removed.is_empty());
}

#[test]
fn test_reconcile_reaches_a_fixed_point() {
    let rows = vec![
        row("2024-02-01", "09:00", ActivityKind::Tour, 3.0),
        row("2024-02-30", "09:00", ActivityKind::Tour, 3.0),
    ];
    let first = reconcile(&WorkLog::new(), LogEvent::TableSync(rows));
    assert!(first.invalid_rows);

    let second = reconcile(&first.log, LogEvent::TableSync(first.log.to_rows()));
    assert_eq!(second.log, first.log);
    assert!(!second.invalid_rows);
}

#[test]
fn test_clean_submit_clears_the_flag() {
    let dirty = reconcile(
        &WorkLog::new(),
        LogEvent::TableSync(vec![row("bad", "bad", ActivityKind::Tour, 1.0)]),
    );
    assert!(dirty.invalid_rows);

    let after = reconcile(
        &dirty.log,
        LogEvent::Submit(submit("2024-09-01", "13:00", ActivityKind::Tour, 1.0)),
    );
    assert!(!after.invalid_rows);
    assert_eq!(after.log.len(), 1);
}

#[test]
fn test_padded_or_signed_fields_are_dropped() {
    let cases = [
        (" 2024-03-10", "09:00"),
        ("2024- 3-10", "09:00"),
        ("+2024-03-10", "09:00"),
        ("2024-03-10", " 9:00"),
        ("2024-03-10", "9: 5"),
        ("2024-03-10 ", "09:00"),
        ("2024-03-10", "09:00:00"),
    ];

    for (date, time) in cases {
        let out = reconcile(
            &WorkLog::new(),
            LogEvent::TableSync(vec![row(date, time, ActivityKind::Tour, 1.0)]),
        );
        assert!(out.log.is_empty(), "{date:?} {time:?} should be dropped");
        assert!(out.invalid_rows, "{date:?} {time:?} should raise the flag");
    }
}

#[test]
fn test_unpadded_digits_are_still_accepted() {
    let out = reconcile(
        &WorkLog::new(),
        LogEvent::TableSync(vec![row("2024-3-5", "9:05", ActivityKind::Tour, 1.0)]),
    );

    assert!(!out.invalid_rows);
    assert_eq!(out.log.entries()[0].date_str(), "2024-03-05");
    assert_eq!(out.log.entries()[0].time_str(), "09:05");
}

#[test]
fn test_submit_with_blank_inside_time_is_dropped() {
    // "9: 5" normalizes to "09: 5", which is not HH:MM
    let out = reconcile(
        &WorkLog::new(),
        LogEvent::Submit(submit("2024-03-10", "9: 5", ActivityKind::Tour, 2.0)),
    );

    assert!(out.invalid_rows);
    assert!(out.log.is_empty());
    assert_eq!(out.removed[0].time, "09: 5");
}
