mod common;
use common::row;
use huskyhours::core::summary::{NO_SHIFTS, PayRate, round_half_up, summary_title};
use huskyhours::core::{LogEvent, reconcile, summarize, summarize_with_rate};
use huskyhours::models::{ActivityKind, SemesterFilter, WorkLog};
use huskyhours::utils::formatting::format_hours;

fn log_of(rows: Vec<huskyhours::models::ShiftRow>) -> WorkLog {
    reconcile(&WorkLog::new(), LogEvent::TableSync(rows)).log
}

fn spring_and_summer() -> WorkLog {
    log_of(vec![
        row("2024-02-01", "09:00", ActivityKind::Tour, 3.0),
        row("2024-06-01", "09:00", ActivityKind::Training, 5.0),
    ])
}

#[test]
fn test_empty_log_summary() {
    let s = summarize(&[], &SemesterFilter::All);

    assert_eq!(s.total_hours, 0.0);
    assert_eq!(s.pay_display(), "$0.00");
    assert!(s.breakdown.is_empty());
    assert_eq!(s.breakdown.to_string(), NO_SHIFTS);
    assert_eq!(s.title, "Summary of Hours Worked Across All Semesters");
}

#[test]
fn test_filter_by_spring_2024() {
    let log = spring_and_summer();
    let filter: SemesterFilter = "Spring 2024".parse().unwrap();
    let s = summarize(log.entries(), &filter);

    assert_eq!(s.total_hours, 3.0);
    assert_eq!(s.pay_display(), "$42.84");
    assert_eq!(s.breakdown.items(), &[("Tour".to_string(), 1)]);
    assert_eq!(
        s.title,
        "Summary of Hours Worked During the Spring 2024 Semester"
    );
}

#[test]
fn test_all_semesters_sums_everything() {
    let log = spring_and_summer();
    let s = summarize(log.entries(), &SemesterFilter::All);

    assert_eq!(s.total_hours, 8.0);
    // 8 × 17 × 0.84
    assert_eq!(s.pay_display(), "$114.24");
    assert_eq!(s.hours_display(), "8 hours");
    assert_eq!(s.breakdown.get("Tour"), Some(1));
    assert_eq!(s.breakdown.get("Training"), Some(1));
}

#[test]
fn test_no_entries_after_filter() {
    let log = spring_and_summer();
    let filter: SemesterFilter = "Fall 2024".parse().unwrap();
    let s = summarize(log.entries(), &filter);

    assert_eq!(s.total_hours, 0.0);
    assert_eq!(s.pay_display(), "$0.00");
    assert_eq!(s.breakdown.lines(), vec![NO_SHIFTS.to_string()]);
    assert_eq!(s.title, "Summary of Hours Worked During the Fall 2024 Semester");
}

#[test]
fn test_breakdown_keeps_first_seen_order() {
    let log = log_of(vec![
        row("2024-09-02", "09:00", ActivityKind::Training, 1.0),
        row("2024-09-03", "09:00", ActivityKind::OrgWide, 2.0),
        row("2024-09-04", "09:00", ActivityKind::Training, 1.0),
        row("2024-09-05", "09:00", ActivityKind::Tour, 1.5),
        row("2024-09-06", "09:00", ActivityKind::OrgWide, 2.0),
    ]);

    let s = summarize(log.entries(), &SemesterFilter::All);

    assert_eq!(
        s.breakdown.lines(),
        vec!["Training: 2", "Org wide: 2", "Tour: 1"]
    );
    assert_eq!(s.hours_display(), "7.5 hours");
}

#[test]
fn test_custom_pay_rate() {
    let log = spring_and_summer();
    let rate = PayRate {
        hourly_rate: 20.0,
        net_rate_factor: 1.0,
    };
    let s = summarize_with_rate(log.entries(), &SemesterFilter::All, &rate);

    assert_eq!(s.pay_display(), "$160.00");
}

#[test]
fn test_round_half_up_to_cents() {
    assert_eq!(round_half_up(1.005, 2), 1.01);
    assert_eq!(round_half_up(2.675, 2), 2.68);
    assert_eq!(round_half_up(42.839999999999996, 2), 42.84);
    assert_eq!(round_half_up(0.004, 2), 0.0);
}

#[test]
fn test_fractional_hours_pay() {
    // 2.5 × 17 × 0.84 = 35.70
    let log = log_of(vec![row("2025-01-20", "11:00", ActivityKind::Other, 2.5)]);
    let s = summarize(log.entries(), &"Spring 2025".parse().unwrap());

    assert_eq!(s.pay_display(), "$35.70");
}

#[test]
fn test_summary_title_follows_filter() {
    assert_eq!(
        summary_title(&SemesterFilter::All),
        "Summary of Hours Worked Across All Semesters"
    );
    assert_eq!(
        summary_title(&"summer 2025".parse().unwrap()),
        "Summary of Hours Worked During the Summer 2025 Semester"
    );
}

#[test]
fn test_hours_keep_entered_precision() {
    let log = log_of(vec![
        row("2024-09-02", "09:00", ActivityKind::Tour, 0.333),
        row("2024-09-03", "09:00", ActivityKind::Tour, 0.1),
        row("2024-09-04", "09:00", ActivityKind::Tour, 0.2),
    ]);
    let s = summarize(log.entries(), &SemesterFilter::All);

    // the binary sum is not exactly 0.633
    assert_eq!(s.hours_display(), "0.633 hours");
    assert_eq!(format_hours(0.333), "0.333");
    assert_eq!(format_hours(10.0), "10");
    assert_eq!(format_hours(0.0), "0");
}
