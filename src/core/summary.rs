//! Hours and pay aggregation over a (semester-filtered) work log.

use crate::models::{SemesterBucket, SemesterFilter, WorkEntry};
use crate::utils::formatting::{format_hours, format_money};
use std::fmt;

/// Gross hourly wage.
pub const HOURLY_RATE: f64 = 17.0;
/// Share of the gross wage left after deductions.
pub const NET_RATE_FACTOR: f64 = 0.84;

pub const NO_SHIFTS: &str = "No Shifts Logged";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRate {
    pub hourly_rate: f64,
    pub net_rate_factor: f64,
}

impl Default for PayRate {
    fn default() -> Self {
        Self {
            hourly_rate: HOURLY_RATE,
            net_rate_factor: NET_RATE_FACTOR,
        }
    }
}

impl PayRate {
    /// Net pay for `hours`, rounded half-up to cents.
    pub fn pay_for(&self, hours: f64) -> f64 {
        round_half_up(hours * self.hourly_rate * self.net_rate_factor, 2)
    }
}

/// Per-activity shift counts in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown(Vec<(String, usize)>);

impl Breakdown {
    fn record(&mut self, label: String) {
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => self.0.push((label, 1)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[(String, usize)] {
        &self.0
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, c)| *c)
    }

    /// One `Label: count` line per activity, or the empty sentinel.
    pub fn lines(&self) -> Vec<String> {
        if self.0.is_empty() {
            return vec![NO_SHIFTS.to_string()];
        }
        self.0
            .iter()
            .map(|(label, count)| format!("{}: {}", label, count))
            .collect()
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_hours: f64,
    pub total_pay: f64,
    pub breakdown: Breakdown,
    pub title: String,
}

impl Summary {
    /// `$42.84`
    pub fn pay_display(&self) -> String {
        format_money(self.total_pay)
    }

    /// `3 hours`, `2.5 hours`
    pub fn hours_display(&self) -> String {
        format!("{} hours", format_hours(self.total_hours))
    }
}

pub fn summary_title(filter: &SemesterFilter) -> String {
    match filter {
        SemesterFilter::All => "Summary of Hours Worked Across All Semesters".to_string(),
        SemesterFilter::Only(s) => format!("Summary of Hours Worked During the {} Semester", s),
    }
}

/// Summarize with the default pay rate.
pub fn summarize(log: &[WorkEntry], filter: &SemesterFilter) -> Summary {
    summarize_with_rate(log, filter, &PayRate::default())
}

pub fn summarize_with_rate(log: &[WorkEntry], filter: &SemesterFilter, rate: &PayRate) -> Summary {
    let mut total_hours = 0.0;
    let mut breakdown = Breakdown::default();

    for entry in log
        .iter()
        .filter(|e| filter.matches(&SemesterBucket::from(e.date)))
    {
        total_hours += entry.hours;
        breakdown.record(entry.activity.label());
    }

    Summary {
        total_hours,
        total_pay: rate.pay_for(total_hours),
        breakdown,
        title: summary_title(filter),
    }
}

/// Round half-up (away from zero) to `places` decimals.
///
/// The scaled value is first snapped to 1e-6 so binary noise such as
/// `42.839999999999996` does not decide the tie-break.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = ((value * factor) * 1e6).round() / 1e6;
    scaled.round() / factor
}
