//! Semester buckets derived from shift dates.
//!
//! Months 1-4 are Spring, 5-8 Summer and 9-12 Fall of the date's own year.
//! Nothing here is stored: a bucket is always recomputed from the date.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::entry::{DATE_FORMAT, is_date_shaped};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Spring,
    Summer,
    Fall,
}

impl Term {
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=4 => Some(Term::Spring),
            5..=8 => Some(Term::Summer),
            9..=12 => Some(Term::Fall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Spring => "Spring",
            Term::Summer => "Summer",
            Term::Fall => "Fall",
        }
    }

    fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spring" => Some(Term::Spring),
            "summer" => Some(Term::Summer),
            "fall" => Some(Term::Fall),
            _ => None,
        }
    }
}

/// A concrete semester such as `Spring 2024`. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester {
    pub year: i32,
    pub term: Term,
}

impl Semester {
    pub fn new(term: Term, year: i32) -> Self {
        Self { year, term }
    }

    /// Depends on the month and year only.
    pub fn of(date: NaiveDate) -> Self {
        // month() is always 1..=12 for a valid NaiveDate
        let term = Term::from_month(date.month()).unwrap_or(Term::Spring);
        Self {
            year: date.year(),
            term,
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term.as_str(), self.year)
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(term), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("'{}' is not of the form '<Spring|Summer|Fall> <year>'", s));
        };

        let term = Term::from_input(term).ok_or_else(|| format!("unknown term '{}'", term))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year '{}'", year))?;

        Ok(Semester::new(term, year))
    }
}

/// Semester of a possibly malformed date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemesterBucket {
    Known(Semester),
    Unknown,
}

impl SemesterBucket {
    pub fn from_date_str(date: &str) -> Self {
        if !is_date_shaped(date) {
            return SemesterBucket::Unknown;
        }
        match NaiveDate::parse_from_str(date, DATE_FORMAT) {
            Ok(d) => SemesterBucket::Known(Semester::of(d)),
            Err(_) => SemesterBucket::Unknown,
        }
    }
}

impl From<NaiveDate> for SemesterBucket {
    fn from(date: NaiveDate) -> Self {
        SemesterBucket::Known(Semester::of(date))
    }
}

impl fmt::Display for SemesterBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemesterBucket::Known(s) => s.fmt(f),
            SemesterBucket::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Which semester a view is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SemesterFilter {
    #[default]
    All,
    Only(Semester),
}

impl SemesterFilter {
    /// `All` keeps everything, `Unknown` included. A concrete semester
    /// never matches `Unknown`.
    pub fn matches(&self, bucket: &SemesterBucket) -> bool {
        match (self, bucket) {
            (SemesterFilter::All, _) => true,
            (SemesterFilter::Only(wanted), SemesterBucket::Known(s)) => wanted == s,
            (SemesterFilter::Only(_), SemesterBucket::Unknown) => false,
        }
    }

    /// `all` followed by every semester that has at least one date, oldest first.
    pub fn options<I>(dates: I) -> Vec<SemesterFilter>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut semesters: Vec<Semester> = dates.into_iter().map(Semester::of).collect();
        semesters.sort();
        semesters.dedup();

        std::iter::once(SemesterFilter::All)
            .chain(semesters.into_iter().map(SemesterFilter::Only))
            .collect()
    }
}

impl fmt::Display for SemesterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemesterFilter::All => f.write_str("all"),
            SemesterFilter::Only(s) => s.fmt(f),
        }
    }
}

impl FromStr for SemesterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(SemesterFilter::All);
        }
        trimmed.parse::<Semester>().map(SemesterFilter::Only)
    }
}
