use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of work done during a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Tour,
    Registration,
    #[serde(rename = "org wide")]
    OrgWide,
    Other,
    Training,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::Tour,
        ActivityKind::Registration,
        ActivityKind::OrgWide,
        ActivityKind::Other,
        ActivityKind::Training,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ActivityKind::Tour => "tour",
            ActivityKind::Registration => "registration",
            ActivityKind::OrgWide => "org wide",
            ActivityKind::Other => "other",
            ActivityKind::Training => "training",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "tour" => Some(ActivityKind::Tour),
            "registration" => Some(ActivityKind::Registration),
            "org wide" => Some(ActivityKind::OrgWide),
            "other" => Some(ActivityKind::Other),
            "training" => Some(ActivityKind::Training),
            _ => None,
        }
    }

    /// Helper: convert user input (any case, `org wide` / `org-wide` / `orgwide`)
    pub fn from_input(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "orgwide" | "org wides" => Some(ActivityKind::OrgWide),
            other => ActivityKind::from_db_str(other),
        }
    }

    /// Breakdown label: the stored key with only its first letter upper-cased.
    pub fn label(&self) -> String {
        let key = self.to_db_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::from_input(s).ok_or_else(|| {
            let known: Vec<&str> = ActivityKind::ALL.iter().map(|a| a.to_db_str()).collect();
            format!("'{}' is not a known activity (use one of: {})", s, known.join(", "))
        })
    }
}
