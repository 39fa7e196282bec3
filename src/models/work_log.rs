use super::entry::{ShiftRow, WorkEntry};
use serde::Serialize;

/// The canonical collection of shifts. Insertion order is kept as given;
/// any display ordering is recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WorkLog(Vec<WorkEntry>);

impl WorkLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkEntry> {
        self.0.iter()
    }

    pub fn to_rows(&self) -> Vec<ShiftRow> {
        self.0.iter().map(WorkEntry::to_row).collect()
    }

    /// Positions into `entries()`, newest timestamp first.
    /// Entries sharing a timestamp keep their insertion order.
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.0.len()).collect();
        order.sort_by(|&a, &b| self.0[b].timestamp().cmp(&self.0[a].timestamp()));
        order
    }

    /// Map a 1-based display index to a position in `entries()`.
    pub fn position_of(&self, display_index: usize) -> Option<usize> {
        if display_index == 0 {
            return None;
        }
        self.display_order().get(display_index - 1).copied()
    }
}

impl From<Vec<WorkEntry>> for WorkLog {
    fn from(entries: Vec<WorkEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a WorkLog {
    type Item = &'a WorkEntry;
    type IntoIter = std::slice::Iter<'a, WorkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
