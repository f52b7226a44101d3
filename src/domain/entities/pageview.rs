//! Pageview rows and the date-keyed series built from them.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Views recorded for one article on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageviewRow {
    pub date: NaiveDate,
    pub views: u64,
}

impl PageviewRow {
    pub fn new(date: NaiveDate, views: u64) -> Self {
        Self { date, views }
    }
}

/// Daily pageviews for a single article, labeled with the title as typed.
///
/// Rows keep the order in which they were delivered and are keyed uniquely by
/// date: when a date repeats, the later count replaces the earlier one in
/// place. The series is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageviewSeries {
    label: String,
    rows: Vec<PageviewRow>,
}

impl PageviewSeries {
    pub fn new(label: impl Into<String>, rows: impl IntoIterator<Item = PageviewRow>) -> Self {
        let mut unique: Vec<PageviewRow> = Vec::new();
        let mut positions: HashMap<NaiveDate, usize> = HashMap::new();
        for row in rows {
            match positions.entry(row.date) {
                Entry::Occupied(slot) => unique[*slot.get()].views = row.views,
                Entry::Vacant(slot) => {
                    slot.insert(unique.len());
                    unique.push(row);
                }
            }
        }

        Self {
            label: label.into(),
            rows: unique,
        }
    }

    /// An empty series; the "no data" outcome of a fetch.
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rows: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rows(&self) -> &[PageviewRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_views(&self) -> u64 {
        self.rows.iter().map(|row| row.views).sum()
    }

    /// The day with the most views. Ties resolve to the earliest row.
    pub fn peak(&self) -> Option<PageviewRow> {
        self.rows
            .iter()
            .copied()
            .reduce(|best, row| if row.views > best.views { row } else { best })
    }
}
