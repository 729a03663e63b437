// src/report/filter.rs

use crate::models::TimeEntry;
use serde::{Deserialize, Serialize};

/// Inclusion filters. An empty list means no restriction on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub clients: Vec<String>,
    #[serde(default)]
    pub users: Vec<String>,
}

impl ReportFilters {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.clients.is_empty() && self.users.is_empty()
    }

    pub fn matches(&self, entry: &TimeEntry) -> bool {
        allowed(&self.projects, &entry.project)
            && allowed(&self.clients, &entry.client)
            && allowed(&self.users, &entry.user)
    }

    /// Keep only matching entries, preserving input order.
    pub fn apply(&self, entries: Vec<TimeEntry>) -> Vec<TimeEntry> {
        if self.is_empty() {
            return entries;
        }
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

fn allowed(selection: &[String], value: &str) -> bool {
    selection.is_empty() || selection.iter().any(|s| s == value)
}
