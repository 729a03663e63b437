use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Column that can appear in a per-user day block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportColumn {
    Day,
    TotalDuration,
    Duration,
    Projects,
    Project,
    Descriptions,
    Description,
    BillableStatus,
}

impl ReportColumn {
    pub fn title(&self) -> &'static str {
        match self {
            ReportColumn::Day => "Day",
            ReportColumn::TotalDuration => "Total Duration",
            ReportColumn::Duration => "Duration",
            ReportColumn::Projects => "Projects",
            ReportColumn::Project => "Project",
            ReportColumn::Descriptions => "Descriptions",
            ReportColumn::Description => "Description",
            ReportColumn::BillableStatus => "Billable Status",
        }
    }

    /// Day and duration columns are always rendered; the rest are details.
    pub fn is_detail(&self) -> bool {
        !matches!(
            self,
            ReportColumn::Day | ReportColumn::TotalDuration | ReportColumn::Duration
        )
    }

    pub fn is_duration(&self) -> bool {
        matches!(self, ReportColumn::TotalDuration | ReportColumn::Duration)
    }
}

/// Fixed set of report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportSchema {
    #[default]
    Classic,
    Minimalist,
    Detailed,
    #[value(name = "project_focused")]
    ProjectFocused,
}

impl ReportSchema {
    pub const ALL: [ReportSchema; 4] = [
        ReportSchema::Classic,
        ReportSchema::Minimalist,
        ReportSchema::Detailed,
        ReportSchema::ProjectFocused,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReportSchema::Classic => "classic",
            ReportSchema::Minimalist => "minimalist",
            ReportSchema::Detailed => "detailed",
            ReportSchema::ProjectFocused => "project_focused",
        }
    }

    pub fn from_key(key: &str) -> AppResult<Self> {
        let k = key.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|s| s.key() == k)
            .ok_or(AppError::InvalidSchema(k))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReportSchema::Classic => "Classic Report",
            ReportSchema::Minimalist => "Minimalist Report",
            ReportSchema::Detailed => "Detailed Report",
            ReportSchema::ProjectFocused => "Project-Focused Report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReportSchema::Classic => "Traditional timesheet format with daily breakdown",
            ReportSchema::Minimalist => "Clean and simple format focusing on totals",
            ReportSchema::Detailed => "Comprehensive report with all information",
            ReportSchema::ProjectFocused => "Organized by projects first",
        }
    }

    /// Declared column set, in display order.
    pub fn columns(&self) -> &'static [ReportColumn] {
        use ReportColumn::*;
        match self {
            ReportSchema::Classic => &[Day, TotalDuration, Projects],
            ReportSchema::Minimalist => &[Day, TotalDuration],
            ReportSchema::Detailed => &[
                Day,
                TotalDuration,
                Projects,
                Descriptions,
                BillableStatus,
            ],
            ReportSchema::ProjectFocused => &[Project, Day, Duration, Description],
        }
    }

    pub fn show_details(&self) -> bool {
        match self {
            ReportSchema::Minimalist => false,
            ReportSchema::Classic | ReportSchema::Detailed | ReportSchema::ProjectFocused => true,
        }
    }

    /// Columns actually rendered: detail columns are dropped when the
    /// schema does not show details.
    pub fn visible_columns(&self) -> Vec<ReportColumn> {
        let details = self.show_details();
        self.columns()
            .iter()
            .copied()
            .filter(|c| details || !c.is_detail())
            .collect()
    }
}
