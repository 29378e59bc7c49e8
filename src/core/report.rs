//! CSV report rendering
//!
//! Rows are written as-is: the only quoting is the pair of literal quotes
//! around airport subjects, commas inside names pass through.

use std::fs;
use std::path::Path;

use log::info;

use crate::core::aggregate::{AggregateGroup, Anomaly};
use crate::core::error::{Error, Result};
use crate::core::query::Query;

/// Header line of every report
pub const REPORT_HEADER: &str = "subject,statistic";

/// Ranked result of one run, in extraction order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// `None` when the run was asked an unknown question
    pub query: Option<Query>,
    pub rows: Vec<AggregateGroup>,
    /// Non-fatal issues seen while grouping; they never reach the CSV
    pub anomalies: Vec<Anomaly>,
}

impl Report {
    pub fn new(query: Option<Query>, rows: Vec<AggregateGroup>) -> Self {
        Self {
            query,
            rows,
            anomalies: Vec::new(),
        }
    }

    /// Attach the anomalies recorded by the aggregation pass
    pub fn with_anomalies(mut self, anomalies: Vec<Anomaly>) -> Self {
        self.anomalies = anomalies;
        self
    }

    /// Header-only report
    pub fn empty(query: Option<Query>) -> Self {
        Self::new(query, Vec::new())
    }

    /// Render header and rows, one per line
    pub fn to_csv(&self) -> String {
        let mut csv = String::with_capacity(32 * (self.rows.len() + 1));
        csv.push_str(REPORT_HEADER);
        csv.push('\n');

        for row in &self.rows {
            csv.push_str(&format!("{},{}\n", row.subject, row.count));
        }

        csv
    }

    /// Create or truncate `path` and write the rendered report to it
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv()).map_err(|e| Error::unwritable(path, e))?;
        info!("Wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }
}
