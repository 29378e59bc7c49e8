//! Run configuration for route-rank

use std::path::PathBuf;
use std::sync::Arc;

/// Name of the report written by every run
pub const OUTPUT_FILE: &str = "output.csv";

/// Progress callback receiving `(bytes_read, total_bytes)` while loading
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Parameters of the fixed queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Destination country the airline ranking is restricted to
    pub destination_country: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            destination_country: "Canada".to_string(),
        }
    }
}

/// Options for one analysis run
pub struct AnalysisOptions {
    /// Route data file
    pub data_file: PathBuf,

    /// Query selector; only 1, 2 and 3 produce rows
    pub query_id: u32,

    /// Maximum number of ranked rows
    pub limit: usize,

    /// Report destination
    pub output: PathBuf,

    pub query_config: QueryConfig,

    /// Optional load progress callback
    pub progress: Option<ProgressCallback>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            data_file: PathBuf::new(),
            query_id: 0,
            limit: 0,
            output: PathBuf::from(OUTPUT_FILE),
            query_config: QueryConfig::default(),
            progress: None,
        }
    }
}
