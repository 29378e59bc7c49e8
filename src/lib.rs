//! # Route-rank Library
//!
//! Answers three fixed questions about a flight-route dataset with a ranked
//! top-N report:
//!
//! 1. Which airlines fly the most routes into Canada?
//! 2. Which destination countries appear least often?
//! 3. Which destination airports appear most often?
//!
//! Routes are grouped by a per-question key into a collection kept sorted by
//! key, then the most extreme groups are pulled out one scan at a time.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Top 5 destination airports
//!     let report = route_rank::analyze("airline-routes-data.yaml", 3, 5)?;
//!     print!("{}", report.to_csv());
//!     Ok(())
//! }
//! ```
//!
//! ## Writing the report file
//!
//! ```rust,no_run
//! use route_rank::AnalysisOptions;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = AnalysisOptions {
//!         data_file: "airline-routes-data.yaml".into(),
//!         query_id: 2,
//!         limit: 10,
//!         ..Default::default()
//!     };
//!     // Writes output.csv in the working directory
//!     route_rank::run(&options)?;
//!     Ok(())
//! }
//! ```

use std::path::Path;

use log::warn;

// Re-export core types that users might need
pub use crate::core::error::{Error, Result};
pub use crate::core::{
    AggregateGroup, AggregatedCollection, Aggregation, AnalysisOptions, Anomaly, Direction,
    ProgressCallback, Query, QueryConfig, Report, Route, RouteStore, Subject, OUTPUT_FILE,
};

// Internal modules
pub mod core;

/// Answer `query` over an already loaded store.
///
/// An unknown query (`None`) yields a header-only report. Anomalies recorded
/// while grouping are carried on the report.
pub fn answer(
    store: &RouteStore,
    query: Option<Query>,
    limit: usize,
    config: &QueryConfig,
) -> Report {
    let Some(query) = query else {
        return Report::empty(None);
    };

    let Aggregation {
        mut collection,
        anomalies,
    } = core::aggregate(store.matching(query, config), query);
    let rows = core::select_top_n(&mut collection, limit, query.direction());

    Report::new(Some(query), rows).with_anomalies(anomalies)
}

/// Load `data_file` and answer question `query_id` with at most `limit` rows
///
/// # Examples
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = route_rank::analyze("routes.yaml", 1, 10)?;
/// for row in &report.rows {
///     println!("{} -> {}", row.subject, row.count);
/// }
/// # Ok(())
/// # }
/// ```
pub fn analyze<P: AsRef<Path>>(data_file: P, query_id: u32, limit: usize) -> Result<Report> {
    let options = AnalysisOptions {
        data_file: data_file.as_ref().to_path_buf(),
        query_id,
        limit,
        ..Default::default()
    };
    analyze_with_options(&options)
}

/// Analyze with custom options, without writing anything.
///
/// Unknown question numbers produce an empty report and the data file is
/// not touched. Otherwise a missing or unreadable data file is an error.
pub fn analyze_with_options(options: &AnalysisOptions) -> Result<Report> {
    let Some(query) = Query::from_id(options.query_id) else {
        warn!(
            "Unknown question {}; expected 1, 2 or 3. The report will be empty",
            options.query_id
        );
        return Ok(Report::empty(None));
    };

    let store = RouteStore::load(&options.data_file, options.progress.as_ref())?;
    Ok(answer(&store, Some(query), options.limit, &options.query_config))
}

/// Analyze and write the report to `options.output`
pub fn run(options: &AnalysisOptions) -> Result<Report> {
    let report = analyze_with_options(options)?;
    report.write_to(&options.output)?;
    Ok(report)
}
