//! Core library modules for route-rank
//!
//! Leaf-first: routes and their parser, the record store, key extraction,
//! aggregation, top-N selection and the report.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod parser;
pub mod query;
pub mod report;
pub mod route;
pub mod select;
pub mod store;

// Re-export main types for internal use
pub use aggregate::{aggregate, AggregateGroup, AggregatedCollection, Aggregation, Anomaly};
pub use config::{AnalysisOptions, ProgressCallback, QueryConfig, OUTPUT_FILE};
pub use query::{Direction, Query, Subject};
pub use report::Report;
pub use route::Route;
pub use select::{extract_extreme, select_top_n};
pub use store::RouteStore;
