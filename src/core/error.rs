//! Error types for route-rank
//!
//! Fatal failures are file-boundary problems; everything else the pipeline
//! runs into is reported as an [`Anomaly`](crate::core::aggregate::Anomaly)
//! and processing continues.

use std::fmt;
use std::path::{Path, PathBuf};

use strsim::{jaro_winkler, normalized_levenshtein};

/// Record keys understood by the route parser
pub const KNOWN_FIELDS: [&str; 13] = [
    "- airline_name",
    "airline_icao_unique_code",
    "airline_country",
    "from_airport_name",
    "from_airport_city",
    "from_airport_country",
    "from_airport_icao_unique_code",
    "from_airport_altitude",
    "to_airport_name",
    "to_airport_city",
    "to_airport_country",
    "to_airport_icao_unique_code",
    "to_airport_altitude",
];

/// Find the closest candidate to `input`, if any is close enough.
///
/// Scores are 70% Jaro-Winkler and 30% normalized Levenshtein. Jaro-Winkler
/// rewards the long shared prefixes field names have (`to_airport_*`),
/// Levenshtein catches dropped or doubled characters.
fn find_best_fuzzy_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let mut best_match = None;
    let mut best_score = 0.0f64;

    let min_threshold = 0.8;

    for &candidate in candidates {
        let jw_score = jaro_winkler(&input_lower, candidate);
        let lev_score = normalized_levenshtein(&input_lower, candidate);
        let score = (jw_score * 0.7) + (lev_score * 0.3);

        if score >= min_threshold && score > best_score {
            best_score = score;
            best_match = Some(candidate);
        }
    }

    best_match
}

/// Suggest the record key a misspelled input line probably meant
pub fn suggest_field(key: &str) -> Option<&'static str> {
    if KNOWN_FIELDS.iter().any(|known| known.eq_ignore_ascii_case(key)) {
        return None;
    }

    // The marker is compared without its list dash so "airline_nam" still lands on it
    let bare_fields = KNOWN_FIELDS.map(|f| f.trim_start_matches("- "));
    let hit = find_best_fuzzy_match(key.trim_start_matches("- "), &bare_fields)?;
    bare_fields
        .iter()
        .position(|f| *f == hit)
        .map(|index| KNOWN_FIELDS[index])
}

/// Main error type for route-rank operations
#[derive(Debug)]
pub enum Error {
    /// Data file does not exist (or no path was given)
    InputNotFound(PathBuf),

    /// Data file exists but could not be opened or read
    InputUnreadable { path: PathBuf, source: std::io::Error },

    /// Report destination could not be created or written
    OutputUnwritable { path: PathBuf, source: std::io::Error },
}

impl Error {
    pub(crate) fn unreadable(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound(path.to_path_buf())
        } else {
            Error::InputUnreadable { path: path.to_path_buf(), source }
        }
    }

    pub(crate) fn unwritable(path: &Path, source: std::io::Error) -> Self {
        Error::OutputUnwritable { path: path.to_path_buf(), source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => {
                if path.as_os_str().is_empty() {
                    write!(f, "Could not open file: no data file given (use --DATA=<path>)")
                } else {
                    write!(f, "Could not open file '{}'", path.display())
                }
            }
            Error::InputUnreadable { path, source } => {
                write!(f, "Could not read file '{}': {source}", path.display())
            }
            Error::OutputUnwritable { path, source } => {
                write!(f, "Could not open '{}' for writing: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InputUnreadable { source, .. } | Error::OutputUnwritable { source, .. } => {
                Some(source)
            }
            Error::InputNotFound(_) => None,
        }
    }
}

/// Convenience result type for route-rank operations
pub type Result<T> = std::result::Result<T, Error>;
