//! The three fixed queries and their grouping keys

use std::fmt;

use crate::core::route::Route;

/// Ranking questions the tool answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// 1: airlines with the most routes into the configured destination country
    TopAirlinesToCountry,
    /// 2: destination countries with the fewest routes
    LeastDestinationCountries,
    /// 3: destination airports with the most routes
    TopDestinationAirports,
}

/// Which end of the count range the selector extracts first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Largest count first
    Descending,
    /// Smallest count first
    Ascending,
}

impl Query {
    /// Resolve a command-line query number; anything but 1-3 is `None`
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Query::TopAirlinesToCountry),
            2 => Some(Query::LeastDestinationCountries),
            3 => Some(Query::TopDestinationAirports),
            _ => None,
        }
    }

    pub fn id(self) -> u32 {
        match self {
            Query::TopAirlinesToCountry => 1,
            Query::LeastDestinationCountries => 2,
            Query::TopDestinationAirports => 3,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Query::LeastDestinationCountries => Direction::Ascending,
            Query::TopAirlinesToCountry | Query::TopDestinationAirports => Direction::Descending,
        }
    }

    /// Derive the group subject for `route`, normalizing where the query requires
    pub fn extract(self, route: &Route) -> Subject {
        match self {
            Query::TopAirlinesToCountry => Subject::Airline {
                name: route.airline_name.clone(),
                code: route.airline_code.clone(),
            },
            Query::LeastDestinationCountries => Subject::Country {
                name: normalize_country(&route.to_airport_country),
            },
            Query::TopDestinationAirports => Subject::Airport {
                name: route.to_airport_name.clone(),
                code: route.to_airport_code.clone(),
                city: route.to_airport_city.clone(),
                country: route.to_airport_country.clone(),
            },
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Query::TopAirlinesToCountry => "top airlines by routes into destination country",
            Query::LeastDestinationCountries => "least frequent destination countries",
            Query::TopDestinationAirports => "top destination airports",
        };
        write!(f, "question {} ({text})", self.id())
    }
}

/// Unwrap a quoted country value such as `' Cote d'Ivoire'`.
///
/// Values that start with `'` lose the quote, one following space and a
/// closing quote. Anything else is returned unchanged.
///
/// Unbalanced quotes are tolerated: `'Xyz` becomes `Xyz`, and a value with
/// only a trailing quote such as `Xyz'` is left as is.
pub fn normalize_country(raw: &str) -> String {
    match raw.strip_prefix('\'') {
        Some(inner) => {
            let inner = inner.strip_prefix(' ').unwrap_or(inner);
            inner.strip_suffix('\'').unwrap_or(inner).to_string()
        }
        None => raw.to_string(),
    }
}

/// Descriptive fields of one group, snapshotted from its first route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Airline {
        name: String,
        code: String,
    },
    Country {
        name: String,
    },
    Airport {
        name: String,
        code: String,
        city: String,
        country: String,
    },
}

impl Subject {
    /// Identity key groups are matched and sorted by
    pub fn key(&self) -> &str {
        match self {
            Subject::Airline { name, .. }
            | Subject::Country { name }
            | Subject::Airport { name, .. } => name,
        }
    }
}

/// The `subject` cell of a report row. Commas inside names are not escaped.
impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Airline { name, code } => write!(f, "{name} ({code})"),
            Subject::Country { name } => write!(f, "{name}"),
            Subject::Airport {
                name,
                code,
                city,
                country,
            } => write!(f, "\"{name} ({code}), {city}, {country}\""),
        }
    }
}
