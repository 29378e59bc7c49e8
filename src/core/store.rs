//! Record store holding every route of one run

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;

use crate::core::config::{ProgressCallback, QueryConfig};
use crate::core::error::{Error, Result};
use crate::core::parser::parse_routes;
use crate::core::query::Query;
use crate::core::route::Route;

/// Ordered collection of parsed routes, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteStore {
    routes: Vec<Route>,
}

impl RouteStore {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Load and parse a route data file
    pub fn load(path: &Path, progress: Option<&ProgressCallback>) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
        let total_bytes = file.metadata().map(|m| m.len()).unwrap_or(0);

        let routes = parse_routes(BufReader::new(file), total_bytes, progress)
            .map_err(|e| Error::unreadable(path, e))?;

        info!("Loaded {} routes from {}", routes.len(), path.display());
        Ok(Self { routes })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Routes a query aggregates over, in file order.
    ///
    /// The airline query only sees routes into the configured destination
    /// country (exact, case-sensitive match); the others see everything.
    pub fn matching<'a>(
        &'a self,
        query: Query,
        config: &'a QueryConfig,
    ) -> impl Iterator<Item = &'a Route> + 'a {
        self.routes.iter().filter(move |route| match query {
            Query::TopAirlinesToCountry => route.to_airport_country == config.destination_country,
            Query::LeastDestinationCountries | Query::TopDestinationAirports => true,
        })
    }
}
