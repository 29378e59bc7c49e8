//! Grouping and counting of routes
//!
//! Groups live in a `Vec` kept in ascending key order. Lookups and
//! insertion points are found by a linear scan; this order only makes
//! insertion deterministic, ranking is done by [`crate::core::select`].

use std::fmt;

use log::{info, warn};

use crate::core::query::{Query, Subject};
use crate::core::route::Route;

/// One distinct key and how many routes mapped to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateGroup {
    pub subject: Subject,
    pub count: u32,
}

impl AggregateGroup {
    fn new(subject: Subject) -> Self {
        Self { subject, count: 1 }
    }

    pub fn key(&self) -> &str {
        self.subject.key()
    }
}

/// Groups of one query, ascending by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedCollection {
    groups: Vec<AggregateGroup>,
}

impl AggregatedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan for `key`.
    ///
    /// `Ok(index)` is the existing group. `Err(index)` is where a new group
    /// belongs: before the first key that compares greater.
    pub fn locate(&self, key: &str) -> Result<usize, usize> {
        for (index, group) in self.groups.iter().enumerate() {
            match group.key().cmp(key) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => return Ok(index),
                std::cmp::Ordering::Greater => return Err(index),
            }
        }
        Err(self.groups.len())
    }

    /// Count one more route for `subject`, creating its group on first sight.
    ///
    /// Returns the group's count after the update. A repeat key only bumps
    /// the count; the stored subject stays the first one seen.
    pub fn observe(&mut self, subject: Subject) -> u32 {
        match self.locate(subject.key()) {
            Ok(index) => {
                let group = &mut self.groups[index];
                group.count += 1;
                group.count
            }
            Err(index) => {
                self.groups.insert(index, AggregateGroup::new(subject));
                1
            }
        }
    }

    /// Move the group at `index` out of the collection
    pub fn take(&mut self, index: usize) -> Option<AggregateGroup> {
        (index < self.groups.len()).then(|| self.groups.remove(index))
    }

    pub fn groups(&self) -> &[AggregateGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Non-fatal data problem met while aggregating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// Route at `position` (in the query's input order) has an empty grouping key.
    /// It is still counted, under the empty key.
    BlankKey { position: usize },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::BlankKey { position } => {
                write!(f, "route #{position} has an empty grouping key")
            }
        }
    }
}

/// Outcome of one aggregation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub collection: AggregatedCollection,
    pub anomalies: Vec<Anomaly>,
}

/// Group `routes` by the key `query` derives, in one pass over input order
pub fn aggregate<'a, I>(routes: I, query: Query) -> Aggregation
where
    I: IntoIterator<Item = &'a Route>,
{
    let mut aggregation = Aggregation::default();
    let mut seen = 0usize;

    for (position, route) in routes.into_iter().enumerate() {
        let subject = query.extract(route);
        if subject.key().is_empty() {
            let anomaly = Anomaly::BlankKey { position };
            warn!("{query}: {anomaly}");
            aggregation.anomalies.push(anomaly);
        }
        aggregation.collection.observe(subject);
        seen += 1;
    }

    info!(
        "Aggregated {seen} routes into {} groups for {query}",
        aggregation.collection.len()
    );
    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str) -> Route {
        Route {
            to_airport_country: name.to_string(),
            ..Default::default()
        }
    }

    fn airline(name: &str, code: &str) -> Route {
        Route {
            airline_name: name.to_string(),
            airline_code: code.to_string(),
            to_airport_country: "Canada".to_string(),
            ..Default::default()
        }
    }

    fn keys(collection: &AggregatedCollection) -> Vec<&str> {
        collection.groups().iter().map(|g| g.key()).collect()
    }

    #[test]
    fn test_locate_positions() {
        let mut collection = AggregatedCollection::new();
        assert_eq!(collection.locate("m"), Err(0));

        for key in ["m", "c", "x"] {
            collection.observe(Subject::Country { name: key.to_string() });
        }
        assert_eq!(keys(&collection), vec!["c", "m", "x"]);
        assert_eq!(collection.locate("a"), Err(0));
        assert_eq!(collection.locate("c"), Ok(0));
        assert_eq!(collection.locate("d"), Err(1));
        assert_eq!(collection.locate("x"), Ok(2));
        assert_eq!(collection.locate("z"), Err(3));
    }

    #[test]
    fn test_counts_and_sorted_order() {
        let routes: Vec<Route> = ["Japan", "Canada", "Japan", "Brazil", "Canada", "Canada"]
            .into_iter()
            .map(country)
            .collect();

        let aggregation = aggregate(&routes, Query::LeastDestinationCountries);
        let groups = aggregation.collection.groups();

        assert_eq!(keys(&aggregation.collection), vec!["Brazil", "Canada", "Japan"]);
        assert_eq!(groups.iter().map(|g| g.count).collect::<Vec<_>>(), vec![1, 3, 2]);
        assert!(aggregation.anomalies.is_empty());
    }

    #[test]
    fn test_sorted_after_every_insertion() {
        let mut collection = AggregatedCollection::new();
        for name in ["delta", "alpha", "echo", "bravo", "alpha", "charlie", "Zulu"] {
            collection.observe(Subject::Country { name: name.to_string() });
            let current = keys(&collection);
            let mut sorted = current.clone();
            sorted.sort();
            assert_eq!(current, sorted);
        }
        // Byte order puts uppercase first
        assert_eq!(collection.groups()[0].key(), "Zulu");
    }

    #[test]
    fn test_first_subject_is_kept() {
        let routes = vec![airline("AirX", "AX1"), airline("AirX", "AX9")];
        let aggregation = aggregate(&routes, Query::TopAirlinesToCountry);

        assert_eq!(aggregation.collection.len(), 1);
        let group = &aggregation.collection.groups()[0];
        assert_eq!(group.count, 2);
        assert_eq!(
            group.subject,
            Subject::Airline { name: "AirX".to_string(), code: "AX1".to_string() }
        );
    }

    #[test]
    fn test_seed_record_is_normalized() {
        let routes = vec![country("' France'"), country("France"), country("'France'")];
        let aggregation = aggregate(&routes, Query::LeastDestinationCountries);

        assert_eq!(keys(&aggregation.collection), vec!["France"]);
        assert_eq!(aggregation.collection.groups()[0].count, 3);
    }

    #[test]
    fn test_group_count_matches_distinct_keys() {
        let names = ["b", "a", "c", "a", "b", "d", "a", "e", "c"];
        let routes: Vec<Route> = names.into_iter().map(country).collect();
        let aggregation = aggregate(&routes, Query::LeastDestinationCountries);

        let mut distinct: Vec<&str> = names.to_vec();
        distinct.sort();
        distinct.dedup();
        assert_eq!(aggregation.collection.len(), distinct.len());

        for group in aggregation.collection.groups() {
            let expected = names.iter().filter(|n| **n == group.key()).count() as u32;
            assert_eq!(group.count, expected, "count for {}", group.key());
        }
    }

    #[test]
    fn test_blank_keys_are_reported_and_counted() {
        let routes = vec![country("Japan"), country(""), country("")];
        let aggregation = aggregate(&routes, Query::LeastDestinationCountries);

        assert_eq!(
            aggregation.anomalies,
            vec![Anomaly::BlankKey { position: 1 }, Anomaly::BlankKey { position: 2 }]
        );
        assert_eq!(keys(&aggregation.collection), vec!["", "Japan"]);
        assert_eq!(aggregation.collection.groups()[0].count, 2);
    }

    #[test]
    fn test_empty_input() {
        let aggregation = aggregate(&Vec::<Route>::new(), Query::TopDestinationAirports);
        assert!(aggregation.collection.is_empty());
        assert!(aggregation.anomalies.is_empty());
    }

    #[test]
    fn test_take() {
        let mut collection = AggregatedCollection::new();
        collection.observe(Subject::Country { name: "a".to_string() });
        assert!(collection.take(1).is_none());
        assert_eq!(collection.take(0).map(|g| g.count), Some(1));
        assert!(collection.is_empty());
    }
}
