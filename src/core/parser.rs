//! Line-oriented route parser
//!
//! The data file is a YAML-like list: a header line, then one block of
//! `key: value` lines per route, each block opened by `- airline_name`.

use std::io::BufRead;

use log::debug;

use crate::core::config::ProgressCallback;
use crate::core::error::suggest_field;
use crate::core::route::{Route, RouteField};

/// Substring that opens a new route block
pub const BLOCK_MARKER: &str = "- airline_name";

/// Copy the value of one `key: value` line into `route`.
///
/// The line is split at its first colon. Leading spaces are dropped from
/// both halves and the line ending from the value. Unknown keys and lines
/// without a colon leave the route untouched.
pub fn parse_line(line: &str, route: &mut Route) {
    let Some((key, value)) = line.split_once(':') else {
        return;
    };
    let key = key.trim_start_matches(' ');
    let value = value
        .trim_start_matches(' ')
        .trim_end_matches(|c| c == '\n' || c == '\r');

    match RouteField::from_key(key) {
        Some(field) => route.set(field, value),
        None => match suggest_field(key) {
            Some(suggestion) => debug!("Ignoring key '{key}' (did you mean '{suggestion}'?)"),
            None => debug!("Ignoring key '{key}'"),
        },
    }
}

/// Read every route block from `reader`.
///
/// The first line is always skipped. Lines before the first block marker
/// never produce a route. `progress`, when given, receives
/// `(bytes_read, total_bytes)` after every line.
pub fn parse_routes<R: BufRead>(
    mut reader: R,
    total_bytes: u64,
    progress: Option<&ProgressCallback>,
) -> std::io::Result<Vec<Route>> {
    let mut routes = Vec::new();
    let mut current: Option<Route> = None;
    let mut line = String::new();
    let mut bytes_read = 0u64;
    let mut is_first_line = true;

    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            break;
        }
        bytes_read += n as u64;
        if let Some(callback) = progress {
            callback(bytes_read, total_bytes);
        }

        if is_first_line {
            is_first_line = false;
            continue;
        }

        if line.contains(BLOCK_MARKER) {
            if let Some(done) = current.take() {
                routes.push(done);
            }
            current = Some(Route::default());
        }

        if let Some(route) = current.as_mut() {
            parse_line(&line, route);
        }
    }

    if let Some(done) = current {
        routes.push(done);
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    const SAMPLE: &str = "routes:
  - airline_name: Air Canada
    airline_icao_unique_code: ACA
    airline_country: Canada
    from_airport_name: Heathrow
    from_airport_city: London
    from_airport_country: United Kingdom
    from_airport_icao_unique_code: EGLL
    from_airport_altitude: 83
    to_airport_name: Pearson
    to_airport_city: Toronto
    to_airport_country: Canada
    to_airport_icao_unique_code: CYYZ
    to_airport_altitude: 569
  - airline_name: KLM
    airline_icao_unique_code: KLM
    to_airport_name: Schiphol
    to_airport_country: Netherlands
";

    #[test]
    fn test_parse_line_trims_and_copies() {
        let mut route = Route::default();
        parse_line("    to_airport_city: Toronto\r\n", &mut route);
        assert_eq!(route.to_airport_city, "Toronto");

        parse_line("  - airline_name: Air Canada\n", &mut route);
        assert_eq!(route.airline_name, "Air Canada");
    }

    #[test]
    fn test_parse_line_ignores_unknown_and_colonless() {
        let mut route = Route::default();
        parse_line("    to_airport_contry: Canada\n", &mut route);
        parse_line("just some text\n", &mut route);
        assert_eq!(route, Route::default());
    }

    #[test]
    fn test_parse_line_keeps_text_after_second_colon() {
        let mut route = Route::default();
        parse_line("    to_airport_name: Terminal: North\n", &mut route);
        assert_eq!(route.to_airport_name, "Terminal: North");
    }

    #[test]
    fn test_parse_routes_blocks() {
        let routes = parse_routes(Cursor::new(SAMPLE), SAMPLE.len() as u64, None).unwrap();
        assert_eq!(routes.len(), 2);

        assert_eq!(routes[0].airline_name, "Air Canada");
        assert_eq!(routes[0].airline_code, "ACA");
        assert_eq!(routes[0].from_airport_altitude, "83");
        assert_eq!(routes[0].to_airport_code, "CYYZ");

        assert_eq!(routes[1].airline_name, "KLM");
        assert_eq!(routes[1].to_airport_country, "Netherlands");
        assert!(routes[1].to_airport_city.is_empty());
    }

    #[test]
    fn test_parse_routes_crlf_blocks_match_lf() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        let routes = parse_routes(Cursor::new(&crlf), crlf.len() as u64, None).unwrap();
        let expected = parse_routes(Cursor::new(SAMPLE), SAMPLE.len() as u64, None).unwrap();

        assert_eq!(routes, expected);
        assert_eq!(routes[1].to_airport_country, "Netherlands");
    }

    #[test]
    fn test_parse_routes_skips_header_even_if_it_is_a_marker() {
        let input = "- airline_name: Hidden\n- airline_name: Shown\n";
        let routes = parse_routes(Cursor::new(input), input.len() as u64, None).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].airline_name, "Shown");
    }

    #[test]
    fn test_parse_routes_empty_inputs() {
        assert!(parse_routes(Cursor::new(""), 0, None).unwrap().is_empty());
        let header_only = "routes:\n  other_key: 1\n";
        assert!(parse_routes(Cursor::new(header_only), 0, None).unwrap().is_empty());
    }

    #[test]
    fn test_parse_routes_reports_progress() {
        let seen = Arc::new(AtomicU64::new(0));
        let sink = seen.clone();
        let callback: ProgressCallback = Arc::new(move |read, total| {
            assert!(read <= total);
            sink.store(read, Ordering::SeqCst);
        });

        parse_routes(Cursor::new(SAMPLE), SAMPLE.len() as u64, Some(&callback)).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), SAMPLE.len() as u64);
    }
}
