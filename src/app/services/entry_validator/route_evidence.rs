//! Route and distance evidence for cross-country checks
//!
//! Structured `route` and `distance_nm` fields are consulted first. Entries
//! without them fall back to the legacy remarks encoding (`Distance: 42nm`,
//! `KPAO-KSJC`, or bare airport identifiers in the text).

use crate::app::models::LogbookEntry;
use crate::constants::NON_AIRPORT_TOKENS;
use regex::Regex;
use std::sync::LazyLock;

static ROUTE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z0-9]{3,4})\s*(?:->|-|–|→|/)\s*([A-Z0-9]{3,4})\b").unwrap()
});

static REMARKS_DISTANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)distance:\s*([0-9]+(?:\.[0-9]+)?)").unwrap());

static AIRPORT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z0-9]{3,4}\b").unwrap());

/// Distance parsed from a `Distance:` note in the remarks
pub fn remarks_distance(remarks: &str) -> Option<f64> {
    REMARKS_DISTANCE
        .captures(remarks)
        .and_then(|captures| captures.get(1))
        .and_then(|value| value.as_str().parse::<f64>().ok())
}

/// Leg distance: the structured value, else one noted in the remarks
pub fn entry_distance(entry: &LogbookEntry) -> Option<f64> {
    entry
        .distance_nm
        .or_else(|| remarks_distance(entry.remarks_text()))
        .filter(|distance| *distance > 0.0)
}

/// Whether the text contains a `XXX-YYY` style route fragment between two
/// airport-like identifiers
pub fn has_route_separator(text: &str) -> bool {
    ROUTE_SEPARATOR.captures_iter(text).any(|captures| {
        let from = captures.get(1).map_or("", |m| m.as_str());
        let to = captures.get(2).map_or("", |m| m.as_str());
        is_airport_like(from) && is_airport_like(to)
    })
}

fn is_airport_like(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_alphabetic()) && !NON_AIRPORT_TOKENS.contains(&token)
}

/// Airport-like identifiers in the text other than the two endpoints
pub fn intermediate_airports<'a>(
    text: &'a str,
    departure: Option<&str>,
    destination: Option<&str>,
) -> Vec<&'a str> {
    AIRPORT_TOKEN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| is_airport_like(token))
        .filter(|token| !is_endpoint(token, departure) && !is_endpoint(token, destination))
        .collect()
}

fn is_endpoint(token: &str, endpoint: Option<&str>) -> bool {
    endpoint.is_some_and(|id| id.eq_ignore_ascii_case(token))
}

/// Waypoints of a structured route other than the two endpoints
pub fn route_waypoints<'a>(
    route: &'a str,
    departure: Option<&str>,
    destination: Option<&str>,
) -> Vec<&'a str> {
    route
        .split(|c: char| c.is_whitespace() || matches!(c, '-' | '/' | ',' | '–' | '→' | '>'))
        .map(str::trim)
        .filter(|waypoint| !waypoint.is_empty())
        .filter(|waypoint| !is_endpoint(waypoint, departure) && !is_endpoint(waypoint, destination))
        .collect()
}

/// Whether a same-airport flight shows that it actually went somewhere
///
/// Evidence is a route waypoint other than the endpoints, a distance above
/// `min_distance_nm`, or in the remarks a route fragment or an intermediate
/// airport identifier.
pub fn has_route_evidence(entry: &LogbookEntry, min_distance_nm: f64) -> bool {
    let departure = entry.departure_id();
    let destination = entry.destination_id();

    if let Some(route) = entry.route.as_deref() {
        if !route_waypoints(route, departure, destination).is_empty() {
            return true;
        }
    }

    if entry_distance(entry).is_some_and(|distance| distance > min_distance_nm) {
        return true;
    }

    let remarks = entry.remarks_text();
    has_route_separator(remarks) || !intermediate_airports(remarks, departure, destination).is_empty()
}
