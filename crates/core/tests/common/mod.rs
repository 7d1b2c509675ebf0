//! Shared test helpers for `route_query_core` integration tests.

#![allow(unreachable_pub)]

use route_query_core::{ParseError, TableGrammar};
use route_query_params::TableParameters;

/// A two-waypoint coordinate prefix used by most queries under test.
#[allow(dead_code)]
pub const COORDS: &str = "13.388860,52.517037;13.397634,52.529407";

/// Parse a query with a fresh grammar into a fresh parameter struct.
#[allow(dead_code)]
pub fn parse(query: &str) -> Result<TableParameters, ParseError> {
    let grammar = TableGrammar::new();
    let mut params = TableParameters::default();
    grammar.parse(query, &mut params)?;
    Ok(params)
}

/// Parse a query that must succeed.
#[allow(dead_code)]
pub fn parse_ok(query: &str) -> TableParameters {
    parse(query).unwrap_or_else(|e| panic!("query {query:?} should parse: {e}"))
}

/// Parse a query that must fail; returns the failure offset.
#[allow(dead_code)]
pub fn parse_err(query: &str) -> usize {
    match parse(query) {
        Ok(params) => panic!("query {query:?} should fail, parsed {params:?}"),
        Err(e) => e.offset,
    }
}

/// Byte offset of `needle` within `query`, for failure-position assertions.
#[allow(dead_code)]
pub fn offset_of(query: &str, needle: &str) -> usize {
    query
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in {query:?}"))
}
