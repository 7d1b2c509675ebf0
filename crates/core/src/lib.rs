//! Query-string grammars for routing-engine HTTP APIs.
//!
//! Turns the query portion of a request URL into the strongly typed
//! parameter structures defined in `route_query_params`. The main entry
//! point is [`TableGrammar`], the grammar for the table/matrix service;
//! [`BaseGrammar`] holds the rules shared by every service and is meant to
//! be composed into service grammars rather than used on its own.
//!
//! Parsing is hand-written recursive descent with ordered choice:
//! alternatives are tried in declaration order against an unchanged cursor
//! position, the first whose prefix matches is committed, and a committed
//! alternative that cannot complete fails the whole parse at the offending
//! offset.

#![warn(missing_docs)]

/// Query grammars: cursor, lexical primitives, base and table rules.
pub mod grammar;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Grammars
pub use grammar::base::BaseGrammar;
pub use grammar::table::{RootRule, TableGrammar};

// Parse machinery
pub use grammar::cursor::Cursor;
pub use grammar::error::ParseError;

// Serialization helpers
pub use grammar::dump::to_pretty_json;

// Parameter types (re-exported from the params crate)
pub use route_query_params as params;
