//! Request parameter types for routing-engine HTTP APIs.
//!
//! Defines the data structures that query-string grammars parse into:
//! [`BaseParameters`] for the fields shared by every service (coordinates,
//! bearings, radiuses, hints) and [`TableParameters`] for the table/matrix
//! service (source/destination subsets, annotation selection). The grammars
//! themselves live in the `route_query_core` crate; these types carry no
//! parsing logic.

#![warn(missing_docs)]

/// Parameters shared by every service.
pub mod base;
/// Parameters for the table/matrix service.
pub mod table;

pub use base::{BaseParameters, Bearing, Coordinate};
pub use table::{AnnotationsType, TableParameters};

// ── Output-structure access ─────────────────────────────────────────────────
// Grammar rules are written against these traits rather than concrete
// parameter structs, so a composite endpoint's parameter type can embed
// `TableParameters` and still be driven through the same rules.

/// Access to the shared [`BaseParameters`] inside an output structure.
pub trait AsBaseParams {
    /// The base-parameter fields this grammar pass writes into.
    fn base_params_mut(&mut self) -> &mut BaseParameters;
}

/// Access to the [`TableParameters`] inside an output structure.
pub trait AsTableParams: AsBaseParams {
    /// The table-parameter fields this grammar pass writes into.
    fn table_params_mut(&mut self) -> &mut TableParameters;
}

impl AsBaseParams for BaseParameters {
    fn base_params_mut(&mut self) -> &mut BaseParameters {
        self
    }
}

impl AsBaseParams for TableParameters {
    fn base_params_mut(&mut self) -> &mut BaseParameters {
        &mut self.base
    }
}

impl AsTableParams for TableParameters {
    fn table_params_mut(&mut self) -> &mut TableParameters {
        self
    }
}
