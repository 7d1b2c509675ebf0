/// Grammar for the parameters shared by every service.
pub mod base;
/// Input cursor and lexical primitives.
pub mod cursor;
/// JSON serialization helpers for parsed parameters.
pub mod dump;
/// The parse failure type.
pub mod error;
/// Grammar for the table/matrix service.
pub mod table;
