use thiserror::Error;

/// A query-string parse failure.
///
/// Parsing stops at the first failure; `offset` is the byte offset of the
/// first token no grammar alternative could match at that position. There
/// is no partial-success mode — on failure the caller discards whatever was
/// already written into the output structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no rule matched the query at byte offset {offset}")]
pub struct ParseError {
    /// Byte offset of the first unmatched token.
    pub offset: usize,
}
