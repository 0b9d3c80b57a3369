//! Error classification shared by every service.

/// Broad failure category a caller can branch on without reading messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested row, or a row it references, does not exist.
    NotFound,

    /// The input was rejected before anything was persisted.
    Validation,

    /// The store failed or rejected the statement.
    Persistence,
}
