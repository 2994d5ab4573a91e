//! Error kinds for railgraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on the kind to decide how to report a failure; the message
/// and context carry the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Input errors
    // =========================================================================
    /// A node or edge tuple, or a document field, does not have the expected shape
    InvalidFormat,

    /// The facts document could not be deserialized
    DeserializationFailed,

    /// Invalid argument passed on the command line or to a function
    InvalidArgument,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether the error was caused by the caller's input rather than the
    /// environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidFormat | ErrorKind::DeserializationFailed | ErrorKind::InvalidArgument
        )
    }
}
