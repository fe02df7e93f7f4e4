//! Error types for the export library.
//!
//! The layout core absorbs malformed records by defaulting, so these errors only
//! surface at the edges: reading an export request, writing bytes, and
//! verifying a produced file.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading input or producing a PDF.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Export request could not be decoded
    #[error("Invalid export request: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid cross-reference table
    #[error("Invalid cross-reference table")]
    InvalidXref,

    /// An xref entry does not point at its object's header
    #[error("Object {id} is not located at byte {offset}")]
    ObjectOffsetMismatch {
        /// Object number from the xref table
        id: u32,
        /// Offset declared for the object
        offset: u64,
    },

    /// Referenced object not found in cross-reference table
    #[error("Object not found: {0} 0 R")]
    MissingObject(u32),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_mismatch_error() {
        let err = Error::ObjectOffsetMismatch {
            id: 7,
            offset: 1234,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Object 7"));
        assert!(msg.contains("1234"));
    }

    #[test]
    fn test_missing_object_error() {
        let err = Error::MissingObject(10);
        assert!(format!("{}", err).contains("10 0 R"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(format!("{}", err).starts_with("Invalid export request"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
