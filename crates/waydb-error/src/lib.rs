use thiserror::Error;

/// Primary error type for WayDB operations.
///
/// Every load is all-or-nothing: a failed registry or index load produces one
/// of these and no partial instance. No variant is ever downgraded to a
/// default value by the decoding layers.
#[derive(Error, Debug)]
pub enum WaydbError {
    // === Catalog Errors ===
    /// The type catalog carries a format version this build does not speak.
    #[error("unexpected catalog format version {actual} (expected {expected})")]
    FormatVersionMismatch { actual: u32, expected: u32 },

    /// A type record in the catalog has an empty name.
    #[error("type {ordinal} in catalog has an empty name")]
    InvalidTypeName { ordinal: u32 },

    // === Decode Errors ===
    /// The stream ended in the middle of a value.
    #[error("truncated stream at byte offset {offset}")]
    TruncatedStream { offset: u64 },

    /// A boolean byte was neither 0 nor 1.
    #[error("non-normalized boolean byte {value:#04x} at offset {offset}")]
    MalformedBoolean { value: u8, offset: u64 },

    /// A variable-length integer does not fit the 32-bit result type.
    #[error("varint overflows 32 bits at offset {offset}")]
    VarintOverflow { offset: u64 },

    /// Structural impossibility in an otherwise readable file.
    #[error("database file is malformed: {detail}")]
    DatabaseCorrupt { detail: String },

    // === Index Errors ===
    /// The spatial index references a type id the registry never assigned.
    #[error("spatial index references unresolved type id {id}")]
    UnresolvedTypeId { id: u16 },

    // === Usage Errors ===
    /// A compact type id width outside the supported {1, 2} byte range.
    #[error("unsupported type id width {width} (must be 1 or 2)")]
    UnsupportedTypeIdWidth { width: u8 },

    // === I/O Errors ===
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaydbError {
    /// Create a corruption error with free-form detail.
    pub fn corrupt(detail: impl Into<String>) -> Self {
        Self::DatabaseCorrupt {
            detail: detail.into(),
        }
    }

    /// Whether this error indicates a damaged or mis-produced file, as
    /// opposed to I/O failures or caller mistakes.
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(
            self,
            Self::FormatVersionMismatch { .. }
                | Self::InvalidTypeName { .. }
                | Self::TruncatedStream { .. }
                | Self::MalformedBoolean { .. }
                | Self::VarintOverflow { .. }
                | Self::DatabaseCorrupt { .. }
                | Self::UnresolvedTypeId { .. }
        )
    }

    /// Whether this error was raised because the stream ran out of bytes.
    #[must_use]
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::TruncatedStream { .. })
    }

    /// Whether this error is a misuse of the API rather than a bad file.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::UnsupportedTypeIdWidth { .. })
    }
}

/// Result type alias using `WaydbError`.
pub type Result<T> = std::result::Result<T, WaydbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_version_mismatch() {
        let err = WaydbError::FormatVersionMismatch {
            actual: 18,
            expected: 19,
        };
        assert_eq!(
            err.to_string(),
            "unexpected catalog format version 18 (expected 19)"
        );
    }

    #[test]
    fn error_display_truncated() {
        let err = WaydbError::TruncatedStream { offset: 77 };
        assert_eq!(err.to_string(), "truncated stream at byte offset 77");
    }

    #[test]
    fn error_display_boolean() {
        let err = WaydbError::MalformedBoolean {
            value: 2,
            offset: 10,
        };
        assert_eq!(
            err.to_string(),
            "non-normalized boolean byte 0x02 at offset 10"
        );
    }

    #[test]
    fn corrupt_constructor() {
        let err = WaydbError::corrupt("cell bounds inverted");
        assert!(matches!(
            err,
            WaydbError::DatabaseCorrupt { detail } if detail == "cell bounds inverted"
        ));
    }

    #[test]
    fn corruption_predicate() {
        assert!(WaydbError::TruncatedStream { offset: 0 }.is_corrupt());
        assert!(
            WaydbError::FormatVersionMismatch {
                actual: 1,
                expected: 19
            }
            .is_corrupt()
        );
        assert!(WaydbError::UnresolvedTypeId { id: 9 }.is_corrupt());
        assert!(!WaydbError::UnsupportedTypeIdWidth { width: 4 }.is_corrupt());
    }

    #[test]
    fn truncation_predicate() {
        assert!(WaydbError::TruncatedStream { offset: 12 }.is_truncation());
        assert!(!WaydbError::corrupt("x").is_truncation());
    }

    #[test]
    fn usage_predicate() {
        assert!(WaydbError::UnsupportedTypeIdWidth { width: 3 }.is_usage());
        assert!(!WaydbError::VarintOverflow { offset: 0 }.is_usage());
    }

    #[test]
    fn io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: WaydbError = io_err.into();
        assert!(matches!(err, WaydbError::Io(_)));
        assert!(!err.is_corrupt());
    }
}
