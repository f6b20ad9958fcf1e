//! crates/listing/src/error.rs
//!
//! Error types for listing passes.

use std::fmt;
use std::io;

use thiserror::Error;

/// Result type for listing passes.
pub type ListingResult<T> = Result<T, ListingError>;

/// Ownership column that failed numeric conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnershipField {
    /// Third column (`uid` in `ls -n` output).
    Owner,
    /// Fourth column (`gid` in `ls -n` output).
    Group,
}

impl fmt::Display for OwnershipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Owner => "owner id",
            Self::Group => "group id",
        })
    }
}

/// Errors that end a listing pass.
///
/// Lines the parser cannot make sense of are not errors; they are skipped and
/// reported through the `classify` debug flag.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The numeric pass met an ownership column that is not an integer.
    #[error("expected a numeric {field} but found '{token}' in listing line '{line}'")]
    DialectMismatch {
        /// Which column failed.
        field: OwnershipField,
        /// The offending column text.
        token: String,
        /// The complete listing line.
        line: String,
    },
    /// Reading the listing failed.
    #[error("failed to read listing: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
}

impl ListingError {
    pub(crate) fn dialect_mismatch(field: OwnershipField, token: &str, line: &str) -> Self {
        Self::DialectMismatch {
            field,
            token: token.to_owned(),
            line: line.to_owned(),
        }
    }

    /// Returns `true` when the error means the listing used symbolic names
    /// where ids were expected.
    #[must_use]
    pub const fn is_dialect_mismatch(&self) -> bool {
        matches!(self, Self::DialectMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn dialect_mismatch_display_names_column_and_token() {
        let err = ListingError::dialect_mismatch(
            OwnershipField::Group,
            "staff",
            "-rw-r--r-- 1 501 staff 0 Jan 1 2024 a",
        );
        let text = err.to_string();
        assert!(text.contains("numeric group id"));
        assert!(text.contains("'staff'"));
        assert!(err.is_dialect_mismatch());
    }

    #[test]
    fn io_error_converts_and_exposes_source() {
        use std::error::Error;

        let err: ListingError = io::Error::new(ErrorKind::UnexpectedEof, "truncated").into();
        assert!(matches!(err, ListingError::Io(_)));
        assert!(err.to_string().contains("failed to read listing"));
        assert!(err.source().is_some());
        assert!(!err.is_dialect_mismatch());
    }

    #[test]
    fn ownership_field_display() {
        assert_eq!(OwnershipField::Owner.to_string(), "owner id");
        assert_eq!(OwnershipField::Group.to_string(), "group id");
    }
}
