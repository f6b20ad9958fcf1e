//! Interpretation of the owner and group columns.
//!
//! `ls -l` prints names and `ls -n` prints ids in the same two columns. A
//! parser is generic over an [`OwnershipStrategy`] so that one driver handles
//! both dialects.

use attributes::FileAttributes;
use logging::debug_log;

use crate::classify::DataRecord;
use crate::error::{ListingError, ListingResult, OwnershipField};

/// Listing dialect handled by a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// `ls -n`: owner and group are numeric ids.
    Numeric,
    /// `ls -l`: owner and group are names.
    Symbolic,
}

/// Fills the ownership fields of a new entry from its data record.
pub trait OwnershipStrategy {
    /// Dialect this strategy expects.
    fn dialect(&self) -> Dialect;

    /// Copies the owner and group columns of `record` into `attrs`.
    ///
    /// # Errors
    ///
    /// Returns an error when the columns cannot be interpreted in this
    /// strategy's dialect. `attrs` is left untouched in that case.
    fn apply(&self, record: &DataRecord<'_>, attrs: &mut FileAttributes) -> ListingResult<()>;
}

/// Reads owner and group as numeric ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericIds;

impl OwnershipStrategy for NumericIds {
    fn dialect(&self) -> Dialect {
        Dialect::Numeric
    }

    fn apply(&self, record: &DataRecord<'_>, attrs: &mut FileAttributes) -> ListingResult<()> {
        let owner = parse_id(record.owner()).ok_or_else(|| {
            ListingError::dialect_mismatch(OwnershipField::Owner, record.owner(), record.line())
        })?;
        let group = parse_id(record.group()).ok_or_else(|| {
            ListingError::dialect_mismatch(OwnershipField::Group, record.group(), record.line())
        })?;
        debug_log!(Own, 2, "{}: uid {} gid {}", record.path(), owner, group);
        attrs.set_owner_id(owner).set_group_id(group);
        Ok(())
    }
}

/// Reads owner and group as names, verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolicNames;

impl OwnershipStrategy for SymbolicNames {
    fn dialect(&self) -> Dialect {
        Dialect::Symbolic
    }

    fn apply(&self, record: &DataRecord<'_>, attrs: &mut FileAttributes) -> ListingResult<()> {
        debug_log!(
            Own,
            2,
            "{}: owner {} group {}",
            record.path(),
            record.owner(),
            record.group()
        );
        attrs
            .set_owner_name(record.owner())
            .set_group_name(record.group());
        Ok(())
    }
}

/// Parses an id column. Negative values in `i32` range wrap, so the `-2`
/// macOS prints for `nobody` becomes `4294967294`.
pub(crate) fn parse_id(token: &str) -> Option<u32> {
    let value: i64 = token.parse().ok()?;
    u32::try_from(value)
        .ok()
        .or_else(|| i32::try_from(value).ok().map(|id| id as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{LineClassifier, LineKind};
    use crate::state::ParseState;

    fn apply<O: OwnershipStrategy>(strategy: &O, line: &str) -> ListingResult<FileAttributes> {
        let classifier = LineClassifier::default();
        let LineKind::Record(record) = classifier.classify(line, ParseState::Normal) else {
            panic!("not a data line: {line}");
        };
        let mut attrs = FileAttributes::new();
        strategy.apply(&record, &mut attrs)?;
        Ok(attrs)
    }

    #[test]
    fn parse_id_accepts_full_unsigned_range() {
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("501"), Some(501));
        assert_eq!(parse_id("4294967295"), Some(u32::MAX));
    }

    #[test]
    fn parse_id_wraps_negative_ids() {
        assert_eq!(parse_id("-2"), Some(4_294_967_294));
        assert_eq!(parse_id("-1"), Some(u32::MAX));
    }

    #[test]
    fn parse_id_rejects_names_and_out_of_range() {
        assert_eq!(parse_id("staff"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("4294967296"), None);
        assert_eq!(parse_id("-2147483649"), None);
    }

    #[test]
    fn numeric_sets_ids_only() {
        let attrs = apply(&NumericIds, "drwxr-xr-x 2 501 20 4096 Jan 12 2023 dir")
            .expect("numeric line");
        assert_eq!(attrs.owner_id(), Some(501));
        assert_eq!(attrs.group_id(), Some(20));
        assert_eq!(attrs.owner_name(), None);
        assert_eq!(attrs.group_name(), None);
    }

    #[test]
    fn numeric_rejects_symbolic_owner() {
        let err = apply(&NumericIds, "drwxr-xr-x 2 alice 20 4096 Jan 12 2023 dir")
            .expect_err("owner is a name");
        assert!(matches!(
            err,
            ListingError::DialectMismatch {
                field: OwnershipField::Owner,
                ref token,
                ..
            } if token == "alice"
        ));
    }

    #[test]
    fn numeric_failure_leaves_attributes_untouched() {
        let classifier = LineClassifier::default();
        let line = "drwxr-xr-x 2 501 staff 4096 Jan 12 2023 dir";
        let LineKind::Record(record) = classifier.classify(line, ParseState::Normal) else {
            panic!("not a data line");
        };
        let mut attrs = FileAttributes::new();
        let err = NumericIds.apply(&record, &mut attrs).expect_err("group is a name");
        assert!(matches!(
            err,
            ListingError::DialectMismatch { field: OwnershipField::Group, .. }
        ));
        assert_eq!(attrs.owner_id(), None);
    }

    #[test]
    fn symbolic_sets_names_only() {
        let attrs = apply(&SymbolicNames, "drwxr-xr-x 2 alice staff 4096 Jan 12 2023 dir")
            .expect("symbolic line");
        assert_eq!(attrs.owner_name(), Some("alice"));
        assert_eq!(attrs.group_name(), Some("staff"));
        assert_eq!(attrs.owner_id(), None);
    }

    #[test]
    fn symbolic_keeps_numeric_looking_names() {
        let attrs = apply(&SymbolicNames, "-rw-r--r-- 1 1001 1001 0 Jan 12 2023 orphan")
            .expect("symbolic line");
        assert_eq!(attrs.owner_name(), Some("1001"));
        assert_eq!(attrs.owner_id(), None);
    }

    #[test]
    fn dialects() {
        assert_eq!(NumericIds.dialect(), Dialect::Numeric);
        assert_eq!(SymbolicNames.dialect(), Dialect::Symbolic);
    }
}
