//! Reconciliation of the symbolic and numeric passes.

use logging::{debug_log, info_log};

use crate::map::AttributeMap;

/// Combines a symbolic pass with an optional numeric pass.
///
/// Paths present in both take the symbolic entry, with its owner and group
/// ids replaced by the numeric entry's. Mode bits always come from the
/// symbolic side. Paths present in only one pass are copied unchanged.
/// Symbolic paths come first in their original order, followed by paths only
/// the numeric pass saw.
///
/// Without a numeric pass the result is a copy of `symbolic`.
#[must_use]
pub fn reconcile(symbolic: &AttributeMap, numeric: Option<&AttributeMap>) -> AttributeMap {
    let Some(numeric) = numeric else {
        info_log!(Merge, 1, "no numeric listing; keeping {} symbolic entries", symbolic.len());
        return symbolic.clone();
    };

    let mut merged = AttributeMap::with_capacity(symbolic.len().max(numeric.len()));
    let mut matched = 0_usize;

    for (path, attrs) in symbolic {
        let mut entry = attrs.clone();
        if let Some(ids) = numeric.get(path) {
            entry.set_owner_id(ids.owner_id()).set_group_id(ids.group_id());
            matched += 1;
            debug_log!(
                Merge,
                2,
                "{}: ids {:?}/{:?} applied",
                path,
                ids.owner_id(),
                ids.group_id()
            );
        } else {
            debug_log!(Merge, 1, "{}: only in symbolic listing", path);
        }
        merged.insert(path, entry);
    }

    for (path, attrs) in numeric {
        if !symbolic.contains_key(path) {
            debug_log!(Merge, 1, "{}: only in numeric listing", path);
            merged.insert(path, attrs.clone());
        }
    }

    info_log!(
        Merge,
        1,
        "merged {} entries ({} matched, {} symbolic only, {} numeric only)",
        merged.len(),
        matched,
        symbolic.len() - matched,
        numeric.len() - matched
    );
    merged
}
