#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `ls-attrs` recovers POSIX owner, group and permission bits for every entry
//! of a directory tree from two captured listings of that tree: `ls -lR`,
//! which prints names, and `ls -nR`, which prints ids. The result is one
//! [`AttributeMap`] from relative path to [`FileAttributes`].
//!
//! The member crates can be used directly:
//!
//! - [`attributes`] holds the per-entry record and octal conversions.
//! - [`listing`] parses one listing and reconciles two parsed maps.
//! - [`logging`] controls which diagnostics are collected.
//!
//! # Examples
//!
//! ```
//! let symbolic = "total 4\n-rw-r----- 1 alice staff 10 Jan 12 2023 notes\n";
//! let numeric = "total 4\n-rw-r----- 1 501 20 10 Jan 12 2023 notes\n";
//!
//! let map = ls_attrs::collect_attributes(numeric.as_bytes(), symbolic.as_bytes()).unwrap();
//! let notes = map.get("notes").unwrap();
//! assert_eq!(notes.owner_name(), Some("alice"));
//! assert_eq!(notes.group_id(), Some(20));
//! assert_eq!(notes.octal_mode(), 0o640);
//! ```

use std::io::BufRead;

pub use attributes;
pub use listing;
pub use logging;

pub use attributes::{FileAttributes, OctalModeError, Permission};
pub use listing::{
    AttributeMap, ListingError, ListingParser, ListingParserBuilder, ListingResult, NumericIds,
    SymbolicNames, parse_listing, reconcile,
};

use logging::info_log;

/// Parses both listings and reconciles them.
///
/// With the `parallel` feature the two passes run on the rayon pool, and the
/// diagnostics they record are moved back to the calling thread.
///
/// A numeric pass that fails, most often because the listing printed names
/// instead of ids, is reported under the `merge` info flag and the result
/// carries no ids.
///
/// # Errors
///
/// Returns the symbolic pass's error when that pass fails.
pub fn collect_attributes<N, S>(numeric: N, symbolic: S) -> ListingResult<AttributeMap>
where
    N: BufRead + Send,
    S: BufRead + Send,
{
    let (numeric, symbolic) = run_passes(numeric, symbolic);
    let symbolic = symbolic?;

    let numeric = match numeric {
        Ok(map) => Some(map),
        Err(err) => {
            let kind = if err.is_dialect_mismatch() {
                "prints names"
            } else {
                "unreadable"
            };
            info_log!(Merge, 1, "numeric listing {}, ids left unset: {}", kind, err);
            None
        }
    };

    Ok(reconcile(&symbolic, numeric.as_ref()))
}

#[cfg(feature = "parallel")]
fn run_passes<N, S>(
    numeric: N,
    symbolic: S,
) -> (ListingResult<AttributeMap>, ListingResult<AttributeMap>)
where
    N: BufRead + Send,
    S: BufRead + Send,
{
    let config = logging::current_config();
    let ((numeric, numeric_events), (symbolic, symbolic_events)) = rayon::join(
        || on_worker(&config, || parse_listing(NumericIds, numeric)),
        || on_worker(&config, || parse_listing(SymbolicNames, symbolic)),
    );
    logging::replay_events(numeric_events);
    logging::replay_events(symbolic_events);
    (numeric, symbolic)
}

#[cfg(feature = "parallel")]
fn on_worker<T>(
    config: &logging::VerbosityConfig,
    pass: impl FnOnce() -> T,
) -> (T, Vec<logging::DiagnosticEvent>) {
    let previous = logging::current_config();
    let pending = logging::drain_events();
    logging::init(config.clone());

    let output = pass();
    let events = logging::drain_events();

    logging::init(previous);
    logging::replay_events(pending);
    (output, events)
}

#[cfg(not(feature = "parallel"))]
fn run_passes<N, S>(
    numeric: N,
    symbolic: S,
) -> (ListingResult<AttributeMap>, ListingResult<AttributeMap>)
where
    N: BufRead,
    S: BufRead,
{
    (
        parse_listing(NumericIds, numeric),
        parse_listing(SymbolicNames, symbolic),
    )
}
