#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `listing` recovers per-file ownership and permissions from the text of a
//! recursive long listing (`ls -lR` or `ls -nR`). Two passes over the same
//! tree, one printing names and one printing ids, are parsed independently
//! and then reconciled into a single [`AttributeMap`].
//!
//! # Design
//!
//! - [`LineClassifier`] sorts each line into a header, a separator, a
//!   directory declaration, or a data record. The path of a data record is
//!   located after the date columns, whose layout is detected against an
//!   ordered [`DateFormats`] table.
//! - [`ListingParser`] drives one pass. It tracks the directory prefix with an
//!   explicit [`ParseState`], records entries, and forwards every line to a
//!   [`LineSink`].
//! - An [`OwnershipStrategy`] decides how the owner and group columns are read:
//!   [`NumericIds`] for `ls -n`, [`SymbolicNames`] for `ls -l`.
//! - [`reconcile`] merges the two finished maps, keeping symbolic mode bits and
//!   names and taking ids from the numeric pass.
//!
//! # Errors
//!
//! Lines that cannot be split into columns are skipped and reported under the
//! `classify` debug flag. A numeric pass that meets a name in an id column
//! fails with [`ListingError::DialectMismatch`]; read failures surface as
//! [`ListingError::Io`].
//!
//! # Examples
//!
//! ```
//! use listing::{NumericIds, SymbolicNames, parse_listing, reconcile};
//!
//! let long = "total 8\ndrwxr-xr-x 2 alice staff 4096 Jan 12 2023 dir\n";
//! let numeric = "total 8\ndrwxr-xr-x 2 501 20 4096 Jan 12 2023 dir\n";
//!
//! let symbolic = parse_listing(SymbolicNames, long.as_bytes()).unwrap();
//! let ids = parse_listing(NumericIds, numeric.as_bytes()).unwrap();
//! let merged = reconcile(&symbolic, Some(&ids));
//!
//! let dir = merged.get("dir").unwrap();
//! assert_eq!(dir.owner_name(), Some("alice"));
//! assert_eq!(dir.owner_id(), Some(501));
//! assert_eq!(dir.octal_mode_string(), "755");
//! ```

mod builder;
mod classify;
mod date;
mod error;
mod map;
mod merge;
mod parser;
mod sink;
mod state;
mod strategy;

pub use crate::builder::ListingParserBuilder;
pub use crate::classify::{
    DataRecord, LineClassifier, LineKind, Unparseable, default_total_pattern,
};
pub use crate::date::{DATE_FIRST_TOKEN, DATE_LAST_CANDIDATE_TOKEN, DateFormat, DateFormats};
pub use crate::error::{ListingError, ListingResult, OwnershipField};
pub use crate::map::{AttributeMap, Iter};
pub use crate::merge::reconcile;
pub use crate::parser::{ListingParser, parse_listing};
pub use crate::sink::{DiscardLines, LineSink};
pub use crate::state::ParseState;
pub use crate::strategy::{Dialect, NumericIds, OwnershipStrategy, SymbolicNames};
