#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `attributes` models the ownership and permission columns of a single
//! `ls -l` entry. The values are recovered from listing text, typically
//! captured on another host, and stored in a [`FileAttributes`] record.
//!
//! # Design
//!
//! - [`FileAttributes`] keeps the mode column as a fixed ten character array
//!   (`drwxr-xr-x`) and exposes one boolean accessor per permission bit.
//!   Ownership is tracked separately as optional numeric ids and optional
//!   symbolic names because each listing dialect only reports one of them.
//! - [`Permission`] enumerates the nine permission bits, pairing each with its
//!   column in the mode string and its POSIX octal weight.
//! - [`octal`] exposes the weights together with predicates that test a raw
//!   octal value for a single bit.
//!
//! # Invariants
//!
//! - The stored mode is always exactly [`MODE_WIDTH`] characters. Shorter
//!   input is right-padded with `-`; longer input keeps its leading columns.
//! - Absent ids and names read back as `None`, never as `0` or `""`.
//! - Only the nine rwx bits are modelled. Setuid, setgid, and sticky bits in
//!   an octal value are dropped.
//!
//! # Errors
//!
//! [`FileAttributes::set_octal_mode_str`] returns [`OctalModeError`] when the
//! supplied text is not a base-8 number. Every other operation is infallible.
//!
//! # Examples
//!
//! ```
//! use attributes::FileAttributes;
//!
//! let mut attrs = FileAttributes::from_mode_line("-rw-r--r--");
//! assert_eq!(attrs.octal_mode(), 0o644);
//!
//! attrs.set_owner_executable(true).set_owner_name("alice");
//! assert_eq!(attrs.octal_mode_string(), "744");
//! assert_eq!(attrs.owner_name(), Some("alice"));
//! assert_eq!(attrs.owner_id(), None);
//! ```

mod error;
mod file_attributes;
pub mod octal;
mod permission;

pub use crate::error::OctalModeError;
pub use crate::file_attributes::{FileAttributes, MODE_WIDTH};
pub use crate::permission::Permission;
