#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system shared by the listing parser
//! crates. Diagnostics are grouped under named info and debug flags, each
//! with its own level, in the same way `-v`, `--info=FLAG[N]` and
//! `--debug=FLAG[N]` work for the command-line tools this workspace feeds.
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds [`InfoLevels`] and [`DebugLevels`]. It is built
//!   from a `-v` count with [`VerbosityConfig::from_verbose_level`] or adjusted
//!   one flag at a time with tokens such as `date2`.
//! - The active configuration and the collected [`DiagnosticEvent`]s are
//!   thread-local. Call [`init`] on every thread that parses a listing and
//!   [`drain_events`] to retrieve what was recorded.
//! - [`debug_log!`] and [`info_log!`] format their message only when the flag's
//!   level is high enough.
//! - With the `tracing` feature, `init_tracing` installs a subscriber layer
//!   that routes `tracing` events through the same flags. It bridges events
//!   emitted through `tracing` by the caller; the `*_log!` macros keep
//!   writing to the buffer directly.
//!
//! # Examples
//!
//! ```
//! use logging::{debug_log, drain_events, init, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::default();
//! config.debug.prefix = 1;
//! init(config);
//!
//! debug_log!(Prefix, 1, "set path prefix to {}", "src/");
//! debug_log!(Date, 1, "suppressed");
//!
//! let events = drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].message(), "set path prefix to src/");
//! ```

mod config;
mod levels;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, apply_debug_flag, apply_info_flag, current_config, debug_gte, drain_events,
    emit_debug, emit_info, info_gte, init, replay_events,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{FlagLayer, init_tracing, init_tracing_with_filter};

/// Records a debug diagnostic when the named [`DebugFlag`] is at or above
/// `level` on the current thread.
///
/// ```
/// use logging::{debug_log, drain_events, init, VerbosityConfig};
///
/// init(VerbosityConfig::from_verbose_level(3));
/// debug_log!(Date, 2, "tried {} formats", 5);
/// assert_eq!(drain_events().len(), 1);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {
        if $crate::debug_gte($crate::DebugFlag::$flag, $level) {
            $crate::emit_debug($crate::DebugFlag::$flag, $level, ::std::format!($($arg)+));
        }
    };
}

/// Records an info diagnostic when the named [`InfoFlag`] is at or above
/// `level` on the current thread.
#[macro_export]
macro_rules! info_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {
        if $crate::info_gte($crate::InfoFlag::$flag, $level) {
            $crate::emit_info($crate::InfoFlag::$flag, $level, ::std::format!($($arg)+));
        }
    };
}
