//! crates/logging/src/thread_local.rs
//! Per-thread verbosity configuration and diagnostic event buffer.
//!
//! Each listing pass runs on one thread, so keeping the configuration and the
//! collected events thread-local gives every pass its own diagnostics without
//! locking. Passes started on worker threads must call [`init`] there.

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use std::cell::RefCell;
use std::fmt;

thread_local! {
    static VERBOSITY: RefCell<VerbosityConfig> = RefCell::new(VerbosityConfig::default());
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<DiagnosticEvent>> = RefCell::new(Vec::new());
}

/// Diagnostic event collected during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Info-level diagnostic event.
    Info {
        /// The info flag category.
        flag: InfoFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
    /// Debug-level diagnostic event.
    Debug {
        /// The debug flag category.
        flag: DebugFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
}

impl DiagnosticEvent {
    /// Returns the rendered message.
    pub fn message(&self) -> &str {
        match self {
            Self::Info { message, .. } | Self::Debug { message, .. } => message,
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info {
                flag,
                level,
                message,
            } => write!(f, "[info:{}{}] {}", flag.name(), level, message),
            Self::Debug {
                flag,
                level,
                message,
            } => write!(f, "[debug:{}{}] {}", flag.name(), level, message),
        }
    }
}

/// Initialize verbosity configuration for the current thread.
pub fn init(config: VerbosityConfig) {
    VERBOSITY.with(|v| {
        *v.borrow_mut() = config;
    });
}

/// Returns a copy of the current thread's configuration.
pub fn current_config() -> VerbosityConfig {
    VERBOSITY.with(|v| v.borrow().clone())
}

/// Check if the info flag is at or above the specified level.
pub fn info_gte(flag: InfoFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().info.get(flag) >= level)
}

/// Check if the debug flag is at or above the specified level.
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().debug.get(flag) >= level)
}

/// Emit an info diagnostic event.
pub fn emit_info(flag: InfoFlag, level: u8, message: String) {
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Info {
            flag,
            level,
            message,
        });
    });
}

/// Emit a debug diagnostic event.
pub fn emit_debug(flag: DebugFlag, level: u8, message: String) {
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Debug {
            flag,
            level,
            message,
        });
    });
}

/// Drain all collected events, clearing the internal buffer.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}

/// Append events recorded elsewhere, typically on a worker thread, to the
/// current thread's buffer.
pub fn replay_events(events: impl IntoIterator<Item = DiagnosticEvent>) {
    EVENTS.with(|e| e.borrow_mut().extend(events));
}

/// Apply an info flag token to the current configuration.
pub fn apply_info_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_info_flag(token))
}

/// Apply a debug flag token to the current configuration.
pub fn apply_debug_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_debug_flag(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_and_check() {
        let mut config = VerbosityConfig::default();
        config.info.listing = 2;
        config.debug.date = 3;

        init(config);

        assert!(info_gte(InfoFlag::Listing, 1));
        assert!(info_gte(InfoFlag::Listing, 2));
        assert!(!info_gte(InfoFlag::Listing, 3));

        assert!(debug_gte(DebugFlag::Date, 1));
        assert!(debug_gte(DebugFlag::Date, 3));
        assert!(!debug_gte(DebugFlag::Date, 4));
    }

    #[test]
    fn emit_and_drain_preserves_order() {
        init(VerbosityConfig::default());
        drain_events();

        emit_info(InfoFlag::Listing, 1, "first".to_string());
        emit_debug(DebugFlag::Prefix, 2, "second".to_string());

        let events = drain_events();
        assert_eq!(
            events,
            vec![
                DiagnosticEvent::Info {
                    flag: InfoFlag::Listing,
                    level: 1,
                    message: "first".to_string(),
                },
                DiagnosticEvent::Debug {
                    flag: DebugFlag::Prefix,
                    level: 2,
                    message: "second".to_string(),
                },
            ]
        );
        assert!(drain_events().is_empty());
    }

    #[test]
    fn display_includes_flag_and_level() {
        let event = DiagnosticEvent::Debug {
            flag: DebugFlag::Date,
            level: 2,
            message: "no format matched".to_string(),
        };
        assert_eq!(event.to_string(), "[debug:date2] no format matched");
        assert_eq!(event.message(), "no format matched");
    }

    #[test]
    fn apply_tokens_update_current_thread() {
        init(VerbosityConfig::default());
        apply_debug_flag("classify2").unwrap();
        apply_info_flag("merge").unwrap();
        assert!(debug_gte(DebugFlag::Classify, 2));
        assert!(info_gte(InfoFlag::Merge, 1));
        assert!(apply_debug_flag("not_a_flag").is_err());
        assert_eq!(current_config().debug.classify, 2);
    }

    #[test]
    fn replayed_events_follow_local_ones() {
        init(VerbosityConfig::default());
        drain_events();
        emit_info(InfoFlag::Merge, 1, "local".to_string());

        let worker = std::thread::spawn(|| {
            emit_debug(DebugFlag::Date, 1, "remote".to_string());
            drain_events()
        })
        .join()
        .unwrap();
        replay_events(worker);

        let messages: Vec<String> = drain_events()
            .iter()
            .map(|event| event.message().to_owned())
            .collect();
        assert_eq!(messages, ["local", "remote"]);
    }

    #[test]
    fn configuration_is_per_thread() {
        let mut config = VerbosityConfig::default();
        config.debug.set_all(4);
        init(config);

        let other = std::thread::spawn(|| debug_gte(DebugFlag::Merge, 1))
            .join()
            .unwrap();
        assert!(!other);
        assert!(debug_gte(DebugFlag::Merge, 4));
    }
}
