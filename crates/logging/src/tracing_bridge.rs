//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity flag system.
//!
//! [`FlagLayer`] is a tracing-subscriber layer that maps events onto the same
//! thread-local buffer that [`debug_log!`](crate::debug_log) and
//! [`info_log!`](crate::info_log) write to. The last `::` segment of an
//! event's target selects the flag, so `tracing::debug!(target:
//! "ls_attrs::date", ...)` is filtered by the `date` debug level.
//!
//! The bridge only carries events that something emits through `tracing`:
//! the caller's own code or another crate it links. The listing crates never
//! call `tracing`; they record through [`debug_log!`](crate::debug_log) and
//! [`info_log!`](crate::info_log) straight into the buffer, so their
//! diagnostics land there with or without a subscriber and are never
//! recorded twice.
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(3));
//! tracing::debug!(target: "ls_attrs::prefix", "prefix set to {}", "src/");
//! ```

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::thread_local::{debug_gte, emit_debug, emit_info, info_gte};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that forwards events into the verbosity flag system.
pub struct FlagLayer {
    _config: VerbosityConfig,
}

impl FlagLayer {
    /// Create a new layer for the given verbosity configuration.
    #[must_use]
    pub const fn new(config: VerbosityConfig) -> Self {
        Self { _config: config }
    }

    fn target_segment(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        let segment = Self::target_segment(target);
        InfoFlag::ALL.into_iter().find(|flag| flag.name() == segment)
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        let segment = Self::target_segment(target);
        DebugFlag::ALL.into_iter().find(|flag| flag.name() == segment)
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }

    const fn is_info_severity(level: &Level) -> bool {
        matches!(*level, Level::ERROR | Level::WARN | Level::INFO)
    }
}

impl<S> Layer<S> for FlagLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let level = metadata.level();
        let verbosity_level = Self::level_to_verbosity_level(level);

        // `merge` exists as both kinds; severity decides which one applies.
        if Self::is_info_severity(level) {
            if let Some(info_flag) = Self::target_to_info_flag(target) {
                if info_gte(info_flag, verbosity_level) {
                    if let Some(message) = MessageVisitor::extract(event) {
                        emit_info(info_flag, verbosity_level, message);
                    }
                }
                return;
            }
        }

        if let Some(debug_flag) = Self::target_to_debug_flag(target) {
            if debug_gte(debug_flag, verbosity_level) {
                if let Some(message) = MessageVisitor::extract(event) {
                    emit_debug(debug_flag, verbosity_level, message);
                }
            }
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl MessageVisitor {
    fn extract(event: &tracing::Event<'_>) -> Option<String> {
        let mut visitor = Self::default();
        event.record(&mut visitor);
        visitor.message
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Install a global subscriber that routes tracing events through the flag
/// system, and initialize the calling thread's configuration.
///
/// Only events emitted with the `tracing` macros pass through the
/// subscriber. Listing and merge diagnostics are already buffered by
/// [`debug_log!`](crate::debug_log) and [`info_log!`](crate::info_log) and
/// are read back with [`drain_events`](crate::drain_events) as usual.
pub fn init_tracing(config: VerbosityConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config.clone());

    tracing_subscriber::registry()
        .with(FlagLayer::new(config))
        .init();
}

/// Like [`init_tracing`], with an additional filter layer such as
/// `tracing_subscriber::EnvFilter`.
///
/// The filter applies to `tracing` events only. It does not see the
/// diagnostics recorded through [`debug_log!`](crate::debug_log) and
/// [`info_log!`](crate::info_log), which the verbosity flags alone gate.
pub fn init_tracing_with_filter<F>(config: VerbosityConfig, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config.clone());

    tracing_subscriber::registry()
        .with(filter)
        .with(FlagLayer::new(config))
        .init();
}
