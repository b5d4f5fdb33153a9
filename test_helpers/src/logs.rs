//! Capture `tracing` events for assertions.
//!
//! The capturing subscriber is installed as the thread's default only while
//! the closure runs, so tests can run in parallel without seeing each
//! other's events.
//!
//! # Examples
//!
//! ```
//! use flag_walk_test_helpers::capture_events;
//!
//! let ((), events) = capture_events(|| tracing::debug!(node = "demo", "hello"));
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].message, "hello");
//! assert_eq!(events[0].field("node"), Some("demo"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

/// One event seen by [`capture_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Severity of the event.
    pub level: Level,
    /// Module path the event was emitted from.
    pub target: String,
    /// Rendered message.
    pub message: String,
    /// Remaining fields, rendered with their `Debug` or `Display` output.
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    /// Looks a field up by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: BTreeMap<String, String>,
}

impl FieldCollector {
    fn store(&mut self, field: &Field, rendered: String) {
        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.fields.insert(field.name().to_owned(), rendered);
        }
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        let metadata = event.metadata();
        self.events.lock().push(CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            message: collector.message,
            fields: collector.fields,
        });
    }
}

/// Runs `f` with a capturing subscriber and returns its result along with
/// every event emitted, at any level, in emission order.
pub fn capture_events<F, R>(f: F) -> (R, Vec<CapturedEvent>)
where
    F: FnOnce() -> R,
{
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(CaptureLayer {
        events: Arc::clone(&events),
    });
    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = std::mem::take(&mut *events.lock());
    (result, captured)
}
