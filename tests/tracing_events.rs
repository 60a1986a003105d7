#![cfg(feature = "tracing")]

use inplace_optional::Optional;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Collects the message of every event it sees.
struct Recorder(Arc<Mutex<Vec<String>>>);

struct Message(String);

impl Visit for Message {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = Message(String::new());
        event.record(&mut message);
        self.0.lock().unwrap().push(message.0);
    }
}

#[test]
fn test_lifecycle_transitions_emit_events() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default()
        .with(EnvFilter::new("inplace_optional=trace"))
        .with(Recorder(events.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let mut opt: Optional<i32> = Optional::new();
        assert!(opt.value().is_err());
        opt.assign(1);
        opt.assign(2);
        opt.reset();
        opt.emplace(3_i32);
    });

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            "checked access on empty",
            "constructed in place",
            "assigned in place",
            "reset",
            "emplacing",
            "constructed in place",
            "reset",
        ]
    );
}
