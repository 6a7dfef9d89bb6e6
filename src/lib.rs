pub mod commands;
pub mod http;
pub mod website;

pub use website::{API_ROOT, ApiResponse, ERROR_SENTINEL, Modo, WebsiteClient};

/// Test utilities for capturing diagnostics emitted by the client.
#[cfg(test)]
pub mod test_utils {
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Diagnostics recorded on the current thread while the guard is alive.
    #[derive(Clone, Default)]
    pub struct Diagnostics {
        events: Arc<Mutex<Vec<(Level, String)>>>,
    }

    impl Diagnostics {
        /// Installs a thread-local subscriber recording events from this crate.
        ///
        /// `#[tokio::test]` runs on a current-thread runtime, so async tests
        /// see every event their futures emit.
        pub fn capture() -> (Self, tracing::subscriber::DefaultGuard) {
            let diagnostics = Self::default();
            let subscriber = tracing_subscriber::registry().with(CaptureLayer(diagnostics.clone()));
            let guard = tracing::subscriber::set_default(subscriber);
            (diagnostics, guard)
        }

        /// Messages logged at error level.
        pub fn errors(&self) -> Vec<String> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|(level, _)| *level == Level::ERROR)
                .map(|(_, message)| message.clone())
                .collect()
        }
    }

    struct CaptureLayer(Diagnostics);

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if !event.metadata().target().starts_with("inmostore") {
                return;
            }
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0
                .events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{:?}", value);
            }
        }
    }
}
