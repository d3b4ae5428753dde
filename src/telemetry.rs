//! Logging setup.
//!
//! [`Telemetry`] owns a `tracing` dispatcher built from an explicit filter and
//! writer. Nothing here installs a global subscriber; callers scope work to
//! the dispatcher instead (see `api::create_router`).

use tracing::Dispatch;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Clone, Debug)]
pub struct Telemetry {
    dispatch: Dispatch,
}

impl Telemetry {
    /// Formatted logs to stdout, filtered by `filter` (`EnvFilter` syntax).
    pub fn new(filter: &str) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .finish();
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Plain (no ANSI) formatted logs to a custom writer.
    pub fn with_writer<W>(filter: &str, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_ansi(false)
            .with_writer(writer)
            .finish();
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_with_writer_captures_events() {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let telemetry = Telemetry::with_writer("info", move || writer.clone());

        tracing::dispatcher::with_default(telemetry.dispatch(), || {
            tracing::info!("hello from the test");
            tracing::debug!("filtered out");
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("hello from the test"));
        assert!(!output.contains("filtered out"));
    }
}
