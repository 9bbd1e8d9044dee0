//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Selects newline-delimited JSON log records instead of the compact format.
pub const ENV_LOG_FORMAT: &str = "QUICKSEARCH_LOG_FORMAT";

/// Initialize tracing. Safe to call multiple times.
///
/// `RUST_LOG` directives are honoured; the floor is INFO, or DEBUG when
/// running under the test harness so per-event transitions show up in
/// failing test output. Logs always go to stderr.
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );
        let json = std::env::var(ENV_LOG_FORMAT).is_ok_and(|format| format.eq_ignore_ascii_case("json"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE);

        let result = if is_test {
            builder.compact().with_test_writer().try_init()
        } else if json {
            builder.json().with_writer(std::io::stderr).try_init()
        } else {
            builder.compact().with_writer(std::io::stderr).try_init()
        };

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
