//! Tracing subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::TalkError;

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used
/// (e.g. `"info"` or `"talkline_session=debug,info"`). Command traffic is
/// logged at `debug`/`trace` under the `talkline_session` and
/// `talkline_transport` targets.
///
/// # Errors
/// [`TalkError::Logging`] if a global subscriber is already installed.
pub fn init_logging(default_directive: &str) -> Result<(), TalkError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_reports_error() {
        // The first call may lose to another test's subscriber; the second
        // call in this process can never succeed.
        let _ = init_logging("debug");
        let second = init_logging("debug");
        assert!(matches!(second, Err(TalkError::Logging(_))));
    }
}
