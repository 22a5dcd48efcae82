use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// Rule engine decisions are logged at debug under `service::garage`.
pub fn init_logging_json() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,service::garage=debug"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the output format from `LOG_FORMAT` (`json` or anything else for compact).
pub fn init_logging_from_env() {
    if wants_json(std::env::var("LOG_FORMAT").ok().as_deref()) {
        init_logging_json();
    } else {
        init_logging_default();
    }
}

fn wants_json(format: Option<&str>) -> bool {
    matches!(format.map(str::trim), Some(f) if f.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::wants_json;

    #[test]
    fn log_format_selection() {
        assert!(wants_json(Some("json")));
        assert!(wants_json(Some(" JSON ")));
        assert!(!wants_json(Some("compact")));
        assert!(!wants_json(None));
    }

    #[test]
    fn repeated_init_is_harmless() {
        super::init_logging_default();
        super::init_logging_json();
    }
}
