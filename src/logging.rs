//! Process-wide logging bootstrap.
//!
//! Library code only talks to the `log` facade; the binary calls
//! [`init_logging`] once at startup to route records to stderr.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

/// Environment variable that overrides the configured level.
pub const LOG_ENV_VAR: &str = "WEEK_LANES_LOG";

const SUPPORTED_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Normalize a level string to one of the supported names.
pub fn normalize_level(level: &str) -> Result<&'static str, String> {
    let wanted = level.trim().to_ascii_lowercase();
    SUPPORTED_LEVELS
        .iter()
        .copied()
        .find(|l| *l == wanted)
        .ok_or_else(|| format!("unsupported log level `{}`", level.trim()))
}

/// Pick the level from the environment override, falling back to `configured`.
pub fn effective_level(configured: &str) -> String {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Start the stderr logger. Repeated calls with the same level are a no-op;
/// a different level is rejected. Never panics.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level != level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                state.level, level
            ));
        }
        return Ok(());
    }

    LOGGING_STATE
        .get_or_try_init(|| -> Result<LoggingState, String> {
            let logger = Logger::try_with_str(level)
                .map_err(|e| format!("invalid logger spec: {e}"))?
                .log_to_stderr()
                .start()
                .map_err(|e| format!("failed to start logger: {e}"))?;
            Ok(LoggingState {
                level,
                _logger: logger,
            })
        })
        .map(|_| ())
}
