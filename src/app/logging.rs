//! Usage: Process-wide tracing setup (stdout + daily rolling file under the app data dir).

use crate::app_paths;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";
const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_PREFIX: &str = "call-notify-demo.log";

static INITIALIZED: AtomicBool = AtomicBool::new(false);
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Picks the first valid directive: `RUST_LOG`, then settings, then `info`.
fn resolve_filter(env: Option<&str>, configured: Option<&str>) -> EnvFilter {
    [env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

pub(crate) fn init<R: tauri::Runtime>(app: &tauri::AppHandle<R>, configured_filter: Option<&str>) {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(env_filter.as_deref(), configured_filter);

    let (file_layer, file_error) = match app_paths::app_data_dir(app) {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join(LOG_DIR_NAME), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), None)
        }
        Err(err) => (None, Some(err)),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("tracing init skipped: {err}");
        return;
    }
    if let Err(err) = tracing_log::LogTracer::init() {
        tracing::debug!("log bridge already installed: {}", err);
    }

    if let Some(err) = file_error {
        tracing::warn!("file logging disabled: {}", err);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_directive_wins_over_settings() {
        let filter = resolve_filter(Some("warn"), Some("debug"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn settings_directive_used_without_env() {
        let filter = resolve_filter(None, Some(" call_notify_demo_lib=debug "));
        assert_eq!(filter.to_string(), "call_notify_demo_lib=debug");
    }

    #[test]
    fn invalid_or_blank_directives_fall_back() {
        let filter = resolve_filter(Some("   "), Some("foo=notalevel"));
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, None).to_string(), DEFAULT_FILTER);
    }
}
