//! Usage: Read-only application settings (`settings.json` in the app data dir).
//!
//! The file is optional and never written by the app; missing fields take defaults.

use crate::app_paths;
use crate::notify::native::DEFAULT_CALLER_NAME;
use crate::notify::variant::DEFAULT_SCREEN_MARGIN;
use crate::shared::fs::read_optional_file;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SCHEMA_VERSION: u32 = 1;
const MAX_SCREEN_MARGIN: u32 = 200;
const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub schema_version: u32,
    // Shown as the body of the native notification.
    pub caller_name: String,
    // Gap between notification surfaces and the top/right work area edges.
    pub screen_margin: u32,
    pub native_notification_icon: bool,
    // tracing EnvFilter directive; RUST_LOG still wins when set.
    pub log_filter: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            caller_name: DEFAULT_CALLER_NAME.to_string(),
            screen_margin: DEFAULT_SCREEN_MARGIN,
            native_notification_icon: true,
            log_filter: None,
        }
    }
}

fn sanitize(settings: &mut AppSettings) -> bool {
    let mut changed = false;

    if settings.screen_margin > MAX_SCREEN_MARGIN {
        settings.screen_margin = MAX_SCREEN_MARGIN;
        changed = true;
    }

    let caller_name = settings.caller_name.trim();
    if caller_name.is_empty() {
        settings.caller_name = DEFAULT_CALLER_NAME.to_string();
        changed = true;
    } else if caller_name.len() != settings.caller_name.len() {
        settings.caller_name = caller_name.to_string();
        changed = true;
    }

    if let Some(filter) = settings.log_filter.as_deref() {
        let trimmed = filter.trim();
        if trimmed.is_empty() {
            settings.log_filter = None;
            changed = true;
        } else if trimmed.len() != filter.len() {
            settings.log_filter = Some(trimmed.to_string());
            changed = true;
        }
    }

    changed
}

fn parse_settings_json(content: &[u8]) -> Result<AppSettings, String> {
    let mut settings: AppSettings = serde_json::from_slice(content)
        .map_err(|e| format!("SETTINGS_READ: failed to parse {SETTINGS_FILE_NAME}: {e}"))?;
    sanitize(&mut settings);
    Ok(settings)
}

pub(crate) fn read_from(path: &Path) -> Result<AppSettings, String> {
    let Some(content) = read_optional_file(path).map_err(|e| format!("SETTINGS_READ: {e}"))?
    else {
        return Ok(AppSettings::default());
    };
    parse_settings_json(&content)
}

fn settings_path<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Result<PathBuf, String> {
    Ok(app_paths::app_data_dir(app)?.join(SETTINGS_FILE_NAME))
}

pub fn read<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Result<AppSettings, String> {
    read_from(&settings_path(app)?)
}
