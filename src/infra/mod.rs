//! Usage: Infrastructure adapters (paths, settings, Tauri window host, OS notifications).

pub(crate) mod app_paths;
pub(crate) mod native_notifier;
pub(crate) mod settings;
pub(crate) mod tauri_host;
