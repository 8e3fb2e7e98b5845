//! Usage: Primary window lifecycle (create/recreate, focus) and window event hooks.

use super::app_state::RelayState;
use crate::relay::{SurfaceRole, MAIN_WINDOW_LABEL};
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

const MAIN_WINDOW_TITLE: &str = "Incoming Call Demo";
const MAIN_WINDOW_PAGE: &str = "index.html";
const MAIN_WINDOW_WIDTH: f64 = 520.0;
const MAIN_WINDOW_HEIGHT: f64 = 500.0;

pub fn create_main_window(app: &tauri::AppHandle) -> Result<(), String> {
    WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, WebviewUrl::App(MAIN_WINDOW_PAGE.into()))
        .title(MAIN_WINDOW_TITLE)
        .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
        .center()
        .build()
        .map_err(|e| format!("failed to create main window: {e}"))?;
    tracing::info!("main window created");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reactivation {
    Recreate,
    Focus,
}

/// Only the main window counts; open notification surfaces do not.
pub(crate) fn reactivation<'a>(open_labels: impl IntoIterator<Item = &'a str>) -> Reactivation {
    let main_open = open_labels
        .into_iter()
        .any(|label| SurfaceRole::from_label(label) == Some(SurfaceRole::Main));
    if main_open {
        Reactivation::Focus
    } else {
        Reactivation::Recreate
    }
}

/// Focuses the main window, recreating it when the process outlived it.
pub fn show_main_window(app: &tauri::AppHandle) {
    let action = reactivation(app.webview_windows().keys().map(String::as_str));
    let window = match action {
        Reactivation::Focus => app.get_webview_window(MAIN_WINDOW_LABEL),
        Reactivation::Recreate => None,
    };
    let Some(window) = window else {
        if let Err(err) = create_main_window(app) {
            tracing::error!("{}", err);
        }
        return;
    };

    let _ = window.show();
    let _ = window.unminimize();
    let _ = window.set_focus();
}

pub fn on_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    let tauri::WindowEvent::Destroyed = event else {
        return;
    };

    match SurfaceRole::from_label(window.label()) {
        Some(SurfaceRole::Notification) => {
            window
                .state::<RelayState>()
                .surface_destroyed(window.label());
        }
        Some(SurfaceRole::Main) => {
            // macOS keeps running without windows; elsewhere the main window is the app.
            if cfg!(target_os = "macos") {
                tracing::info!("main window closed, staying resident");
            } else {
                tracing::info!("main window closed, exiting");
                window.app_handle().exit(0);
            }
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactivation_recreates_main_window_despite_open_notifications() {
        assert_eq!(reactivation(["notification-dark-3"]), Reactivation::Recreate);
        assert_eq!(
            reactivation(["notification-custom-1", "notification-advanced-2"]),
            Reactivation::Recreate
        );
        assert_eq!(reactivation(std::iter::empty()), Reactivation::Recreate);
    }

    #[test]
    fn reactivation_focuses_existing_main_window() {
        assert_eq!(reactivation(["main"]), Reactivation::Focus);
        assert_eq!(
            reactivation(["notification-dark-3", "main"]),
            Reactivation::Focus
        );
    }
}
