mod app;
mod commands;
mod domain;
mod infra;
mod shared;

pub(crate) use app::{app_state, controller, logging, resident};
pub(crate) use domain::{notify, relay};
pub(crate) use infra::{app_paths, native_notifier, settings, tauri_host};

use app_state::RelayState;
use commands::*;
use controller::Controller;
use notify::native::NativeCallNotification;
use notify::NotificationWindowManager;
use tauri::path::BaseDirectory;
use tauri::Manager;

const NATIVE_ICON_RESOURCE: &str = "icons/icon.png";

fn resolve_native_icon(app: &tauri::AppHandle) -> Option<std::path::PathBuf> {
    app.path()
        .resolve(NATIVE_ICON_RESOURCE, BaseDirectory::Resource)
        .ok()
        .filter(|path| path.exists())
}

pub fn run() {
    let (relay, relay_rx) = RelayState::channel();

    let builder = tauri::Builder::default().manage(relay);

    #[cfg(desktop)]
    let builder = builder
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            resident::show_main_window(app);
        }));

    let app = builder
        .on_window_event(resident::on_window_event)
        .setup(move |app| {
            let settings_result = settings::read(app.handle());
            let settings = settings_result.clone().unwrap_or_default();
            logging::init(app.handle(), settings.log_filter.as_deref());
            if let Err(err) = settings_result {
                tracing::warn!("settings read failed, using defaults: {}", err);
            }

            let icon = if settings.native_notification_icon {
                resolve_native_icon(app.handle())
            } else {
                None
            };

            let controller = Controller::new(
                NotificationWindowManager::new(
                    tauri_host::TauriSurfaceHost::new(app.handle().clone()),
                    settings.screen_margin,
                ),
                native_notifier::DesktopNativePresenter::new(app.handle().clone()),
                NativeCallNotification::incoming(&settings.caller_name, icon),
            );
            tauri::async_runtime::spawn(async move {
                controller.run(relay_rx).await;
            });

            resident::create_main_window(app.handle())?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            show_native_notification,
            show_custom_notification,
            show_dark_notification,
            show_compact_notification,
            show_advanced_notification,
            accept_call,
            decline_call
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        #[cfg(target_os = "macos")]
        match event {
            // Last window closed: stay resident in the dock.
            tauri::RunEvent::ExitRequested { api, code: None, .. } => {
                api.prevent_exit();
            }
            // Notification surfaces count as visible windows, so the flag is not consulted.
            tauri::RunEvent::Reopen { .. } => {
                resident::show_main_window(app_handle);
            }
            _ => {}
        }

        #[cfg(not(target_os = "macos"))]
        let _ = (app_handle, event);
    });
}
