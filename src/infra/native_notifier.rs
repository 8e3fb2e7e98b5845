//! Usage: `NativePresenter` backed by the OS notification center.
//!
//! - freedesktop (Linux/BSD): notify-rust with Accept/Decline actions; the
//!   action id is awaited on a blocking worker and reported via `report_outcome`.
//! - macOS: mac-notification-sys with an Accept main button and a Decline close
//!   button; the response is awaited on a blocking worker the same way.
//! - Windows: tauri-plugin-notification (show only, no outcome callbacks).

use crate::notify::native::{NativeCallNotification, NativePresenter};
use tauri::{AppHandle, Runtime};

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
const APP_NAME: &str = "Call Notify Demo";

#[cfg(target_os = "macos")]
const MACOS_BUNDLE_ID: &str = "dev.callnotify.demo";

pub(crate) struct DesktopNativePresenter<R: Runtime> {
    #[cfg_attr(unix, allow(dead_code))]
    app: AppHandle<R>,
}

impl<R: Runtime> DesktopNativePresenter<R> {
    pub(crate) fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
impl<R: Runtime> NativePresenter for DesktopNativePresenter<R> {
    fn present(&self, notification: NativeCallNotification) -> Result<(), String> {
        use crate::notify::outcome::{report_outcome, NativeOutcome, NATIVE_ACTIONS};

        let mut builder = notify_rust::Notification::new();
        builder
            .appname(APP_NAME)
            .summary(&notification.title)
            .body(&notification.body)
            .timeout(notify_rust::Timeout::Never);
        for (id, text) in NATIVE_ACTIONS {
            builder.action(id, text);
        }
        if let Some(icon) = notification.icon.as_deref() {
            builder.icon(&icon.to_string_lossy());
        }

        crate::shared::blocking::spawn_detached("native_notification_wait", move || {
            let handle = match builder.show() {
                Ok(handle) => handle,
                Err(err) => {
                    tracing::warn!("NATIVE_NOTIFY: failed to show notification: {}", err);
                    return;
                }
            };
            handle.wait_for_action(|action| match NativeOutcome::from_action_id(action) {
                Some(outcome) => {
                    report_outcome(outcome);
                }
                None => tracing::debug!(action = %action, "native notification: unknown action"),
            });
        });

        Ok(())
    }
}

#[cfg(target_os = "macos")]
impl<R: Runtime> NativePresenter for DesktopNativePresenter<R> {
    fn present(&self, notification: NativeCallNotification) -> Result<(), String> {
        use crate::notify::outcome::{report_outcome, NativeOutcome, NATIVE_ACTIONS};
        use mac_notification_sys::{MainButton, NotificationResponse};

        static APP_IDENTITY: std::sync::Once = std::sync::Once::new();
        APP_IDENTITY.call_once(|| {
            if let Err(err) = mac_notification_sys::set_application(MACOS_BUNDLE_ID) {
                tracing::warn!("NATIVE_NOTIFY: failed to set application identity: {}", err);
            }
        });

        let [(_, accept_text), (_, decline_text)] = NATIVE_ACTIONS;

        crate::shared::blocking::spawn_detached("native_notification_wait", move || {
            let icon = notification
                .icon
                .as_deref()
                .map(|path| path.to_string_lossy().into_owned());

            let mut builder = mac_notification_sys::Notification::new();
            builder
                .title(&notification.title)
                .message(&notification.body)
                .main_button(MainButton::SingleAction(accept_text))
                .close_button(decline_text)
                .wait_for_click(true);
            if let Some(icon) = icon.as_deref() {
                builder.app_icon(icon);
            }

            let response = match builder.send() {
                Ok(response) => response,
                Err(err) => {
                    tracing::warn!("NATIVE_NOTIFY: failed to show notification: {}", err);
                    return;
                }
            };
            let outcome = match response {
                NotificationResponse::ActionButton(text) | NotificationResponse::CloseButton(text) => {
                    NativeOutcome::from_button_text(&text)
                }
                NotificationResponse::Click => Some(NativeOutcome::Clicked),
                NotificationResponse::None => Some(NativeOutcome::Closed),
                NotificationResponse::Reply(_) => None,
            };
            match outcome {
                Some(outcome) => {
                    report_outcome(outcome);
                }
                None => tracing::debug!("native notification: unmapped response"),
            }
        });

        Ok(())
    }
}

#[cfg(not(unix))]
impl<R: Runtime> NativePresenter for DesktopNativePresenter<R> {
    fn present(&self, notification: NativeCallNotification) -> Result<(), String> {
        use tauri_plugin_notification::NotificationExt;

        let mut builder = self
            .app
            .notification()
            .builder()
            .title(notification.title)
            .body(notification.body);
        if let Some(icon) = notification.icon {
            builder = builder.icon(icon.to_string_lossy().into_owned());
        }
        builder
            .show()
            .map_err(|e| format!("NATIVE_NOTIFY: {e}"))?;

        tracing::debug!("native notification shown; action outcomes are not reported on this platform");
        Ok(())
    }
}
