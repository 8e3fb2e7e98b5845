//! Usage: Relay commands invoked by webviews. Each maps to exactly one relay event.

use crate::app_state::RelayState;
use crate::relay::RelayEvent;

fn send(window: &tauri::WebviewWindow, relay: &RelayState, event: RelayEvent) -> Result<(), String> {
    relay.send_from(window.label(), event)
}

#[tauri::command]
pub(crate) fn show_native_notification(
    window: tauri::WebviewWindow,
    relay: tauri::State<'_, RelayState>,
) -> Result<(), String> {
    send(&window, &relay, RelayEvent::ShowNative)
}

#[tauri::command]
pub(crate) fn show_custom_notification(
    window: tauri::WebviewWindow,
    relay: tauri::State<'_, RelayState>,
) -> Result<(), String> {
    send(&window, &relay, RelayEvent::ShowCustom)
}

#[tauri::command]
pub(crate) fn show_dark_notification(
    window: tauri::WebviewWindow,
    relay: tauri::State<'_, RelayState>,
) -> Result<(), String> {
    send(&window, &relay, RelayEvent::ShowDark)
}

#[tauri::command]
pub(crate) fn show_compact_notification(
    window: tauri::WebviewWindow,
    relay: tauri::State<'_, RelayState>,
) -> Result<(), String> {
    send(&window, &relay, RelayEvent::ShowCompact)
}

#[tauri::command]
pub(crate) fn show_advanced_notification(
    window: tauri::WebviewWindow,
    relay: tauri::State<'_, RelayState>,
) -> Result<(), String> {
    send(&window, &relay, RelayEvent::ShowAdvanced)
}

#[tauri::command]
pub(crate) fn accept_call(
    window: tauri::WebviewWindow,
    relay: tauri::State<'_, RelayState>,
) -> Result<(), String> {
    send(&window, &relay, RelayEvent::AcceptCall)
}

#[tauri::command]
pub(crate) fn decline_call(
    window: tauri::WebviewWindow,
    relay: tauri::State<'_, RelayState>,
) -> Result<(), String> {
    send(&window, &relay, RelayEvent::DeclineCall)
}
