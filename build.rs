const COMMANDS: &[&str] = &[
    "show_native_notification",
    "show_custom_notification",
    "show_dark_notification",
    "show_compact_notification",
    "show_advanced_notification",
    "accept_call",
    "decline_call",
];

fn main() {
    tauri_build::try_build(
        tauri_build::Attributes::new()
            .app_manifest(tauri_build::AppManifest::new().commands(COMMANDS)),
    )
    .expect("failed to run tauri-build");
}
