//! Usage: Run blocking host calls off the async runtime threads.

/// Fire-and-forget blocking work; the task name is attached to its logs.
pub(crate) fn spawn_detached<F>(name: &'static str, f: F)
where
    F: FnOnce() + Send + 'static,
{
    tauri::async_runtime::spawn_blocking(move || {
        let _span = tracing::debug_span!("blocking", task = name).entered();
        f();
    });
}
