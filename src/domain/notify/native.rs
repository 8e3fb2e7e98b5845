//! Usage: Native OS call notification content and the presenter seam.

use std::path::PathBuf;

pub(crate) const NATIVE_TITLE: &str = "Incoming Call";
pub(crate) const DEFAULT_CALLER_NAME: &str = "John Doe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NativeCallNotification {
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) icon: Option<PathBuf>,
}

impl NativeCallNotification {
    pub(crate) fn incoming(caller_name: &str, icon: Option<PathBuf>) -> Self {
        let caller = caller_name.trim();
        Self {
            title: NATIVE_TITLE.to_string(),
            body: if caller.is_empty() {
                DEFAULT_CALLER_NAME.to_string()
            } else {
                caller.to_string()
            },
            icon,
        }
    }
}

pub(crate) trait NativePresenter {
    /// Hands the notification to the OS. Where the platform reports the user's
    /// choice, the outcome is logged later through `outcome::report_outcome`.
    fn present(&self, notification: NativeCallNotification) -> Result<(), String>;
}
