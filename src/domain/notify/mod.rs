//! Usage: Incoming-call notification surfaces (variants, host seam, window manager, native presenter).

pub(crate) mod host;
pub(crate) mod manager;
pub(crate) mod native;
#[cfg(any(test, all(unix, not(any(target_os = "ios", target_os = "android")))))]
pub(crate) mod outcome;
pub(crate) mod variant;

pub(crate) use manager::NotificationWindowManager;
pub(crate) use variant::{NotificationVariant, WindowVariant};
