//! Usage: Cross-cutting utilities shared across domains (low-level helpers, pure logic).

#[cfg(all(unix, not(any(target_os = "ios", target_os = "android"))))]
pub(crate) mod blocking;
pub(crate) mod fs;
pub(crate) mod mutex_ext;
