//! Usage: Tauri command surface exposed to webviews.

mod relay;

pub(crate) use relay::*;
