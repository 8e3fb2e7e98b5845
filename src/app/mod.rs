//! Usage: Application layer (Tauri-managed state, relay controller, window lifecycle, logging).

pub(crate) mod app_state;
pub(crate) mod controller;
pub(crate) mod logging;
pub(crate) mod resident;
