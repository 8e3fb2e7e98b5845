//! Usage: Domain logic (relay vocabulary, notification surfaces); host-agnostic.

pub(crate) mod notify;
pub(crate) mod relay;
