//! Usage: Shared Tauri state used by `commands/*` (the sending end of the action relay).

use crate::app::controller::ControllerMessage;
use crate::relay::{self, RelayEvent};
use tokio::sync::mpsc;

pub(crate) struct RelayState {
    tx: mpsc::UnboundedSender<ControllerMessage>,
}

impl RelayState {
    pub(crate) fn channel() -> (Self, mpsc::UnboundedReceiver<ControllerMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Checks the sender's capability set and queues `event` for the controller.
    ///
    /// Returns as soon as the event is queued; nothing is reported back.
    pub(crate) fn send_from(&self, label: &str, event: RelayEvent) -> Result<(), String> {
        relay::authorize(label, event).inspect_err(|err| {
            tracing::warn!(surface = %label, event = %event, "relay rejected: {}", err);
        })?;

        self.tx
            .send(ControllerMessage::Relay(event))
            .map_err(|_| format!("RELAY_CLOSED: event={event}"))?;

        tracing::debug!(surface = %label, event = %event, "relay event queued");
        Ok(())
    }

    /// Returns whether the controller was still there to receive it.
    pub(crate) fn surface_destroyed(&self, label: &str) -> bool {
        let queued = self
            .tx
            .send(ControllerMessage::SurfaceDestroyed {
                label: label.to_string(),
            })
            .is_ok();
        if !queued {
            tracing::debug!(surface = %label, "RELAY_CLOSED: surface destroyed after controller stopped");
        }
        queued
    }
}
