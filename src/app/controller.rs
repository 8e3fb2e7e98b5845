//! Usage: Single consumer of relay messages; maps each event to a window manager or
//! native presenter operation.

use crate::notify::host::SurfaceHost;
use crate::notify::native::{NativeCallNotification, NativePresenter};
use crate::notify::{NotificationVariant, NotificationWindowManager};
use crate::relay::RelayEvent;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ControllerMessage {
    Relay(RelayEvent),
    /// Host-side signal: a notification window is gone.
    SurfaceDestroyed { label: String },
}

pub(crate) struct Controller<H: SurfaceHost, P: NativePresenter> {
    manager: NotificationWindowManager<H>,
    presenter: P,
    native: NativeCallNotification,
}

impl<H: SurfaceHost, P: NativePresenter> Controller<H, P> {
    pub(crate) fn new(
        manager: NotificationWindowManager<H>,
        presenter: P,
        native: NativeCallNotification,
    ) -> Self {
        Self {
            manager,
            presenter,
            native,
        }
    }

    pub(crate) fn dispatch(&mut self, message: ControllerMessage) {
        match message {
            ControllerMessage::Relay(event) => self.handle_event(event),
            ControllerMessage::SurfaceDestroyed { label } => {
                self.manager.forget(&label);
            }
        }
    }

    fn handle_event(&mut self, event: RelayEvent) {
        tracing::debug!(event = %event, "relay event received");
        match event {
            RelayEvent::AcceptCall => {
                tracing::info!("call accepted");
                self.close_all();
            }
            RelayEvent::DeclineCall => {
                tracing::info!("call declined");
                self.close_all();
            }
            show => match show.requested_variant() {
                Some(NotificationVariant::Native) => {
                    if let Err(err) = self.presenter.present(self.native.clone()) {
                        tracing::warn!("native notification failed: {}", err);
                    }
                }
                Some(NotificationVariant::Window(variant)) => self.manager.show(variant),
                None => {}
            },
        }
    }

    fn close_all(&mut self) {
        let closed = self.manager.close_all();
        tracing::debug!(
            closed,
            remaining = self.manager.live_count(),
            "notification surfaces closed"
        );
    }

    #[cfg(test)]
    pub(crate) fn manager(&self) -> &NotificationWindowManager<H> {
        &self.manager
    }

    /// Drains the relay until every sender is gone.
    pub(crate) async fn run(mut self, mut rx: mpsc::UnboundedReceiver<ControllerMessage>) -> Self {
        tracing::info!("controller started");
        while let Some(message) = rx.recv().await {
            self.dispatch(message);
        }
        tracing::info!("relay closed, controller stopped");
        self
    }
}
