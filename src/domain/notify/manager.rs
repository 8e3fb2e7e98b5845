//! Usage: Owns at most one live notification surface per window variant.

use super::host::{PendingSurface, ReadyHook, Surface, SurfaceHost, SurfaceRequest};
use super::variant::{fallback_position, top_right_position, WindowVariant};
use crate::relay::NOTIFICATION_LABEL_PREFIX;
use std::collections::HashMap;

pub(crate) struct NotificationWindowManager<H: SurfaceHost> {
    host: H,
    margin: u32,
    slots: HashMap<WindowVariant, H::Surface>,
    generation: u64,
}

impl<H: SurfaceHost> NotificationWindowManager<H> {
    pub(crate) fn new(host: H, margin: u32) -> Self {
        Self {
            host,
            margin,
            slots: HashMap::new(),
            generation: 0,
        }
    }

    /// Replaces any live surface for `variant` with a fresh one.
    ///
    /// The new surface stays hidden until the host reports its content ready;
    /// creation failures are logged and leave the slot empty.
    pub(crate) fn show(&mut self, variant: WindowVariant) {
        if self.close(variant) {
            tracing::debug!(variant = %variant, "closed previous notification surface");
        }

        let template = variant.template();
        let position = match self.host.primary_work_area() {
            Some(work_area) => top_right_position(work_area, &template, self.margin),
            None => {
                tracing::warn!(variant = %variant, "primary display unavailable, using fallback position");
                fallback_position(self.margin)
            }
        };

        self.generation += 1;
        let label = format!(
            "{NOTIFICATION_LABEL_PREFIX}{}-{}",
            variant.key(),
            self.generation
        );

        let pending = match self.host.create(SurfaceRequest {
            label: label.clone(),
            template,
            position,
        }) {
            Ok(pending) => pending,
            Err(err) => {
                tracing::warn!(variant = %variant, label = %label, "notification surface create failed: {}", err);
                return;
            }
        };

        let hook: ReadyHook<H::Surface> = Box::new(move |surface: &H::Surface| {
            match surface.reveal() {
                Ok(()) => tracing::debug!(label = %surface.label(), "notification surface revealed"),
                Err(err) => {
                    tracing::warn!(label = %surface.label(), "notification surface reveal failed: {}", err)
                }
            }
        });

        match pending.on_ready(hook) {
            Ok(surface) => {
                tracing::info!(
                    variant = %variant,
                    label = %label,
                    x = position.x,
                    y = position.y,
                    "notification surface created"
                );
                self.slots.insert(variant, surface);
            }
            Err(err) => {
                tracing::warn!(variant = %variant, label = %label, "notification surface load failed: {}", err);
            }
        }
    }

    /// Closes every live surface. Safe to call with nothing open.
    pub(crate) fn close_all(&mut self) -> usize {
        WindowVariant::ALL
            .into_iter()
            .filter(|variant| self.close(*variant))
            .count()
    }

    /// Drops the slot whose surface the host already destroyed.
    ///
    /// Labels of superseded surfaces no longer match any slot and are ignored.
    pub(crate) fn forget(&mut self, label: &str) -> Option<WindowVariant> {
        let variant = self
            .slots
            .iter()
            .find(|(_, surface)| surface.label() == label)
            .map(|(variant, _)| *variant)?;
        self.slots.remove(&variant);
        tracing::debug!(variant = %variant, label = %label, "notification surface destroyed");
        Some(variant)
    }

    pub(crate) fn live_count(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub(crate) fn live_label(&self, variant: WindowVariant) -> Option<&str> {
        self.slots.get(&variant).map(|surface| surface.label())
    }

    fn close(&mut self, variant: WindowVariant) -> bool {
        let Some(surface) = self.slots.remove(&variant) else {
            return false;
        };
        if let Err(err) = surface.close() {
            tracing::warn!(variant = %variant, label = %surface.label(), "notification surface close failed: {}", err);
        }
        true
    }
}
