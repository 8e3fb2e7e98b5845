//! Usage: Relay vocabulary (fixed event names) and per-surface capability sets.

use crate::notify::{NotificationVariant, WindowVariant};

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const NOTIFICATION_LABEL_PREFIX: &str = "notification-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RelayEvent {
    ShowNative,
    ShowCustom,
    ShowDark,
    ShowCompact,
    ShowAdvanced,
    AcceptCall,
    DeclineCall,
}

impl RelayEvent {
    pub(crate) const ALL: [RelayEvent; 7] = [
        RelayEvent::ShowNative,
        RelayEvent::ShowCustom,
        RelayEvent::ShowDark,
        RelayEvent::ShowCompact,
        RelayEvent::ShowAdvanced,
        RelayEvent::AcceptCall,
        RelayEvent::DeclineCall,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            RelayEvent::ShowNative => "show-native-notification",
            RelayEvent::ShowCustom => "show-custom-notification",
            RelayEvent::ShowDark => "show-dark-notification",
            RelayEvent::ShowCompact => "show-compact-notification",
            RelayEvent::ShowAdvanced => "show-advanced-notification",
            RelayEvent::AcceptCall => "accept-call",
            RelayEvent::DeclineCall => "decline-call",
        }
    }

    #[cfg(test)]
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }

    /// The variant a `show-*` event asks for; `None` for accept/decline.
    pub(crate) fn requested_variant(self) -> Option<NotificationVariant> {
        match self {
            RelayEvent::ShowNative => Some(NotificationVariant::Native),
            RelayEvent::ShowCustom => Some(NotificationVariant::Window(WindowVariant::Custom)),
            RelayEvent::ShowDark => Some(NotificationVariant::Window(WindowVariant::Dark)),
            RelayEvent::ShowCompact => Some(NotificationVariant::Window(WindowVariant::Compact)),
            RelayEvent::ShowAdvanced => {
                Some(NotificationVariant::Window(WindowVariant::Advanced))
            }
            RelayEvent::AcceptCall | RelayEvent::DeclineCall => None,
        }
    }
}

impl std::fmt::Display for RelayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which kind of presentation surface is talking to the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurfaceRole {
    Main,
    Notification,
}

const MAIN_CAPABILITIES: [RelayEvent; 5] = [
    RelayEvent::ShowNative,
    RelayEvent::ShowCustom,
    RelayEvent::ShowDark,
    RelayEvent::ShowCompact,
    RelayEvent::ShowAdvanced,
];

const NOTIFICATION_CAPABILITIES: [RelayEvent; 2] = [RelayEvent::AcceptCall, RelayEvent::DeclineCall];

impl SurfaceRole {
    pub(crate) fn from_label(label: &str) -> Option<Self> {
        if label == MAIN_WINDOW_LABEL {
            return Some(SurfaceRole::Main);
        }
        if label.starts_with(NOTIFICATION_LABEL_PREFIX) {
            return Some(SurfaceRole::Notification);
        }
        None
    }

    pub(crate) fn capabilities(self) -> &'static [RelayEvent] {
        match self {
            SurfaceRole::Main => &MAIN_CAPABILITIES,
            SurfaceRole::Notification => &NOTIFICATION_CAPABILITIES,
        }
    }

    pub(crate) fn permits(self, event: RelayEvent) -> bool {
        self.capabilities().contains(&event)
    }
}

pub(crate) fn authorize(label: &str, event: RelayEvent) -> Result<SurfaceRole, String> {
    let Some(role) = SurfaceRole::from_label(label) else {
        return Err(format!("SEC_FORBIDDEN: unknown surface label={label}"));
    };
    if !role.permits(event) {
        return Err(format!(
            "SEC_FORBIDDEN: surface={label} may not send event={event}"
        ));
    }
    Ok(role)
}
