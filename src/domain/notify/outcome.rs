//! Usage: Native notification action vocabulary and outcome mapping.
//!
//! Only platforms whose notification center reports the user's choice compile
//! this module: freedesktop servers (action ids) and macOS (button captions).

pub(crate) const ACCEPT_ACTION_ID: &str = "accept";
pub(crate) const DECLINE_ACTION_ID: &str = "decline";
/// Action id freedesktop servers report for a click on the notification body.
#[cfg(any(test, not(target_os = "macos")))]
pub(crate) const CLICK_ACTION_ID: &str = "default";
/// Pseudo action reported when the notification is dismissed or expires.
#[cfg(any(test, not(target_os = "macos")))]
pub(crate) const CLOSED_ACTION_ID: &str = "__closed";

/// (id, button text), in button order.
pub(crate) const NATIVE_ACTIONS: [(&str, &str); 2] =
    [(ACCEPT_ACTION_ID, "Accept"), (DECLINE_ACTION_ID, "Decline")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NativeOutcome {
    Accepted,
    Declined,
    Clicked,
    Closed,
}

impl NativeOutcome {
    /// Position of the pressed button in `NATIVE_ACTIONS`.
    pub(crate) fn from_action_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Accepted),
            1 => Some(Self::Declined),
            _ => None,
        }
    }

    #[cfg(any(test, not(target_os = "macos")))]
    pub(crate) fn from_action_id(id: &str) -> Option<Self> {
        if let Some(index) = NATIVE_ACTIONS.iter().position(|(action, _)| *action == id) {
            return Self::from_action_index(index);
        }
        match id {
            CLICK_ACTION_ID => Some(Self::Clicked),
            CLOSED_ACTION_ID => Some(Self::Closed),
            _ => None,
        }
    }

    /// For hosts that report the caption of the pressed button.
    #[cfg(any(test, target_os = "macos"))]
    pub(crate) fn from_button_text(text: &str) -> Option<Self> {
        let index = NATIVE_ACTIONS
            .iter()
            .position(|(_, caption)| *caption == text)?;
        Self::from_action_index(index)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Clicked => "clicked",
            Self::Closed => "closed",
        }
    }
}

/// Logs what the user did with the native notification.
pub(crate) fn report_outcome(outcome: NativeOutcome) -> &'static str {
    match outcome {
        NativeOutcome::Accepted => {
            tracing::info!(outcome = "accepted", "native notification: call accepted")
        }
        NativeOutcome::Declined => {
            tracing::info!(outcome = "declined", "native notification: call declined")
        }
        NativeOutcome::Clicked => tracing::info!(outcome = "clicked", "native notification clicked"),
        NativeOutcome::Closed => tracing::info!(outcome = "closed", "native notification closed"),
    }
    outcome.as_str()
}
