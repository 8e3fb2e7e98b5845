//! Usage: Notification variants and their fixed window templates.

pub(crate) const DEFAULT_SCREEN_MARGIN: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum WindowVariant {
    Custom,
    Dark,
    Compact,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum NotificationVariant {
    Native,
    Window(WindowVariant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowTemplate {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) page: &'static str,
    pub(crate) title: &'static str,
}

/// Usable area of the primary display, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkArea {
    pub(crate) width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SurfacePosition {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl WindowVariant {
    pub(crate) const ALL: [WindowVariant; 4] = [
        WindowVariant::Custom,
        WindowVariant::Dark,
        WindowVariant::Compact,
        WindowVariant::Advanced,
    ];

    pub(crate) fn key(self) -> &'static str {
        match self {
            WindowVariant::Custom => "custom",
            WindowVariant::Dark => "dark",
            WindowVariant::Compact => "compact",
            WindowVariant::Advanced => "advanced",
        }
    }

    pub(crate) fn template(self) -> WindowTemplate {
        match self {
            WindowVariant::Custom => WindowTemplate {
                width: 320,
                height: 200,
                page: "call-notification.html",
                title: "Incoming Call",
            },
            WindowVariant::Dark => WindowTemplate {
                width: 320,
                height: 200,
                page: "dark-notification.html",
                title: "Incoming Call (Dark)",
            },
            // Sized to sit alongside native macOS banners.
            WindowVariant::Compact => WindowTemplate {
                width: 360,
                height: 100,
                page: "compact-dark-notification.html",
                title: "Incoming Call (Compact)",
            },
            WindowVariant::Advanced => WindowTemplate {
                width: 620,
                height: 180,
                page: "advanced-notification.html",
                title: "Incoming Call (Advanced)",
            },
        }
    }
}

impl std::fmt::Display for WindowVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Top-right anchor: `margin` from the top and from the right edge of the work area.
///
/// Wider templates move further left so they never clip off-screen; a work area
/// narrower than the template pins it to the left edge.
pub(crate) fn top_right_position(
    work_area: WorkArea,
    template: &WindowTemplate,
    margin: u32,
) -> SurfacePosition {
    let occupied = i64::from(template.width) + i64::from(margin);
    let x = (i64::from(work_area.width) - occupied).max(0);
    SurfacePosition {
        x: i32::try_from(x).unwrap_or(i32::MAX),
        y: i32::try_from(margin).unwrap_or(i32::MAX),
    }
}

/// Used when the host cannot report a primary display.
pub(crate) fn fallback_position(margin: u32) -> SurfacePosition {
    let m = i32::try_from(margin).unwrap_or(i32::MAX);
    SurfacePosition { x: m, y: m }
}
