//! Usage: `SurfaceHost` backed by Tauri webview windows.

use crate::notify::host::{
    PendingSurface, ReadyHook, ReadyOnce, Surface, SurfaceHost, SurfaceRequest,
};
use crate::notify::variant::WorkArea;
use tauri::webview::PageLoadEvent;
use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

pub(crate) struct TauriSurfaceHost<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriSurfaceHost<R> {
    pub(crate) fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

/// Window attributes are applied when the readiness observer is attached,
/// because Tauri starts loading content as soon as the window is built.
pub(crate) struct TauriPendingSurface<R: Runtime> {
    app: AppHandle<R>,
    request: SurfaceRequest,
}

pub(crate) struct TauriSurface<R: Runtime> {
    window: WebviewWindow<R>,
}

impl<R: Runtime> SurfaceHost for TauriSurfaceHost<R> {
    type Surface = TauriSurface<R>;
    type Pending = TauriPendingSurface<R>;

    fn primary_work_area(&self) -> Option<WorkArea> {
        let monitor = match self.app.primary_monitor() {
            Ok(Some(monitor)) => monitor,
            Ok(None) => return None,
            Err(err) => {
                tracing::debug!("primary monitor query failed: {}", err);
                return None;
            }
        };

        let size = monitor
            .work_area()
            .size
            .to_logical::<f64>(monitor.scale_factor());
        Some(WorkArea {
            width: size.width.max(0.0).round() as u32,
        })
    }

    fn create(&self, request: SurfaceRequest) -> Result<Self::Pending, String> {
        if self.app.get_webview_window(&request.label).is_some() {
            return Err(format!(
                "SURFACE_CREATE: label={} already in use",
                request.label
            ));
        }
        Ok(TauriPendingSurface {
            app: self.app.clone(),
            request,
        })
    }
}

impl<R: Runtime> PendingSurface for TauriPendingSurface<R> {
    type Surface = TauriSurface<R>;

    fn on_ready(self, hook: ReadyHook<TauriSurface<R>>) -> Result<TauriSurface<R>, String> {
        let SurfaceRequest {
            label,
            template,
            position,
        } = self.request;

        // Page loads can repeat (reload, navigation); only the first finish reveals.
        let hook = ReadyOnce::new(hook);

        let window = WebviewWindowBuilder::new(&self.app, &label, WebviewUrl::App(template.page.into()))
            .title(template.title)
            .inner_size(f64::from(template.width), f64::from(template.height))
            .position(f64::from(position.x), f64::from(position.y))
            .decorations(false)
            .transparent(true)
            .always_on_top(true)
            .skip_taskbar(true)
            .resizable(false)
            .minimizable(false)
            .maximizable(false)
            .shadow(true)
            .visible(false)
            .focused(false)
            .on_page_load(move |window, payload| {
                if !matches!(payload.event(), PageLoadEvent::Finished) {
                    return;
                }
                hook.fire(&TauriSurface { window });
            })
            .build()
            .map_err(|e| format!("SURFACE_CREATE: {e}"))?;

        Ok(TauriSurface { window })
    }
}

impl<R: Runtime> Surface for TauriSurface<R> {
    fn label(&self) -> &str {
        self.window.label()
    }

    fn reveal(&self) -> Result<(), String> {
        self.window
            .show()
            .map_err(|e| format!("SURFACE_REVEAL: {e}"))?;
        self.window
            .set_focus()
            .map_err(|e| format!("SURFACE_REVEAL: {e}"))
    }

    fn close(&self) -> Result<(), String> {
        self.window
            .destroy()
            .map_err(|e| format!("SURFACE_CLOSE: {e}"))
    }
}
