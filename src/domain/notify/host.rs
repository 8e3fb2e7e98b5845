//! Usage: Windowing host seam for notification surfaces (two-phase create → on_ready).
//!
//! A surface only exists once a readiness observer has been attached to it:
//! `SurfaceHost::create` hands back a `PendingSurface`, and the only way to get a
//! live `Surface` is `PendingSurface::on_ready`, which registers the observer and
//! then starts loading content. Revealing a transparent surface before its
//! content is ready paints an unstyled (black) frame, so hosts must never show a
//! surface on their own.

use super::variant::{SurfacePosition, WindowTemplate, WorkArea};
use crate::shared::mutex_ext::MutexExt;
use std::sync::Mutex;

/// Runs once, on the host's readiness signal, with the surface that became ready.
pub(crate) type ReadyHook<S> = Box<dyn FnOnce(&S) + Send + 'static>;

/// Holds a `ReadyHook` for a host whose readiness signal may repeat
/// (reloads, navigations). Only the first signal runs the hook.
pub(crate) struct ReadyOnce<S> {
    hook: Mutex<Option<ReadyHook<S>>>,
}

impl<S> ReadyOnce<S> {
    pub(crate) fn new(hook: ReadyHook<S>) -> Self {
        Self {
            hook: Mutex::new(Some(hook)),
        }
    }

    /// Returns whether this call ran the hook.
    pub(crate) fn fire(&self, surface: &S) -> bool {
        let hook = self.hook.lock_or_recover().take();
        let Some(hook) = hook else {
            return false;
        };
        hook(surface);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SurfaceRequest {
    pub(crate) label: String,
    pub(crate) template: WindowTemplate,
    pub(crate) position: SurfacePosition,
}

pub(crate) trait Surface: Send + 'static {
    fn label(&self) -> &str;
    /// Show and focus.
    fn reveal(&self) -> Result<(), String>;
    fn close(&self) -> Result<(), String>;
}

pub(crate) trait PendingSurface {
    type Surface: Surface;

    /// Registers `hook` as the readiness observer, then begins content load.
    fn on_ready(self, hook: ReadyHook<Self::Surface>) -> Result<Self::Surface, String>;
}

pub(crate) trait SurfaceHost: 'static {
    type Surface: Surface;
    type Pending: PendingSurface<Surface = Self::Surface>;

    fn primary_work_area(&self) -> Option<WorkArea>;

    /// Prepares a hidden, undecorated, transparent, always-on-top surface.
    fn create(&self, request: SurfaceRequest) -> Result<Self::Pending, String>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording host double: every host interaction lands in an ordered call log.

    use super::*;
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum HostCall {
        Create {
            label: String,
            position: SurfacePosition,
            width: u32,
        },
        RegisterReady(String),
        LoadContent(String),
        Ready(String),
        Reveal(String),
        Close(String),
    }

    #[derive(Default)]
    struct Inner {
        calls: Vec<HostCall>,
        hooks: HashMap<String, Arc<ReadyOnce<RecordingSurface>>>,
        live: BTreeSet<String>,
        work_area: Option<WorkArea>,
        fail_create: bool,
    }

    #[derive(Clone, Default)]
    pub(crate) struct RecordingHost {
        inner: Arc<Mutex<Inner>>,
    }

    pub(crate) struct RecordingPending {
        label: String,
        inner: Arc<Mutex<Inner>>,
    }

    pub(crate) struct RecordingSurface {
        label: String,
        inner: Arc<Mutex<Inner>>,
    }

    impl RecordingHost {
        pub(crate) fn with_work_area(width: u32) -> Self {
            let host = Self::default();
            host.lock().work_area = Some(WorkArea { width });
            host
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
            self.inner.lock().unwrap()
        }

        pub(crate) fn set_fail_create(&self, fail: bool) {
            self.lock().fail_create = fail;
        }

        pub(crate) fn calls(&self) -> Vec<HostCall> {
            self.lock().calls.clone()
        }

        pub(crate) fn clear_calls(&self) {
            self.lock().calls.clear();
        }

        /// Labels of surfaces that were created and not closed.
        pub(crate) fn live_labels(&self) -> Vec<String> {
            self.lock().live.iter().cloned().collect()
        }

        pub(crate) fn has_pending_ready(&self, label: &str) -> bool {
            self.lock().hooks.contains_key(label)
        }

        /// Simulates the webview reporting that its content is ready to paint.
        /// May be called repeatedly, like a page that reloads.
        pub(crate) fn fire_ready(&self, label: &str) {
            let hook = {
                let mut inner = self.lock();
                inner.calls.push(HostCall::Ready(label.to_string()));
                inner.hooks.get(label).cloned()
            };
            if let Some(hook) = hook {
                let surface = RecordingSurface {
                    label: label.to_string(),
                    inner: self.inner.clone(),
                };
                hook.fire(&surface);
            }
        }
    }

    impl SurfaceHost for RecordingHost {
        type Surface = RecordingSurface;
        type Pending = RecordingPending;

        fn primary_work_area(&self) -> Option<WorkArea> {
            self.lock().work_area
        }

        fn create(&self, request: SurfaceRequest) -> Result<Self::Pending, String> {
            let mut inner = self.lock();
            if inner.fail_create {
                return Err(format!("SURFACE_CREATE: refused label={}", request.label));
            }
            inner.calls.push(HostCall::Create {
                label: request.label.clone(),
                position: request.position,
                width: request.template.width,
            });
            inner.live.insert(request.label.clone());
            Ok(RecordingPending {
                label: request.label,
                inner: self.inner.clone(),
            })
        }
    }

    impl PendingSurface for RecordingPending {
        type Surface = RecordingSurface;

        fn on_ready(self, hook: ReadyHook<RecordingSurface>) -> Result<RecordingSurface, String> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(HostCall::RegisterReady(self.label.clone()));
            inner
                .hooks
                .insert(self.label.clone(), Arc::new(ReadyOnce::new(hook)));
            inner.calls.push(HostCall::LoadContent(self.label.clone()));
            drop(inner);
            Ok(RecordingSurface {
                label: self.label,
                inner: self.inner,
            })
        }
    }

    impl Surface for RecordingSurface {
        fn label(&self) -> &str {
            &self.label
        }

        fn reveal(&self) -> Result<(), String> {
            let mut inner = self.inner.lock().unwrap();
            if !inner.live.contains(&self.label) {
                return Err(format!("SURFACE_REVEAL: label={} is gone", self.label));
            }
            inner.calls.push(HostCall::Reveal(self.label.clone()));
            Ok(())
        }

        fn close(&self) -> Result<(), String> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(HostCall::Close(self.label.clone()));
            inner.hooks.remove(&self.label);
            if !inner.live.remove(&self.label) {
                return Err(format!("SURFACE_CLOSE: label={} already closed", self.label));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn ready_once_runs_hook_on_first_signal_only() {
        let runs = Arc::new(AtomicUsize::new(0));
        let seen = runs.clone();
        let once: ReadyOnce<u32> = ReadyOnce::new(Box::new(move |surface: &u32| {
            assert_eq!(*surface, 7);
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(once.fire(&7));
        assert!(!once.fire(&7));
        assert!(!once.fire(&7));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
