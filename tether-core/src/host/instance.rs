//! Component instance identity and refresh requests.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::trace;

/// Unique identifier for a mounted component instance.
///
/// Used to correlate log events (subscribe, refresh, release) that belong
/// to the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Generate a new unique instance ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle a component uses to ask its host for a re-render.
///
/// Requesting a refresh never runs the component directly. The host decides
/// when to re-deliver the current props.
#[derive(Clone)]
pub struct Refresh {
    instance: InstanceId,
    request: Arc<dyn Fn() + Send + Sync>,
}

impl Refresh {
    /// Create a refresh handle for `instance`.
    pub fn new<F>(instance: InstanceId, request: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            instance,
            request: Arc::new(request),
        }
    }

    /// A handle whose requests go nowhere.
    pub fn detached(instance: InstanceId) -> Self {
        Self::new(instance, || {})
    }

    /// The instance this handle refreshes.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Ask the host to re-render the instance.
    pub fn request(&self) {
        trace!(instance = ?self.instance, "refresh requested");
        (self.request)();
    }
}

impl fmt::Debug for Refresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refresh")
            .field("instance", &self.instance)
            .finish()
    }
}
