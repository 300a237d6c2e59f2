//! Viewport observation capability.
//!
//! Lazy loading only needs to hear "this element entered the viewport".
//! [`ViewportObserver`] is that capability: the desktop app backs it with a
//! real `IntersectionObserver` in the webview, and [`ManualViewport`] lets
//! tests fire intersection events by hand.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use thiserror::Error;

/// Default margin around the viewport used for lazy images.
pub const DEFAULT_ROOT_MARGIN_PX: u32 = 50;

/// Default visible fraction that counts as intersecting.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Handle for a registered watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub u64);

/// Observation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Margin grown around the viewport, in CSS pixels
    pub root_margin_px: u32,
    /// Fraction of the target that must be visible
    pub threshold: f32,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            root_margin_px: DEFAULT_ROOT_MARGIN_PX,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ObserveOptions {
    /// Margin in `rootMargin` syntax.
    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// A single intersection report for a watched target.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub is_intersecting: bool,
    pub ratio: f32,
}

/// What the observer should do with a watch after delivering an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchControl {
    Continue,
    Stop,
}

/// Callback invoked for every entry of a watch.
pub type EntryCallback = Box<dyn FnMut(&IntersectionEntry) -> WatchControl>;

/// Errors from registering a watch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    /// No intersection support in this environment
    #[error("viewport observation is not supported")]
    Unsupported,

    /// The target element does not exist
    #[error("target element not found: {0}")]
    TargetMissing(String),
}

/// Capability to watch an element's visibility.
pub trait ViewportObserver {
    /// Start watching `target`. `on_entry` returning [`WatchControl::Stop`]
    /// ends the watch.
    fn observe(
        &self,
        target: &str,
        options: ObserveOptions,
        on_entry: EntryCallback,
    ) -> Result<WatchId, ViewportError>;

    /// Stop a watch. Unknown or already-stopped ids are ignored.
    fn unobserve(&self, id: WatchId);
}

impl<T: ViewportObserver + ?Sized> ViewportObserver for Rc<T> {
    fn observe(
        &self,
        target: &str,
        options: ObserveOptions,
        on_entry: EntryCallback,
    ) -> Result<WatchId, ViewportError> {
        (**self).observe(target, options, on_entry)
    }

    fn unobserve(&self, id: WatchId) {
        (**self).unobserve(id)
    }
}

struct Watch {
    id: WatchId,
    target: String,
    options: ObserveOptions,
    callback: EntryCallback,
}

#[derive(Default)]
struct ManualState {
    next_id: u64,
    watches: Vec<Watch>,
    dispatching: bool,
    cancelled: HashSet<WatchId>,
    unsupported: bool,
}

/// Viewport driven by explicit [`fire`](ManualViewport::fire) calls.
///
/// Used by tests, and by the desktop app when no webview is available.
#[derive(Default)]
pub struct ManualViewport {
    state: RefCell<ManualState>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `observe` fail with [`ViewportError::Unsupported`].
    pub fn set_unsupported(&self, unsupported: bool) {
        self.state.borrow_mut().unsupported = unsupported;
    }

    /// Number of live watches.
    pub fn watch_count(&self) -> usize {
        self.state.borrow().watches.len()
    }

    pub fn is_watching(&self, target: &str) -> bool {
        self.state.borrow().watches.iter().any(|w| w.target == target)
    }

    /// Options the first live watch on `target` was registered with.
    pub fn options_for(&self, target: &str) -> Option<ObserveOptions> {
        self.state
            .borrow()
            .watches
            .iter()
            .find(|w| w.target == target)
            .map(|w| w.options)
    }

    /// Deliver an entry to every watch on `target`. Returns how many
    /// callbacks ran.
    pub fn fire(&self, target: &str, is_intersecting: bool) -> usize {
        let entry = IntersectionEntry {
            target: target.to_string(),
            is_intersecting,
            ratio: if is_intersecting { 1.0 } else { 0.0 },
        };

        // Callbacks may call back into the viewport, so run them unborrowed.
        let mut taken = {
            let mut state = self.state.borrow_mut();
            let (hit, keep): (Vec<_>, Vec<_>) = std::mem::take(&mut state.watches)
                .into_iter()
                .partition(|w| w.target == target);
            state.watches = keep;
            state.dispatching = true;
            hit
        };

        let delivered = taken.len();
        taken.retain_mut(|w| (w.callback)(&entry) == WatchControl::Continue);

        let mut state = self.state.borrow_mut();
        state.dispatching = false;
        let cancelled = std::mem::take(&mut state.cancelled);
        state
            .watches
            .extend(taken.into_iter().filter(|w| !cancelled.contains(&w.id)));
        delivered
    }
}

impl ViewportObserver for ManualViewport {
    fn observe(
        &self,
        target: &str,
        options: ObserveOptions,
        on_entry: EntryCallback,
    ) -> Result<WatchId, ViewportError> {
        let mut state = self.state.borrow_mut();
        if state.unsupported {
            return Err(ViewportError::Unsupported);
        }
        state.next_id += 1;
        let id = WatchId(state.next_id);
        state.watches.push(Watch {
            id,
            target: target.to_string(),
            options,
            callback: on_entry,
        });
        Ok(id)
    }

    fn unobserve(&self, id: WatchId) {
        let mut state = self.state.borrow_mut();
        let before = state.watches.len();
        state.watches.retain(|w| w.id != id);
        if state.watches.len() == before && state.dispatching {
            state.cancelled.insert(id);
        }
    }
}
