//! Viewport-triggered image loading.
//!
//! [`LazyImage`] is the per-image state machine; [`LazyImageWatcher`] wires
//! it to a [`ViewportObserver`] and unregisters on drop.

use std::cell::RefCell;
use std::rc::Rc;

use crate::viewport::{IntersectionEntry, ObserveOptions, ViewportObserver, WatchControl, WatchId};

/// Per-image load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageLoadState {
    /// Network load finished (or failed; see `error`)
    pub loaded: bool,
    /// Network load failed
    pub error: bool,
    /// Image has been seen, so fetching may start
    pub in_view: bool,
}

/// Lazy image state machine.
///
/// Priority images start in view. Others become in view on the first
/// intersecting entry and never leave that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    state: ImageLoadState,
}

impl LazyImage {
    pub fn new(priority: bool) -> Self {
        Self {
            state: ImageLoadState {
                in_view: priority,
                ..ImageLoadState::default()
            },
        }
    }

    pub fn state(&self) -> ImageLoadState {
        self.state
    }

    /// Whether the real image source should be requested.
    pub fn should_fetch(&self) -> bool {
        self.state.in_view
    }

    /// Whether the placeholder is still showing.
    pub fn show_placeholder(&self) -> bool {
        !self.state.loaded
    }

    /// Apply an intersection entry. Returns `true` only for the entry that
    /// starts the fetch.
    pub fn on_intersection(&mut self, entry: &IntersectionEntry) -> bool {
        if !entry.is_intersecting || self.state.in_view {
            return false;
        }
        self.state.in_view = true;
        true
    }

    /// Skip observation and load now. Returns `true` if this changed state.
    pub fn force_in_view(&mut self) -> bool {
        let changed = !self.state.in_view;
        self.state.in_view = true;
        changed
    }

    pub fn mark_loaded(&mut self) {
        self.state.loaded = true;
    }

    /// Failure also counts as loaded so the placeholder goes away.
    pub fn mark_error(&mut self) {
        self.state.error = true;
        self.state.loaded = true;
    }
}

/// A [`LazyImage`] bound to a viewport watch.
///
/// `on_change` runs when an intersection flips the image into view; it is
/// not called for the initial state, which callers read with
/// [`state`](LazyImageWatcher::state) right after attaching.
pub struct LazyImageWatcher<O: ViewportObserver> {
    observer: O,
    image: Rc<RefCell<LazyImage>>,
    watch: Option<WatchId>,
}

impl<O: ViewportObserver> LazyImageWatcher<O> {
    pub fn attach(
        observer: O,
        target: &str,
        priority: bool,
        mut on_change: impl FnMut(ImageLoadState) + 'static,
    ) -> Self {
        let image = Rc::new(RefCell::new(LazyImage::new(priority)));
        let mut watch = None;

        if !priority {
            let img = image.clone();
            let on_entry = Box::new(move |entry: &IntersectionEntry| {
                let started = img.borrow_mut().on_intersection(entry);
                if started {
                    let state = img.borrow().state();
                    on_change(state);
                    WatchControl::Stop
                } else {
                    WatchControl::Continue
                }
            });

            match observer.observe(target, ObserveOptions::default(), on_entry) {
                Ok(id) => watch = Some(id),
                Err(e) => {
                    tracing::warn!(element = %target, error = %e, "Viewport observation unavailable, loading eagerly");
                    image.borrow_mut().force_in_view();
                }
            }
        }

        Self {
            observer,
            image,
            watch,
        }
    }

    pub fn state(&self) -> ImageLoadState {
        self.image.borrow().state()
    }

    pub fn should_fetch(&self) -> bool {
        self.image.borrow().should_fetch()
    }

    pub fn mark_loaded(&self) -> ImageLoadState {
        let mut image = self.image.borrow_mut();
        image.mark_loaded();
        image.state()
    }

    pub fn mark_error(&self) -> ImageLoadState {
        let mut image = self.image.borrow_mut();
        image.mark_error();
        image.state()
    }

    /// Fold in a load outcome observed before this watcher existed and
    /// return the combined state. Outcomes are never rolled back.
    pub fn adopt(&self, seen: ImageLoadState) -> ImageLoadState {
        let mut image = self.image.borrow_mut();
        if seen.error {
            image.mark_error();
        } else if seen.loaded {
            image.mark_loaded();
        }
        image.state()
    }

    /// Whether a watch is still registered.
    pub fn is_observing(&self) -> bool {
        self.watch.is_some() && !self.image.borrow().should_fetch()
    }
}

impl<O: ViewportObserver> Drop for LazyImageWatcher<O> {
    fn drop(&mut self) {
        if let Some(id) = self.watch.take() {
            self.observer.unobserve(id);
        }
    }
}
