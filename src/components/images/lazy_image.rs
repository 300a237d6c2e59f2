//! Lazy Image Loader
//!
//! Shows a skeleton until the image scrolls near the viewport, then loads
//! the real source once.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use encore_core::{ImageLoadState, LazyImageWatcher};
use encore_ui::{Skeleton, SkeletonShape};

use crate::context::use_viewport;
use crate::viewport::WebviewViewport;

static NEXT_ELEMENT: AtomicU64 = AtomicU64::new(1);

type WatcherSlot = Rc<RefCell<Option<LazyImageWatcher<Rc<WebviewViewport>>>>>;

/// State of one lazy image, bound to the element with `element_id`.
#[derive(Clone)]
pub struct LazyImageHandle {
    pub element_id: String,
    pub state: Signal<ImageLoadState>,
    slot: WatcherSlot,
}

impl LazyImageHandle {
    pub fn loaded(&self) {
        let next = match self.slot.borrow().as_ref() {
            Some(watcher) => watcher.mark_loaded(),
            None => ImageLoadState {
                loaded: true,
                ..*self.state.peek()
            },
        };
        let mut state = self.state;
        state.set(next);
    }

    pub fn failed(&self) {
        let next = match self.slot.borrow().as_ref() {
            Some(watcher) => watcher.mark_error(),
            None => ImageLoadState {
                loaded: true,
                error: true,
                ..*self.state.peek()
            },
        };
        tracing::debug!(element = %self.element_id, "Image failed to load");
        let mut state = self.state;
        state.set(next);
    }
}

/// Watch an element for viewport entry.
///
/// Priority images are in view from the first render and never observed.
/// The watch is released when the calling component unmounts.
pub fn use_lazy_image(priority: bool) -> LazyImageHandle {
    let viewport = use_viewport();
    let element_id =
        use_hook(|| format!("lazy-img-{}", NEXT_ELEMENT.fetch_add(1, Ordering::Relaxed)));
    let mut state = use_signal(|| ImageLoadState {
        in_view: priority,
        ..ImageLoadState::default()
    });
    let slot: WatcherSlot = use_hook(|| Rc::new(RefCell::new(None)));

    // Observe once the element exists in the DOM
    {
        let slot = slot.clone();
        let element_id = element_id.clone();
        use_effect(move || {
            if slot.borrow().is_some() {
                return;
            }
            let watcher = LazyImageWatcher::attach(
                viewport.clone(),
                &element_id,
                priority,
                move |next| state.set(next),
            );
            // onload may have fired before the effect ran
            let seen = *state.peek();
            let merged = watcher.adopt(seen);
            if merged != seen {
                state.set(merged);
            }
            *slot.borrow_mut() = Some(watcher);
        });
    }

    {
        let slot = slot.clone();
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    LazyImageHandle {
        element_id,
        state,
        slot,
    }
}

/// Image that loads when scrolled into view
///
/// # Examples
///
/// ```rust
/// rsx! {
///     LazyImage {
///         src: release.artwork_url.clone(),
///         alt: release.title.clone(),
///         priority: index < 4,
///     }
/// }
/// ```
#[component]
pub fn LazyImage(
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Load immediately instead of waiting for the viewport
    #[props(default = false)]
    priority: bool,
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let handle = use_lazy_image(priority);
    let state = (handle.state)();
    let on_load = handle.clone();
    let on_error = handle.clone();

    let wrapper = match class {
        Some(extra) => format!("lazy-image {extra}"),
        None => "lazy-image".to_string(),
    };
    let img_class = if state.loaded {
        "lazy-image__img lazy-image__img--loaded"
    } else {
        "lazy-image__img"
    };

    rsx! {
        div {
            class: "{wrapper}",
            id: "{handle.element_id}",

            if !state.loaded {
                Skeleton { shape: SkeletonShape::Block, height: "100%".to_string() }
            }

            if state.error {
                div { class: "lazy-image__error", "Artwork unavailable" }
            } else if state.in_view {
                img {
                    class: "{img_class}",
                    src: "{src}",
                    alt: "{alt}",
                    onload: move |_| on_load.loaded(),
                    onerror: move |_| on_error.failed(),
                }
            }
        }
    }
}
