//! Batch image preloading.

use dioxus::prelude::*;
use encore_core::{HttpImageFetcher, ImagePreloader, PreloadProgress};
use encore_ui::ProgressRing;

use crate::context::use_http_client;

/// Preload `urls` once on mount and track progress.
///
/// The preload runs on the component's scope, so unmounting stops it.
pub fn use_preload(urls: Vec<String>) -> Signal<PreloadProgress> {
    let client = use_http_client();
    let mut progress = use_signal(|| PreloadProgress {
        loaded_count: 0,
        total_count: urls.len(),
        loading: !urls.is_empty(),
    });

    use_hook(move || {
        spawn(async move {
            let preloader = ImagePreloader::new(HttpImageFetcher::new(client));
            let report = preloader
                .preload(&urls, |snapshot| progress.set(snapshot))
                .await;
            if !report.failed.is_empty() {
                tracing::warn!(
                    failed = report.failed.len(),
                    total = report.total_count,
                    "Some images failed to preload"
                );
            }
        })
    });

    progress
}

/// Shows a progress ring until every image in `urls` has settled.
#[component]
pub fn PreloadGate(urls: Vec<String>, children: Element) -> Element {
    let progress = use_preload(urls);
    let snapshot = progress();

    rsx! {
        if snapshot.loading {
            div { class: "preload-gate",
                ProgressRing { progress: snapshot.progress(), size: 64.0 }
                p { class: "preload-gate__label",
                    "Loading artwork {snapshot.loaded_count} of {snapshot.total_count}"
                }
            }
        } else {
            {children}
        }
    }
}
