//! Viewport-triggered loading and batch preloading, driven end to end.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use encore_core::{
    ImageFetcher, ImageLoadState, ImagePreloader, LazyImageWatcher, ManualViewport, PreloadError,
};

/// Records which image sources were requested, standing in for the `<img>`
/// element flipping its `src` from placeholder to the real URL.
#[derive(Default)]
struct FetchLog {
    requested: RefCell<Vec<String>>,
}

impl FetchLog {
    fn request(&self, url: &str) {
        self.requested.borrow_mut().push(url.to_string());
    }

    fn count(&self, url: &str) -> usize {
        self.requested.borrow().iter().filter(|u| *u == url).count()
    }
}

fn mount(
    viewport: &Rc<ManualViewport>,
    log: &Rc<FetchLog>,
    id: &str,
    url: &str,
    priority: bool,
) -> LazyImageWatcher<Rc<ManualViewport>> {
    let log_for_change = log.clone();
    let url_for_change = url.to_string();
    let watcher = LazyImageWatcher::attach(viewport.clone(), id, priority, move |state: ImageLoadState| {
        if state.in_view {
            log_for_change.request(&url_for_change);
        }
    });
    if watcher.should_fetch() {
        log.request(url);
    }
    watcher
}

#[test]
fn priority_image_fetches_without_visibility() {
    let viewport = Rc::new(ManualViewport::new());
    let log = Rc::new(FetchLog::default());

    let _hero = mount(&viewport, &log, "hero", "https://cdn/hero.jpg", true);

    assert_eq!(log.count("https://cdn/hero.jpg"), 1);
    assert_eq!(viewport.watch_count(), 0);
}

#[test]
fn lazy_image_fetches_exactly_once_on_first_intersection() {
    let viewport = Rc::new(ManualViewport::new());
    let log = Rc::new(FetchLog::default());

    let watcher = mount(&viewport, &log, "cover-7", "https://cdn/7.jpg", false);
    assert_eq!(log.count("https://cdn/7.jpg"), 0);

    viewport.fire("cover-7", false);
    assert_eq!(log.count("https://cdn/7.jpg"), 0);

    viewport.fire("cover-7", true);
    viewport.fire("cover-7", true);
    viewport.fire("cover-7", true);
    assert_eq!(log.count("https://cdn/7.jpg"), 1);

    let state = watcher.mark_loaded();
    assert!(state.loaded && !state.error);
}

#[test]
fn unmount_before_visible_never_fetches() {
    let viewport = Rc::new(ManualViewport::new());
    let log = Rc::new(FetchLog::default());

    let watcher = mount(&viewport, &log, "cover-1", "https://cdn/1.jpg", false);
    drop(watcher);
    viewport.fire("cover-1", true);

    assert_eq!(log.count("https://cdn/1.jpg"), 0);
    assert_eq!(viewport.watch_count(), 0);
}

#[test]
fn images_are_observed_independently() {
    let viewport = Rc::new(ManualViewport::new());
    let log = Rc::new(FetchLog::default());

    let _a = mount(&viewport, &log, "a", "https://cdn/a.jpg", false);
    let _b = mount(&viewport, &log, "b", "https://cdn/b.jpg", false);

    viewport.fire("b", true);
    assert_eq!(log.count("https://cdn/a.jpg"), 0);
    assert_eq!(log.count("https://cdn/b.jpg"), 1);
    assert!(viewport.is_watching("a"));
}

struct FlakyCdn {
    outcomes: HashMap<String, (u64, Result<(), PreloadError>)>,
}

impl ImageFetcher for FlakyCdn {
    async fn fetch(&self, url: &str) -> Result<(), PreloadError> {
        let (delay, result) = self.outcomes[url].clone();
        tokio::time::sleep(Duration::from_millis(delay)).await;
        result
    }
}

#[tokio::test(start_paused = true)]
async fn preloading_three_with_one_error_completes() {
    let urls = vec![
        "https://cdn/1.jpg".to_string(),
        "https://cdn/2.jpg".to_string(),
        "https://cdn/3.jpg".to_string(),
    ];
    let cdn = FlakyCdn {
        outcomes: HashMap::from([
            (urls[0].clone(), (5, Ok(()))),
            (urls[1].clone(), (15, Err(PreloadError::Http("connection reset".to_string())))),
            (urls[2].clone(), (10, Ok(()))),
        ]),
    };

    let mut last = None;
    let report = ImagePreloader::new(cdn)
        .preload(&urls, |p| last = Some(p))
        .await;

    let last = last.unwrap();
    assert!(!last.loading);
    assert_eq!(last.loaded_count, 3);
    assert_eq!(last.progress(), 1.0);
    assert_eq!(report.loaded_count, 3);
    assert_eq!(report.failed, vec![urls[1].clone()]);
}
