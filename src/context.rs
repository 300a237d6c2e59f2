//! Context providers for the Encore desktop app.
//!
//! Startup settings (config and catalog) are fixed for the process
//! and live in a `OnceLock`. Everything that changes while the app runs is
//! a signal provided at the root:
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(DensityConfig::new(mode)));
//!
//! // In child components
//! let density = use_density();
//! let row_class = density().resolve("row--roomy", "row--tight");
//! ```

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::OnceLock;

use dioxus::prelude::*;
use encore_core::{AppConfig, Catalog, CheckoutEffects, DensityConfig, Toast, ToastQueue};

use crate::app::Route;
use crate::viewport::WebviewViewport;

/// Everything resolved before the window opens.
#[derive(Debug)]
pub struct Settings {
    pub config: AppConfig,
    pub catalog: Catalog,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Store startup settings. Only the first call has any effect.
pub fn init_settings(settings: Settings) {
    let _ = SETTINGS.set(settings);
}

/// Startup settings, or defaults if the app was launched without them.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| Settings {
        config: AppConfig::default(),
        catalog: Catalog::default(),
    })
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("encore")
}

/// Releases and campaigns loaded at startup.
pub fn use_catalog() -> &'static Catalog {
    &settings().catalog
}

/// Current display density.
pub fn use_density() -> Signal<DensityConfig> {
    use_context::<Signal<DensityConfig>>()
}

/// Visible toasts.
pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Shared HTTP client.
pub fn use_http_client() -> reqwest::Client {
    use_context::<reqwest::Client>()
}

/// Viewport observer backed by the webview.
pub fn use_viewport() -> Rc<WebviewViewport> {
    use_context::<Rc<WebviewViewport>>()
}

/// Checkout side effects wired to the toast queue and router.
#[derive(Clone, Copy)]
pub struct AppEffects {
    toasts: Signal<ToastQueue>,
    navigator: Navigator,
}

impl AppEffects {
    pub fn new(toasts: Signal<ToastQueue>, navigator: Navigator) -> Self {
        Self { toasts, navigator }
    }
}

impl CheckoutEffects for AppEffects {
    fn notify(&self, toast: Toast) {
        let mut toasts = self.toasts;
        toasts.write().push(toast);
    }

    fn redirect(&self, route: &str) {
        match route.parse::<Route>() {
            Ok(target) => {
                self.navigator.push(target);
            }
            Err(_) => {
                tracing::warn!(route, "Unknown redirect route, falling back to billing page");
                self.navigator.push(Route::BillingSuccess {});
            }
        }
    }
}
