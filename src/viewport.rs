//! `IntersectionObserver` in the webview, exposed as a [`ViewportObserver`].
//!
//! Each watch runs a small script that observes one element by id and
//! streams entries back over the eval channel. Observers are kept in
//! `window.__encoreObservers` so they can be disconnected from Rust.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use dioxus::prelude::*;
use encore_core::{
    EntryCallback, IntersectionEntry, ObserveOptions, ViewportError, ViewportObserver,
    WatchControl, WatchId,
};
use serde::Deserialize;

/// Message posted by the observer script.
#[derive(Debug, Deserialize)]
struct ObserverMessage {
    supported: bool,
    intersecting: bool,
    ratio: f32,
}

#[derive(Default)]
pub struct WebviewViewport {
    next_id: Cell<u64>,
    tasks: RefCell<HashMap<WatchId, Task>>,
}

impl WebviewViewport {
    pub fn new() -> Self {
        Self::default()
    }
}

fn observer_script(id: WatchId, target: &str, options: &ObserveOptions) -> String {
    // serde_json gives a correctly escaped JS string literal
    let target_literal = serde_json::to_string(target).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
const id = {id};
const el = document.getElementById({target_literal});
window.__encoreObservers = window.__encoreObservers || new Map();
if (!el || !('IntersectionObserver' in window)) {{
    dioxus.send({{ supported: false, intersecting: true, ratio: 1.0 }});
}} else {{
    const io = new IntersectionObserver((entries) => {{
        for (const e of entries) {{
            dioxus.send({{ supported: true, intersecting: e.isIntersecting, ratio: e.intersectionRatio }});
        }}
    }}, {{ rootMargin: '{margin}', threshold: {threshold} }});
    io.observe(el);
    window.__encoreObservers.set(id, io);
}}
"#,
        id = id.0,
        margin = options.root_margin_css(),
        threshold = options.threshold,
    )
}

fn disconnect(id: WatchId) {
    let _ = document::eval(&format!(
        "const io = window.__encoreObservers?.get({id}); if (io) {{ io.disconnect(); window.__encoreObservers.delete({id}); }}",
        id = id.0
    ));
}

impl ViewportObserver for WebviewViewport {
    fn observe(
        &self,
        target: &str,
        options: ObserveOptions,
        mut on_entry: EntryCallback,
    ) -> Result<WatchId, ViewportError> {
        if target.is_empty() {
            return Err(ViewportError::TargetMissing(target.to_string()));
        }

        let id = WatchId(self.next_id.get() + 1);
        self.next_id.set(id.0);

        let mut eval = document::eval(&observer_script(id, target, &options));
        let target = target.to_string();

        let task = spawn(async move {
            loop {
                let message = match eval.recv::<ObserverMessage>().await {
                    Ok(message) => message,
                    Err(e) => {
                        tracing::warn!(element = %target, error = ?e, "Viewport observer channel closed");
                        break;
                    }
                };

                if !message.supported {
                    tracing::warn!(element = %target, "IntersectionObserver unavailable, loading eagerly");
                }

                let entry = IntersectionEntry {
                    target: target.clone(),
                    is_intersecting: message.intersecting,
                    ratio: message.ratio,
                };
                if on_entry(&entry) == WatchControl::Stop || !message.supported {
                    disconnect(id);
                    break;
                }
            }
        });

        self.tasks.borrow_mut().insert(id, task);
        Ok(id)
    }

    fn unobserve(&self, id: WatchId) {
        if let Some(task) = self.tasks.borrow_mut().remove(&id) {
            task.cancel();
            disconnect(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_options_and_escaped_target() {
        let script = observer_script(WatchId(7), "cover-\"x\"", &ObserveOptions::default());
        assert!(script.contains("const id = 7;"));
        assert!(script.contains(r#"getElementById("cover-\"x\"")"#));
        assert!(script.contains("rootMargin: '50px'"));
        assert!(script.contains("threshold: 0.1"));
    }
}
