//! History-API navigation behind a reactive path signal. Views read the
//! current path through [`Nav`] and navigate with [`Nav::go`]; the browser
//! back/forward buttons feed the same signal via a `popstate` listener.

use leptos::{create_rw_signal, RwSignal, SignalGet, SignalGetUntracked, SignalSet};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[derive(Clone, Copy)]
pub struct Nav {
    path: RwSignal<String>,
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

impl Nav {
    pub fn new() -> Self {
        Self {
            path: create_rw_signal(current_browser_path()),
        }
    }

    /// Wire back/forward buttons into the path signal. Registered once for
    /// the lifetime of the app, so the closure is intentionally leaked.
    #[cfg(target_arch = "wasm32")]
    pub fn listen(&self) {
        let path = self.path;
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            path.set(current_browser_path());
        });
        let _ =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn listen(&self) {}

    /// Reactive read of the current path.
    pub fn path(&self) -> String {
        self.path.get()
    }

    pub fn path_untracked(&self) -> String {
        self.path.get_untracked()
    }

    /// Push a new history entry and update the path signal.
    pub fn go(&self, to: &str) {
        push_state(to, false);
        self.path.set(to.to_string());
    }

    /// Replace the current history entry. Used by guard redirects so the
    /// bounced-from path does not pollute history.
    pub fn replace(&self, to: &str) {
        push_state(to, true);
        self.path.set(to.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn current_browser_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_browser_path() -> String {
    "/".to_string()
}

#[cfg(target_arch = "wasm32")]
fn push_state(to: &str, replace: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(to))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(to))
    };
    if let Err(err) = result {
        web_sys::console::error_1(&err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn push_state(_to: &str, _replace: bool) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_and_replace_update_the_path_signal() {
        let runtime = leptos::create_runtime();
        let nav = Nav::new();
        nav.go("/notices");
        assert_eq!(nav.path_untracked(), "/notices");
        nav.replace("/dashboard");
        assert_eq!(nav.path_untracked(), "/dashboard");
        runtime.dispose();
    }
}
