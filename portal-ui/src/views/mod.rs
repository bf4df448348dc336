//! Page components and the small shared rendering vocabulary (banners,
//! spinner, empty states, navigation links).

use crate::nav::Nav;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

pub mod admin;
pub mod application_form;
pub mod complaints;
pub mod dashboard;
pub mod forgot_password;
pub mod layout;
pub mod login;
pub mod my_applications;
pub mod notices;
pub mod payments;
pub mod profile;
pub mod property_tax;
pub mod register;
pub mod schemes;
pub mod services;

/// Anchor that routes through the in-app navigator instead of reloading.
#[component]
pub fn NavLink(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let nav = expect_context::<Nav>();
    let href = to.clone();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                nav.go(&to);
            }
        >
            {children()}
        </a>
    }
}

/// Coloured page header used by the list views.
#[component]
pub fn PageBanner(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() { "banner" } else { class };
    view! {
        <div class=class>
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}

#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert error">
            <span class="icon icon-alert"></span>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert success">
            <span class="icon icon-check"></span>
            <p>{message}</p>
        </div>
    }
}

/// The loading skeleton shown while a list fetch is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
        </div>
    }
}

/// Terminal empty-collection state, visually distinct from both the
/// spinner and the error banner.
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    hint: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="panel empty-state">
            <span class=format!("icon icon-{icon} large")></span>
            <h3>{title}</h3>
            <p>{hint}</p>
            {children.map(|children| children())}
        </div>
    }
}

pub const REDIRECT_DELAY_MS: u64 = 2000;

/// Post-success redirect tied to the owning view's lifetime. The timeout is
/// cleared on unmount, so a torn-down form never navigates.
#[derive(Clone, Copy)]
pub struct DelayedRedirect {
    handle: RwSignal<Option<TimeoutHandle>>,
}

impl Default for DelayedRedirect {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayedRedirect {
    /// Must be created during component setup so the cleanup hook registers
    /// with the view's reactive owner.
    pub fn new() -> Self {
        let handle = create_rw_signal(None::<TimeoutHandle>);
        on_cleanup(move || {
            if let Some(handle) = handle.get_untracked() {
                handle.clear();
            }
        });
        Self { handle }
    }

    pub fn schedule(&self, nav: Nav, to: &'static str) {
        let result = set_timeout_with_handle(
            move || nav.go(to),
            std::time::Duration::from_millis(REDIRECT_DELAY_MS),
        );
        match result {
            Ok(timeout) => self.handle.set(Some(timeout)),
            Err(err) => web_sys::console::error_1(&err),
        }
    }
}

/// "birth" -> "Birth", for headings built from certificate types.
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Date portion of an ISO timestamp; falls back to the raw value.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Currency rendering for optional backend amounts.
pub fn rupees(amount: Option<f64>) -> String {
    match amount {
        Some(amount) => format!("\u{20b9}{amount:.2}"),
        None => "\u{2014}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delayed_redirect_with_nothing_scheduled_cleans_up_quietly() {
        let runtime = leptos::create_runtime();
        let _redirect = DelayedRedirect::new();
        // Disposal runs the cleanup hook against the empty handle.
        runtime.dispose();
    }

    #[test]
    fn title_case_capitalizes_the_first_letter() {
        assert_eq!(title_case("birth"), "Birth");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn short_date_strips_the_time_component() {
        assert_eq!(short_date("2025-06-01T10:30:00Z"), "2025-06-01");
        assert_eq!(short_date("2025-06-01"), "2025-06-01");
    }

    #[test]
    fn rupees_renders_missing_amounts_as_a_dash() {
        assert_eq!(rupees(Some(1250.5)), "\u{20b9}1250.50");
        assert_eq!(rupees(None), "\u{2014}");
    }
}
