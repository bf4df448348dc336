use crate::nav::Nav;
use crate::routes::{self, PublicPage, RouteDecision};
use crate::session::SessionStore;
use crate::views::forgot_password::ForgotPassword;
use crate::views::layout::Shell;
use crate::views::login::Login;
use crate::views::register::Register;
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::restore();
    let nav = Nav::new();
    nav.listen();
    provide_context(session);
    provide_context(nav);

    // Guard redirects run as an effect, outside the render pass.
    create_effect(move |_| {
        if let RouteDecision::Redirect(to) = routes::resolve(&session.session(), &nav.path()) {
            nav.replace(to);
        }
    });

    move || match routes::resolve(&session.session(), &nav.path()) {
        RouteDecision::Public(PublicPage::Login) => view! { <Login/> }.into_view(),
        RouteDecision::Public(PublicPage::Register) => view! { <Register/> }.into_view(),
        RouteDecision::Public(PublicPage::ForgotPassword) => {
            view! { <ForgotPassword/> }.into_view()
        }
        RouteDecision::Dashboard(page) => view! { <Shell page/> }.into_view(),
        // The effect above is already navigating; render nothing meanwhile.
        RouteDecision::Redirect(_) => ().into_view(),
    }
}
