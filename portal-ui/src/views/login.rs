use crate::form::{self, FormPhase};
use crate::nav::Nav;
use crate::routes;
use crate::session::SessionStore;
use crate::views::{ErrorBanner, NavLink};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Login() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let nav = expect_context::<Nav>();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let phase = create_rw_signal(FormPhase::default());

    let submit = move || {
        if !form::try_begin(phase) {
            return;
        }
        spawn_local(async move {
            let result = session
                .login(email.get_untracked(), password.get_untracked())
                .await;
            match result {
                Ok(_) => {
                    phase.set(FormPhase::Succeeded);
                    nav.go(routes::DASHBOARD_PATH);
                }
                Err(err) => phase.set(FormPhase::Failed(err.message().to_string())),
            }
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-head">
                    <span class="icon icon-home large"></span>
                    <h1>"Gram Panchayat"</h1>
                    <p>"Digital Governance Platform"</p>
                </div>

                {move || {
                    phase
                        .get()
                        .error()
                        .map(|message| view! { <ErrorBanner message=message.to_string()/> })
                }}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <label>"Email"</label>
                    <input
                        type="email"
                        placeholder="your@email.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            form::note_edit(phase);
                        }
                    />

                    <label>"Password"</label>
                    <input
                        type="password"
                        placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            form::note_edit(phase);
                        }
                    />

                    <button type="submit" class="primary" disabled=move || phase.get().is_submitting()>
                        {move || if phase.get().is_submitting() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="auth-links">
                    <NavLink to="/forgot-password">"Forgot Password?"</NavLink>
                    <NavLink to="/register">"Register as New Citizen"</NavLink>
                </div>
            </div>
        </div>
    }
}
