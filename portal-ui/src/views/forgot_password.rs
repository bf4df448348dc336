use crate::api;
use crate::form::{self, FormPhase};
use crate::views::{ErrorBanner, NavLink, SuccessBanner};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let phase = create_rw_signal(FormPhase::default());
    let confirmation = create_rw_signal(None::<String>);

    let submit = move || {
        if !form::try_begin(phase) {
            return;
        }
        spawn_local(async move {
            match api::auth::forgot_password(&email.get_untracked()).await {
                Ok(message) => {
                    phase.set(FormPhase::Succeeded);
                    let message = if message.trim().is_empty() {
                        "If the email is registered, a reset link is on its way.".to_string()
                    } else {
                        message
                    };
                    confirmation.set(Some(message));
                }
                Err(err) => phase.set(FormPhase::Failed(err.message().to_string())),
            }
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-head">
                    <h1>"Forgot Password"</h1>
                    <p>"We will send a reset link to your registered email"</p>
                </div>

                {move || {
                    phase
                        .get()
                        .error()
                        .map(|message| view! { <ErrorBanner message=message.to_string()/> })
                }}
                {move || confirmation.get().map(|message| view! { <SuccessBanner message/> })}

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

                    <button type="submit" class="primary" disabled=move || phase.get().is_submitting()>
                        {move || {
                            if phase.get().is_submitting() { "Sending..." } else { "Send Reset Link" }
                        }}
                    </button>
                </form>

                <div class="auth-links">
                    <NavLink to="/login">"Back to Login"</NavLink>
                </div>
            </div>
        </div>
    }
}
