use crate::api;
use crate::form::{self, FormPhase};
use crate::nav::Nav;
use crate::routes;
use crate::views::{DelayedRedirect, ErrorBanner, NavLink};
use leptos::*;
use portal_types::RegisterRequest;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Register() -> impl IntoView {
    let nav = expect_context::<Nav>();
    let data = create_rw_signal(RegisterRequest::default());
    let phase = create_rw_signal(FormPhase::default());
    let redirect = DelayedRedirect::new();

    let submit = move || {
        if !form::try_begin(phase) {
            return;
        }
        let request = data.get_untracked();
        if let Err(message) = request.validate() {
            phase.set(FormPhase::Failed(message));
            return;
        }
        spawn_local(async move {
            match api::auth::register(&request).await {
                Ok(_) => {
                    phase.set(FormPhase::Succeeded);
                    redirect.schedule(nav, routes::LOGIN_PATH);
                }
                Err(err) => phase.set(FormPhase::Failed(err.message().to_string())),
            }
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card wide">
                {move || match phase.get() {
                    FormPhase::Succeeded => view! {
                        <div class="success-panel">
                            <span class="icon icon-check large"></span>
                            <h2>"Registration Successful!"</h2>
                            <p>"Redirecting to login..."</p>
                        </div>
                    }
                    .into_view(),
                    current => view! {
                        <div class="auth-head">
                            <h1>"Register as New Citizen"</h1>
                            <p>"Create your Gram Panchayat account"</p>
                        </div>

                        {current
                            .error()
                            .map(|message| view! { <ErrorBanner message=message.to_string()/> })}

                        <form on:submit=move |ev| {
                            ev.prevent_default();
                            submit();
                        }>
                            <div class="field-row">
                                <div>
                                    <label>"First Name *"</label>
                                    <input
                                        type="text"
                                        required
                                        prop:value=move || data.get().first_name
                                        on:input=move |ev| {
                                            data.update(|d| d.first_name = event_target_value(&ev));
                                            form::note_edit(phase);
                                        }
                                    />
                                </div>
                                <div>
                                    <label>"Last Name *"</label>
                                    <input
                                        type="text"
                                        required
                                        prop:value=move || data.get().last_name
                                        on:input=move |ev| {
                                            data.update(|d| d.last_name = event_target_value(&ev));
                                            form::note_edit(phase);
                                        }
                                    />
                                </div>
                            </div>

                            <label>"Email *"</label>
                            <input
                                type="email"
                                required
                                prop:value=move || data.get().email
                                on:input=move |ev| {
                                    data.update(|d| d.email = event_target_value(&ev));
                                    form::note_edit(phase);
                                }
                            />

                            <label>"Password *"</label>
                            <input
                                type="password"
                                required
                                prop:value=move || data.get().password
                                on:input=move |ev| {
                                    data.update(|d| d.password = event_target_value(&ev));
                                    form::note_edit(phase);
                                }
                            />

                            <div class="field-row">
                                <div>
                                    <label>"Phone Number *"</label>
                                    <input
                                        type="tel"
                                        required
                                        prop:value=move || data.get().phone_number
                                        on:input=move |ev| {
                                            data.update(|d| d.phone_number = event_target_value(&ev));
                                            form::note_edit(phase);
                                        }
                                    />
                                </div>
                                <div>
                                    <label>"Aadhar Number *"</label>
                                    <input
                                        type="text"
                                        required
                                        prop:value=move || data.get().aadhar_number
                                        on:input=move |ev| {
                                            data.update(|d| d.aadhar_number = event_target_value(&ev));
                                            form::note_edit(phase);
                                        }
                                    />
                                </div>
                            </div>

                            <label>"Address *"</label>
                            <textarea
                                required
                                prop:value=move || data.get().address
                                on:input=move |ev| {
                                    data.update(|d| d.address = event_target_value(&ev));
                                    form::note_edit(phase);
                                }
                            ></textarea>

                            <div class="field-row">
                                <div>
                                    <label>"Village *"</label>
                                    <input
                                        type="text"
                                        required
                                        prop:value=move || data.get().village
                                        on:input=move |ev| {
                                            data.update(|d| d.village = event_target_value(&ev));
                                            form::note_edit(phase);
                                        }
                                    />
                                </div>
                                <div>
                                    <label>"Pincode *"</label>
                                    <input
                                        type="text"
                                        required
                                        prop:value=move || data.get().pincode
                                        on:input=move |ev| {
                                            data.update(|d| d.pincode = event_target_value(&ev));
                                            form::note_edit(phase);
                                        }
                                    />
                                </div>
                            </div>

                            <button
                                type="submit"
                                class="primary"
                                disabled=move || phase.get().is_submitting()
                            >
                                {move || {
                                    if phase.get().is_submitting() { "Registering..." } else { "Register" }
                                }}
                            </button>
                        </form>

                        <div class="auth-links">
                            <NavLink to="/login">"Already have an account? Login"</NavLink>
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}
