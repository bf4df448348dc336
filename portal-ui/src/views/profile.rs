use crate::api;
use crate::form::{self, FormPhase};
use crate::session::SessionStore;
use crate::views::{ErrorBanner, SuccessBanner};
use leptos::*;
use portal_types::ProfileUpdate;
use wasm_bindgen_futures::spawn_local;

fn or_not_provided(value: &Option<String>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.clone(),
        _ => "Not provided".to_string(),
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let editing = create_rw_signal(false);
    let phase = create_rw_signal(FormPhase::default());
    let saved = create_rw_signal(false);
    let draft = create_rw_signal(ProfileUpdate::default());

    // Refresh the cached identity so the page never shows a stale profile.
    spawn_local(async move {
        match api::auth::profile().await {
            Ok(identity) => session.update_identity(identity),
            Err(err) => {
                if err.is_auth() {
                    session.expire();
                }
                web_sys::console::error_1(&format!("failed to fetch profile: {err}").into());
            }
        }
    });

    let start_editing = move |_| {
        if let Some(identity) = session.current().identity() {
            draft.set(ProfileUpdate {
                first_name: identity.first_name.clone(),
                last_name: identity.last_name.clone(),
                phone_number: identity.phone_number.clone().unwrap_or_default(),
                address: identity.address.clone().unwrap_or_default(),
            });
        }
        saved.set(false);
        phase.set(FormPhase::Idle);
        editing.set(true);
    };

    let submit = move || {
        if !form::try_begin(phase) {
            return;
        }
        let update = draft.get_untracked();
        spawn_local(async move {
            match api::auth::update_profile(&update).await {
                Ok(identity) => {
                    session.update_identity(identity);
                    phase.set(FormPhase::Succeeded);
                    saved.set(true);
                    editing.set(false);
                }
                Err(err) => phase.set(FormPhase::Failed(err.message().to_string())),
            }
        });
    };

    view! {
        <div class="stack narrow">
            <div class="panel">
                <div class="row-between">
                    <h2>"My Profile"</h2>
                    <Show when=move || !editing.get()>
                        <button class="secondary" on:click=start_editing>
                            "Edit Profile"
                        </button>
                    </Show>
                </div>

                <Show when=move || saved.get()>
                    <SuccessBanner message="Profile updated successfully!"/>
                </Show>
                {move || {
                    phase
                        .get()
                        .error()
                        .map(|message| view! { <ErrorBanner message=message.to_string()/> })
                }}

                <Show
                    when=move || editing.get()
                    fallback=move || {
                        session
                            .session()
                            .identity()
                            .cloned()
                            .map(|identity| {
                                view! {
                                    <div class="detail-grid">
                                        <div>
                                            <p class="meta">"Full Name"</p>
                                            <p>{identity.full_name()}</p>
                                        </div>
                                        <div>
                                            <p class="meta">"Email"</p>
                                            <p>{identity.email.clone()}</p>
                                        </div>
                                        <div>
                                            <p class="meta">"Phone Number"</p>
                                            <p>{or_not_provided(&identity.phone_number)}</p>
                                        </div>
                                        <div>
                                            <p class="meta">"Aadhar Number"</p>
                                            <p>{or_not_provided(&identity.aadhar_number)}</p>
                                        </div>
                                        <div>
                                            <p class="meta">"Village"</p>
                                            <p>{or_not_provided(&identity.village)}</p>
                                        </div>
                                        <div>
                                            <p class="meta">"Role"</p>
                                            <p>{identity.role.as_str()}</p>
                                        </div>
                                        <div class="span-2">
                                            <p class="meta">"Address"</p>
                                            <p>{or_not_provided(&identity.address)}</p>
                                        </div>
                                    </div>
                                }
                            })
                    }
                >
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }>
                        <div class="field-row">
                            <div>
                                <label>"First Name"</label>
                                <input
                                    type="text"
                                    required
                                    prop:value=move || draft.get().first_name
                                    on:input=move |ev| {
                                        draft.update(|d| d.first_name = event_target_value(&ev));
                                        form::note_edit(phase);
                                    }
                                />
                            </div>
                            <div>
                                <label>"Last Name"</label>
                                <input
                                    type="text"
                                    required
                                    prop:value=move || draft.get().last_name
                                    on:input=move |ev| {
                                        draft.update(|d| d.last_name = event_target_value(&ev));
                                        form::note_edit(phase);
                                    }
                                />
                            </div>
                        </div>

                        <label>"Phone Number"</label>
                        <input
                            type="tel"
                            prop:value=move || draft.get().phone_number
                            on:input=move |ev| {
                                draft.update(|d| d.phone_number = event_target_value(&ev));
                                form::note_edit(phase);
                            }
                        />

                        <label>"Address"</label>
                        <textarea
                            prop:value=move || draft.get().address
                            on:input=move |ev| {
                                draft.update(|d| d.address = event_target_value(&ev));
                                form::note_edit(phase);
                            }
                        ></textarea>

                        <div class="row-end">
                            <button
                                type="button"
                                class="secondary"
                                on:click=move |_| editing.set(false)
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="primary"
                                disabled=move || phase.get().is_submitting()
                            >
                                {move || {
                                    if phase.get().is_submitting() { "Saving..." } else { "Save Changes" }
                                }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}
