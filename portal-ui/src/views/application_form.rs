use crate::api;
use crate::form::{self, FormPhase};
use crate::nav::Nav;
use crate::routes;
use crate::views::{title_case, DelayedRedirect, ErrorBanner};
use leptos::*;
use portal_types::NewApplication;
use std::collections::BTreeMap;
use wasm_bindgen_futures::spawn_local;

fn date_label(certificate_type: &str) -> &'static str {
    match certificate_type {
        "birth" => "Date of Birth *",
        "death" => "Date of Death *",
        _ => "Date of Issue *",
    }
}

#[component]
pub fn ApplicationForm(certificate_type: String) -> impl IntoView {
    let nav = expect_context::<Nav>();
    let kind = store_value(certificate_type);
    let phase = create_rw_signal(FormPhase::default());
    let redirect = DelayedRedirect::new();

    let full_name = create_rw_signal(String::new());
    let date = create_rw_signal(String::new());
    let place = create_rw_signal(String::new());
    let additional_info = create_rw_signal(String::new());

    let submit = move || {
        if !form::try_begin(phase) {
            return;
        }
        let mut form_data = BTreeMap::new();
        form_data.insert("full_name".to_string(), full_name.get_untracked());
        form_data.insert("date".to_string(), date.get_untracked());
        form_data.insert("place".to_string(), place.get_untracked());
        let info = additional_info.get_untracked();
        if !info.trim().is_empty() {
            form_data.insert("additional_info".to_string(), info);
        }
        let application = NewApplication {
            certificate_type: kind.get_value(),
            form_data,
        };
        spawn_local(async move {
            match api::applications::create(&application).await {
                Ok(_) => {
                    phase.set(FormPhase::Succeeded);
                    redirect.schedule(nav, routes::MY_APPLICATIONS_PATH);
                }
                Err(err) => phase.set(FormPhase::Failed(err.message().to_string())),
            }
        });
    };

    view! {
        <div class="stack narrow">
            {move || match phase.get() {
                FormPhase::Succeeded => view! {
                    <div class="panel success-panel">
                        <span class="icon icon-check large"></span>
                        <h2>"Application Submitted Successfully!"</h2>
                        <p>"Redirecting to your applications..."</p>
                    </div>
                }
                .into_view(),
                current => view! {
                    <div class="panel">
                        <h2>
                            {format!("{} Certificate Application", title_case(&kind.get_value()))}
                        </h2>
                        <p class="meta">"Fill in the details below to submit your application"</p>

                        {current
                            .error()
                            .map(|message| view! { <ErrorBanner message=message.to_string()/> })}

                        <form on:submit=move |ev| {
                            ev.prevent_default();
                            submit();
                        }>
                            <label>"Full Name *"</label>
                            <input
                                type="text"
                                required
                                prop:value=move || full_name.get()
                                on:input=move |ev| {
                                    full_name.set(event_target_value(&ev));
                                    form::note_edit(phase);
                                }
                            />

                            <label>{date_label(&kind.get_value())}</label>
                            <input
                                type="date"
                                required
                                prop:value=move || date.get()
                                on:input=move |ev| {
                                    date.set(event_target_value(&ev));
                                    form::note_edit(phase);
                                }
                            />

                            <label>"Place *"</label>
                            <input
                                type="text"
                                required
                                prop:value=move || place.get()
                                on:input=move |ev| {
                                    place.set(event_target_value(&ev));
                                    form::note_edit(phase);
                                }
                            />

                            <label>"Additional Information"</label>
                            <textarea
                                prop:value=move || additional_info.get()
                                on:input=move |ev| {
                                    additional_info.set(event_target_value(&ev));
                                    form::note_edit(phase);
                                }
                            ></textarea>

                            <button
                                type="submit"
                                class="primary"
                                disabled=move || phase.get().is_submitting()
                            >
                                {move || {
                                    if phase.get().is_submitting() {
                                        "Submitting..."
                                    } else {
                                        "Submit Application"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_label_varies_with_the_certificate_type() {
        assert_eq!(date_label("birth"), "Date of Birth *");
        assert_eq!(date_label("death"), "Date of Death *");
        assert_eq!(date_label("income"), "Date of Issue *");
    }
}
