//! Admin-only pages: the user register, the application review queue and
//! the complaint overview. All three are list views over admin endpoints;
//! the review queue additionally mutates status and refetches.

use crate::api;
use crate::remote::{spawn_fetch, FetchGuard, Remote};
use crate::session::SessionStore;
use crate::views::my_applications::{status_badge, status_label};
use crate::views::{short_date, EmptyState, ErrorBanner, PageBanner, Spinner};
use leptos::*;
use portal_types::{ApplicationRecord, ComplaintRecord, Identity};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AdminUsers() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<Vec<Identity>>::Loading);
    let guard = FetchGuard::default();
    spawn_fetch(state, &guard, session, "registered users", api::admin::users());

    view! {
        <div class="stack">
            <PageBanner
                title="Registered Citizens"
                subtitle="Everyone with an account on this portal"
                class="banner purple"
            />
            {move || match state.get() {
                Remote::Loading => view! { <Spinner/> }.into_view(),
                Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                Remote::Loaded(users) if users.is_empty() => view! {
                    <EmptyState
                        icon="users"
                        title="No Users Found"
                        hint="Registered citizens will appear here"
                    />
                }
                .into_view(),
                Remote::Loaded(users) => view! {
                    <div class="stack">
                        <For
                            each=move || users.clone()
                            key=|user| user.id
                            children=move |user| {
                                let village = user
                                    .village
                                    .clone()
                                    .unwrap_or_else(|| "Not provided".to_string());
                                let phone = user
                                    .phone_number
                                    .clone()
                                    .unwrap_or_else(|| "Not provided".to_string());
                                view! {
                                    <div class="card">
                                        <div class="row-between">
                                            <div>
                                                <h3>{user.full_name()}</h3>
                                                <p class="meta">{user.email.clone()}</p>
                                            </div>
                                            <span class="badge normal">
                                                {user.role.as_str().to_uppercase()}
                                            </span>
                                        </div>
                                        <p class="meta">{format!("Village: {village}")}</p>
                                        <p class="meta">{format!("Phone: {phone}")}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
pub fn AdminApplications() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<Vec<ApplicationRecord>>::Loading);
    let guard = FetchGuard::default();

    let reload = {
        let guard = guard.clone();
        move || spawn_fetch(state, &guard, session, "applications", api::applications::all())
    };
    reload();

    // Status change then refetch, so the list always shows the server's view.
    let decide = {
        let reload = reload.clone();
        move |id: u64, status: &'static str| {
            let reload = reload.clone();
            spawn_local(async move {
                if let Err(err) = api::applications::update_status(id, status).await {
                    web_sys::console::error_1(
                        &format!("failed to update application {id}: {err}").into(),
                    );
                }
                reload();
            });
        }
    };

    view! {
        <div class="stack">
            <PageBanner
                title="Application Review"
                subtitle="Approve or reject pending certificate applications"
                class="banner blue"
            />
            {move || match state.get() {
                Remote::Loading => view! { <Spinner/> }.into_view(),
                Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                Remote::Loaded(applications) if applications.is_empty() => view! {
                    <EmptyState
                        icon="clipboard"
                        title="No Applications"
                        hint="Citizen applications will appear here for review"
                    />
                }
                .into_view(),
                Remote::Loaded(applications) => {
                    let decide = decide.clone();
                    view! {
                        <div class="stack">
                            <For
                                each=move || applications.clone()
                                key=|application| application.id
                                children=move |application| {
                                    let applicant = application
                                        .applicant
                                        .as_ref()
                                        .map(|user| user.full_name())
                                        .unwrap_or_else(|| "Unknown applicant".to_string());
                                    let pending = matches!(
                                        application.status.as_str(),
                                        "pending" | "under_review"
                                    );
                                    let approve = {
                                        let decide = decide.clone();
                                        let id = application.id;
                                        move |_| decide(id, "approved")
                                    };
                                    let reject = {
                                        let decide = decide.clone();
                                        let id = application.id;
                                        move |_| decide(id, "rejected")
                                    };
                                    view! {
                                        <div class="card">
                                            <div class="row-between">
                                                <div>
                                                    <h3>
                                                        {format!(
                                                            "{} Certificate",
                                                            crate::views::title_case(
                                                                &application.certificate_type,
                                                            ),
                                                        )}
                                                    </h3>
                                                    <p class="meta">
                                                        {format!(
                                                            "Application No: {}",
                                                            application.application_number,
                                                        )}
                                                    </p>
                                                    <p class="meta">{applicant}</p>
                                                </div>
                                                <span class=status_badge(&application.status)>
                                                    {status_label(&application.status)}
                                                </span>
                                            </div>
                                            <p class="meta">
                                                {format!(
                                                    "Submitted: {}",
                                                    short_date(&application.created_at),
                                                )}
                                            </p>
                                            {pending
                                                .then(|| {
                                                    view! {
                                                        <div class="row-end">
                                                            <button class="danger" on:click=reject>
                                                                "Reject"
                                                            </button>
                                                            <button class="primary" on:click=approve>
                                                                "Approve"
                                                            </button>
                                                        </div>
                                                    }
                                                })}
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn AdminComplaints() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<Vec<ComplaintRecord>>::Loading);
    let guard = FetchGuard::default();
    spawn_fetch(state, &guard, session, "complaints", api::complaints::list());

    view! {
        <div class="stack">
            <PageBanner
                title="Complaint Overview"
                subtitle="All complaints filed by citizens"
                class="banner orange"
            />
            {move || match state.get() {
                Remote::Loading => view! { <Spinner/> }.into_view(),
                Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                Remote::Loaded(complaints) if complaints.is_empty() => view! {
                    <EmptyState
                        icon="message"
                        title="No Complaints Filed"
                        hint="Complaints from citizens will appear here"
                    />
                }
                .into_view(),
                Remote::Loaded(complaints) => view! {
                    <div class="stack">
                        <For
                            each=move || complaints.clone()
                            key=|complaint| complaint.id
                            children=move |complaint| {
                                view! {
                                    <div class="card">
                                        <div class="row-between">
                                            <h3>{complaint.subject.clone()}</h3>
                                            <span class=super::complaints::status_badge(
                                                &complaint.status,
                                            )>{status_label(&complaint.status)}</span>
                                        </div>
                                        <p>{complaint.body.clone()}</p>
                                        <p class="meta">
                                            {format!("Filed: {}", short_date(&complaint.created_at))}
                                        </p>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}
