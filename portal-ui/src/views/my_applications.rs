use crate::api;
use crate::remote::{spawn_fetch, FetchGuard, Remote};
use crate::session::SessionStore;
use crate::views::{short_date, title_case, EmptyState, ErrorBanner, Spinner};
use leptos::*;
use portal_types::ApplicationRecord;

/// Status chip styling; unknown statuses take the pending style.
pub(super) fn status_badge(status: &str) -> &'static str {
    match status {
        "approved" => "badge approved",
        "rejected" => "badge rejected",
        "under_review" => "badge review",
        _ => "badge pending",
    }
}

pub(super) fn status_label(status: &str) -> String {
    status.replace('_', " ").to_uppercase()
}

#[component]
pub fn MyApplications() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<Vec<ApplicationRecord>>::Loading);
    let guard = FetchGuard::default();
    spawn_fetch(
        state,
        &guard,
        session,
        "my applications",
        api::applications::mine(),
    );

    view! {
        <div class="stack">
            <div class="row-between">
                <h2>"My Applications"</h2>
            </div>
            <div class="panel">
                {move || match state.get() {
                    Remote::Loading => view! { <Spinner/> }.into_view(),
                    Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                    Remote::Loaded(applications) if applications.is_empty() => view! {
                        <EmptyState
                            icon="clipboard"
                            title="No applications found"
                            hint="Apply for a certificate from the Services page"
                        />
                    }
                    .into_view(),
                    Remote::Loaded(applications) => view! {
                        <div class="stack">
                            <For
                                each=move || applications.clone()
                                key=|application| application.id
                                children=move |application| {
                                    let badge = status_badge(&application.status);
                                    let label = status_label(&application.status);
                                    let submitted =
                                        format!("Submitted: {}", short_date(&application.created_at));
                                    view! {
                                        <div class="card">
                                            <div class="row-between">
                                                <div>
                                                    <h3>
                                                        {format!(
                                                            "{} Certificate",
                                                            title_case(&application.certificate_type),
                                                        )}
                                                    </h3>
                                                    <p class="meta">
                                                        {format!(
                                                            "Application No: {}",
                                                            application.application_number,
                                                        )}
                                                    </p>
                                                </div>
                                                <span class=badge>{label}</span>
                                            </div>
                                            <p class="meta">{submitted}</p>
                                            <button class="link">
                                                <span class="icon icon-eye"></span>
                                                " View Details"
                                            </button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_badge_is_total() {
        assert_eq!(status_badge("pending"), "badge pending");
        assert_eq!(status_badge("under_review"), "badge review");
        assert_eq!(status_badge("approved"), "badge approved");
        assert_eq!(status_badge("rejected"), "badge rejected");
        assert_eq!(status_badge("archived"), "badge pending");
    }

    #[test]
    fn status_label_reads_like_the_original() {
        assert_eq!(status_label("under_review"), "UNDER REVIEW");
        assert_eq!(status_label("pending"), "PENDING");
    }
}
