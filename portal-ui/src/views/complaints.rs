use crate::api;
use crate::remote::{spawn_fetch, FetchGuard, Remote};
use crate::session::SessionStore;
use crate::views::{short_date, EmptyState, ErrorBanner, PageBanner, Spinner};
use leptos::*;
use portal_types::ComplaintRecord;

pub(super) fn status_badge(status: &str) -> &'static str {
    match status {
        "resolved" => "badge approved",
        "in_progress" => "badge review",
        _ => "badge pending",
    }
}

#[component]
pub fn Complaints() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<Vec<ComplaintRecord>>::Loading);
    let guard = FetchGuard::default();
    spawn_fetch(state, &guard, session, "complaints", api::complaints::list());

    view! {
        <div class="stack">
            <PageBanner
                title="Complaints"
                subtitle="Track complaints raised with your Gram Panchayat"
                class="banner orange"
            />
            {move || match state.get() {
                Remote::Loading => view! { <Spinner/> }.into_view(),
                Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                Remote::Loaded(complaints) if complaints.is_empty() => view! {
                    <EmptyState
                        icon="message"
                        title="No Complaints Filed"
                        hint="Complaints you raise will show up here"
                    />
                }
                .into_view(),
                Remote::Loaded(complaints) => view! {
                    <div class="stack">
                        <For
                            each=move || complaints.clone()
                            key=|complaint| complaint.id
                            children=move |complaint| {
                                let badge = status_badge(&complaint.status);
                                let label = complaint.status.replace('_', " ").to_uppercase();
                                let filed = format!("Filed: {}", short_date(&complaint.created_at));
                                view! {
                                    <div class="card">
                                        <div class="row-between">
                                            <h3>{complaint.subject.clone()}</h3>
                                            <span class=badge>{label}</span>
                                        </div>
                                        <p>{complaint.body.clone()}</p>
                                        <p class="meta">{filed}</p>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_badge_defaults_to_pending_style() {
        assert_eq!(status_badge("resolved"), "badge approved");
        assert_eq!(status_badge("in_progress"), "badge review");
        assert_eq!(status_badge("open"), "badge pending");
        assert_eq!(status_badge(""), "badge pending");
    }
}
