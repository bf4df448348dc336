use crate::api;
use crate::remote::{spawn_fetch, FetchGuard, Remote};
use crate::session::SessionStore;
use crate::views::{short_date, EmptyState, ErrorBanner, PageBanner, Spinner};
use leptos::*;
use portal_types::NoticeRecord;

/// Priority chip styling; unknown priorities take the normal style.
fn priority_badge(priority: &str) -> &'static str {
    match priority {
        "urgent" => "badge urgent",
        "high" => "badge high",
        "low" => "badge low",
        _ => "badge normal",
    }
}

#[component]
pub fn Notices() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<Vec<NoticeRecord>>::Loading);
    let guard = FetchGuard::default();
    spawn_fetch(state, &guard, session, "notices", api::notices::list());

    view! {
        <div class="stack">
            <PageBanner
                title="Notices & Announcements"
                subtitle="Stay updated with latest announcements"
                class="banner purple"
            />
            {move || match state.get() {
                Remote::Loading => view! { <Spinner/> }.into_view(),
                Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                Remote::Loaded(notices) if notices.is_empty() => view! {
                    <EmptyState
                        icon="bell"
                        title="No Notices Available"
                        hint="Check back later for updates"
                    />
                }
                .into_view(),
                Remote::Loaded(notices) => view! {
                    <div class="stack">
                        <For
                            each=move || notices.clone()
                            key=|notice| notice.id
                            children=move |notice| {
                                let badge = priority_badge(&notice.priority);
                                let priority = notice.priority.to_uppercase();
                                let date = short_date(notice.display_date()).to_string();
                                let publisher = notice.publisher.as_ref().map(|p| {
                                    format!("Published by: {} {}", p.first_name, p.last_name)
                                });
                                view! {
                                    <div class="panel notice">
                                        <div class="row-between">
                                            <h3>{notice.title.clone()}</h3>
                                            <span class=badge>{priority}</span>
                                        </div>
                                        <div class="meta">
                                            <span class="icon icon-calendar"></span>
                                            <span>{date}</span>
                                            <span class="category">{notice.category.clone()}</span>
                                        </div>
                                        <p class="prewrap">{notice.content.clone()}</p>
                                        {publisher.map(|line| view! { <p class="meta">{line}</p> })}
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
    fn priority_badge_is_total() {
        assert_eq!(priority_badge("urgent"), "badge urgent");
        assert_eq!(priority_badge("high"), "badge high");
        assert_eq!(priority_badge("low"), "badge low");
        assert_eq!(priority_badge("normal"), "badge normal");
        assert_eq!(priority_badge("whatever"), "badge normal");
        assert_eq!(priority_badge(""), "badge normal");
    }
}
