use crate::api;
use crate::remote::{spawn_fetch, FetchGuard, Remote};
use crate::session::SessionStore;
use crate::views::{rupees, short_date, EmptyState, ErrorBanner, PageBanner, Spinner};
use leptos::*;
use portal_types::PropertyRecord;

#[component]
pub fn PropertyTax() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<Vec<PropertyRecord>>::Loading);
    let guard = FetchGuard::default();
    spawn_fetch(state, &guard, session, "properties", api::properties::list());

    view! {
        <div class="stack">
            <PageBanner
                title="Property Tax Management"
                subtitle="View and pay your property taxes online"
                class="banner green"
            />
            {move || match state.get() {
                Remote::Loading => view! { <Spinner/> }.into_view(),
                Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                Remote::Loaded(properties) if properties.is_empty() => view! {
                    <EmptyState
                        icon="home"
                        title="No Properties Found"
                        hint="You don't have any registered properties yet"
                    >
                        <button class="primary">"Register Property"</button>
                    </EmptyState>
                }
                .into_view(),
                Remote::Loaded(properties) => view! {
                    <div class="grid two">
                        <For
                            each=move || properties.clone()
                            key=|property| property.id
                            children=move |property| {
                                let number = property
                                    .property_number
                                    .clone()
                                    .unwrap_or_else(|| format!("#{}", property.id));
                                let kind = property
                                    .property_type
                                    .clone()
                                    .unwrap_or_else(|| "Not provided".to_string());
                                let assessed = property
                                    .assessed_at
                                    .as_deref()
                                    .map(|at| format!("Assessed: {}", short_date(at)));
                                view! {
                                    <div class="card">
                                        <div class="row-between">
                                            <h3>{property.address.clone()}</h3>
                                            <span class="badge normal">{number}</span>
                                        </div>
                                        <p class="meta">{kind}</p>
                                        <div class="row-between">
                                            <div>
                                                <p class="meta">"Assessed Value"</p>
                                                <p class="amount">{rupees(property.assessed_value)}</p>
                                            </div>
                                            <div>
                                                <p class="meta">"Tax Due"</p>
                                                <p class="amount due">{rupees(property.tax_due)}</p>
                                            </div>
                                        </div>
                                        {assessed.map(|line| view! { <p class="meta">{line}</p> })}
                                        <button class="primary">"Pay Now"</button>
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
