use crate::api;
use crate::remote::{spawn_fetch, FetchGuard, Remote};
use crate::session::SessionStore;
use crate::views::{rupees, short_date, EmptyState, ErrorBanner, PageBanner, Spinner};
use leptos::*;
use portal_types::PaymentRecord;

#[component]
pub fn Payments() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<Vec<PaymentRecord>>::Loading);
    let guard = FetchGuard::default();
    spawn_fetch(
        state,
        &guard,
        session,
        "payment history",
        api::properties::payment_history(),
    );

    view! {
        <div class="stack">
            <PageBanner
                title="Payment History"
                subtitle="Receipts for your property tax payments"
                class="banner teal"
            />
            {move || match state.get() {
                Remote::Loading => view! { <Spinner/> }.into_view(),
                Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                Remote::Loaded(payments) if payments.is_empty() => view! {
                    <EmptyState
                        icon="rupee"
                        title="No Payments Yet"
                        hint="Payments you make will be listed here with their receipts"
                    />
                }
                .into_view(),
                Remote::Loaded(payments) => view! {
                    <div class="stack">
                        <For
                            each=move || payments.clone()
                            key=|payment| payment.id
                            children=move |payment| {
                                let receipt = payment
                                    .receipt_number
                                    .clone()
                                    .unwrap_or_else(|| "Not provided".to_string());
                                let paid = format!("Paid: {}", short_date(&payment.created_at));
                                let label = payment.status.to_uppercase();
                                view! {
                                    <div class="card">
                                        <div class="row-between">
                                            <div>
                                                <h3>{rupees(payment.amount)}</h3>
                                                <p class="meta">{format!("Receipt: {receipt}")}</p>
                                            </div>
                                            <span class="badge normal">{label}</span>
                                        </div>
                                        <p class="meta">{paid}</p>
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
