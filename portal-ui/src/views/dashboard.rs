use crate::api;
use crate::remote::{spawn_fetch, FetchGuard, Remote};
use crate::session::SessionStore;
use crate::views::{ErrorBanner, NavLink, Spinner};
use leptos::*;
use portal_types::{DashboardStats, Role};

#[component]
fn StatCard(label: &'static str, value: u64, icon: &'static str) -> impl IntoView {
    view! {
        <div class="card stat">
            <span class=format!("icon icon-{icon}")></span>
            <p class="amount">{value}</p>
            <p class="meta">{label}</p>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = create_rw_signal(Remote::<DashboardStats>::Loading);
    let guard = FetchGuard::default();

    let role = session.current().role().unwrap_or_default();
    let stats = async move {
        match role {
            Role::Admin => api::dashboard::admin().await,
            Role::Citizen => api::dashboard::citizen().await,
        }
    };
    spawn_fetch(state, &guard, session, "dashboard stats", stats);

    let first_name = session
        .current()
        .identity()
        .map(|identity| identity.first_name.clone())
        .unwrap_or_default();

    view! {
        <div class="stack">
            <div class="banner blue">
                <h2>{format!("Welcome back, {first_name}!")}</h2>
                <p>"Here is what's happening in your Gram Panchayat"</p>
            </div>

            {move || match state.get() {
                Remote::Loading => view! { <Spinner/> }.into_view(),
                Remote::Failed(message) => view! { <ErrorBanner message/> }.into_view(),
                Remote::Loaded(stats) => view! {
                    <div class="grid four">
                        <StatCard label="Applications" value=stats.total_applications icon="clipboard"/>
                        <StatCard label="Pending" value=stats.pending_applications icon="clock"/>
                        <StatCard label="Approved" value=stats.approved_applications icon="check"/>
                        <StatCard label="Complaints" value=stats.total_complaints icon="message"/>
                        {(role == Role::Admin)
                            .then(|| {
                                view! {
                                    <StatCard label="Users" value=stats.total_users icon="users"/>
                                    <StatCard
                                        label="Properties"
                                        value=stats.total_properties
                                        icon="home"
                                    />
                                }
                            })}
                    </div>
                }
                .into_view(),
            }}

            {(role == Role::Citizen)
                .then(|| {
                    view! {
                        <div class="grid three">
                            <NavLink to="/services" class="card action">
                                <span class="icon icon-file-text large"></span>
                                <h3>"Apply for Certificate"</h3>
                            </NavLink>
                            <NavLink to="/complaints" class="card action">
                                <span class="icon icon-message large"></span>
                                <h3>"Track Complaints"</h3>
                            </NavLink>
                            <NavLink to="/property-tax" class="card action">
                                <span class="icon icon-rupee large"></span>
                                <h3>"Pay Property Tax"</h3>
                            </NavLink>
                        </div>
                    }
                })}
        </div>
    }
}
