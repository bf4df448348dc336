//! Dashboard shell: sidebar with the role-derived menu, header with the
//! active page title and the signed-in identity, and the routed page body.

use crate::nav::Nav;
use crate::routes::{self, Page};
use crate::session::SessionStore;
use crate::views::admin::{AdminApplications, AdminComplaints, AdminUsers};
use crate::views::application_form::ApplicationForm;
use crate::views::complaints::Complaints;
use crate::views::dashboard::Dashboard;
use crate::views::my_applications::MyApplications;
use crate::views::notices::Notices;
use crate::views::payments::Payments;
use crate::views::profile::Profile;
use crate::views::property_tax::PropertyTax;
use crate::views::schemes::Schemes;
use crate::views::services::Services;
use leptos::*;

#[component]
pub fn Shell(page: Page) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let nav = expect_context::<Nav>();
    let sidebar_open = create_rw_signal(true);

    let role = move || session.session().role().unwrap_or_default();
    let title = move || routes::page_title(role(), &nav.path());
    let identity = move || session.session().identity().cloned();

    view! {
        <div class="shell">
            <aside class=move || if sidebar_open.get() { "sidebar" } else { "sidebar collapsed" }>
                <div class="sidebar-head">
                    <Show when=move || sidebar_open.get() fallback=|| ()>
                        <h2>"Gram Panchayat"</h2>
                    </Show>
                    <button
                        class="icon-button"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        {move || if sidebar_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>

                <nav class="menu">
                    <For
                        each=move || routes::menu_for(role())
                        key=|item| item.path
                        children=move |item| {
                            view! {
                                <a
                                    href=item.path
                                    class=move || {
                                        if routes::is_active(item, &nav.path()) {
                                            "menu-item active"
                                        } else {
                                            "menu-item"
                                        }
                                    }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        nav.go(item.path);
                                    }
                                >
                                    <span class=format!("icon icon-{}", item.icon)></span>
                                    <Show when=move || sidebar_open.get() fallback=|| ()>
                                        <span>{item.label}</span>
                                    </Show>
                                </a>
                            }
                        }
                    />
                </nav>

                <div class="sidebar-foot">
                    <a
                        href="/profile"
                        class=move || {
                            if nav.path() == "/profile" { "menu-item active" } else { "menu-item" }
                        }
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav.go("/profile");
                        }
                    >
                        <span class="icon icon-settings"></span>
                        <Show when=move || sidebar_open.get() fallback=|| ()>
                            <span>"Settings"</span>
                        </Show>
                    </a>
                    <button class="menu-item" on:click=move |_| session.logout(nav)>
                        <span class="icon icon-logout"></span>
                        <Show when=move || sidebar_open.get() fallback=|| ()>
                            <span>"Logout"</span>
                        </Show>
                    </button>
                </div>
            </aside>

            <div class="content">
                <header class="topbar">
                    <h1>{title}</h1>
                    <div class="topbar-right">
                        <button class="icon-button bell">
                            <span class="icon icon-bell"></span>
                            <span class="dot"></span>
                        </button>
                        {move || {
                            identity()
                                .map(|identity| {
                                    view! {
                                        <div class="who">
                                            <div class="avatar">{identity.initial()}</div>
                                            <div class="who-text">
                                                <p class="name">{identity.full_name()}</p>
                                                <p class="role">{identity.role.as_str()}</p>
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                </header>

                <main class="page">{page_view(page)}</main>
            </div>
        </div>
    }
}

fn page_view(page: Page) -> View {
    match page {
        Page::Dashboard => view! { <Dashboard/> }.into_view(),
        Page::Services => view! { <Services/> }.into_view(),
        Page::ApplyCertificate(kind) => {
            view! { <ApplicationForm certificate_type=kind/> }.into_view()
        }
        Page::MyApplications => view! { <MyApplications/> }.into_view(),
        Page::Complaints => view! { <Complaints/> }.into_view(),
        Page::PropertyTax => view! { <PropertyTax/> }.into_view(),
        Page::Notices => view! { <Notices/> }.into_view(),
        Page::Payments => view! { <Payments/> }.into_view(),
        Page::Schemes => view! { <Schemes/> }.into_view(),
        Page::Profile => view! { <Profile/> }.into_view(),
        Page::AdminUsers => view! { <AdminUsers/> }.into_view(),
        Page::AdminApplications => view! { <AdminApplications/> }.into_view(),
        Page::AdminComplaints => view! { <AdminComplaints/> }.into_view(),
        Page::NotFound => view! {
            <div class="panel empty-state">
                <h3>"Page not found"</h3>
                <p>"The page you are looking for does not exist."</p>
            </div>
        }
        .into_view(),
    }
}
