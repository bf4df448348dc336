use crate::views::{NavLink, PageBanner};
use leptos::*;

struct Service {
    kind: &'static str,
    name: &'static str,
    icon: &'static str,
    tone: &'static str,
}

const SERVICES: &[Service] = &[
    Service { kind: "birth", name: "Birth Certificate", icon: "heart", tone: "blue" },
    Service { kind: "death", name: "Death Certificate", icon: "file-text", tone: "purple" },
    Service { kind: "income", name: "Income Certificate", icon: "rupee", tone: "green" },
    Service { kind: "caste", name: "Caste Certificate", icon: "file-text", tone: "yellow" },
    Service { kind: "residence", name: "Residence Certificate", icon: "home", tone: "red" },
    Service { kind: "marriage", name: "Marriage Certificate", icon: "heart", tone: "pink" },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <div class="stack">
            <PageBanner
                title="Apply for Certificates Online"
                subtitle="Get your certificates quickly and hassle-free"
                class="banner blue"
            />
            <div class="grid three">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <NavLink
                                to=format!("/services/apply/{}", service.kind)
                                class=format!("card service {}", service.tone)
                            >
                                <span class=format!("icon icon-{} large", service.icon)></span>
                                <h3>{service.name}</h3>
                                <p class="meta">"Apply online and track your application status"</p>
                                <span class="link">"Apply Now \u{2192}"</span>
                            </NavLink>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
