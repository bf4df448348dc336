use crate::views::PageBanner;
use leptos::*;

// The backend exposes no scheme endpoints, so this page is informational.
struct Scheme {
    name: &'static str,
    description: &'static str,
}

const SCHEMES: &[Scheme] = &[
    Scheme {
        name: "PM Awas Yojana",
        description: "Housing assistance for eligible rural families.",
    },
    Scheme {
        name: "MGNREGA",
        description: "Guaranteed wage employment for rural households.",
    },
    Scheme {
        name: "Jal Jeevan Mission",
        description: "Piped drinking water connections for every household.",
    },
    Scheme {
        name: "Swachh Bharat Mission",
        description: "Sanitation support and village cleanliness drives.",
    },
];

#[component]
pub fn Schemes() -> impl IntoView {
    view! {
        <div class="stack">
            <PageBanner
                title="Government Schemes"
                subtitle="Schemes you can enquire about at the Panchayat office"
                class="banner blue"
            />
            <div class="grid two">
                {SCHEMES
                    .iter()
                    .map(|scheme| {
                        view! {
                            <div class="card">
                                <h3>{scheme.name}</h3>
                                <p>{scheme.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
