use leptos::*;

mod api;
mod app;
mod form;
mod nav;
mod remote;
mod routes;
mod session;
mod storage;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}
