mod api;
mod app;
mod convert;
mod history;
mod loading;
mod state;
mod theme;
mod toast;

use app::*;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! { <App /> }
    })
}
