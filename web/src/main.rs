use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[log] logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global document resources; the page itself lives in `ui`.
        document::Link { rel: "icon", href: FAVICON }
        document::Title { "Steingauquartier" }

        ui::Site {}
    }
}
