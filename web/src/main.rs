use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::{NavbarStyles, SiteNavbar};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| info!("lesa-web v{}", env!("CARGO_PKG_VERSION")));

    rsx! {
        // Global app resources
        NavbarStyles {}
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SiteNavbar {}
        main { class: "page" }
    }
}
