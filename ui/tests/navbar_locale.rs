//! Landmark labels follow the active language; brand and link labels do not.
//!
//! Kept in its own test binary because it switches the global loader.

use dioxus::prelude::*;
use ui::components::SiteNavbar;

fn app() -> Element {
    rsx! { SiteNavbar {} }
}

#[test]
fn french_landmarks_keep_literal_links() {
    ui::i18n::init();
    ui::i18n::set_language("fr-FR").expect("fr-FR bundle is embedded");

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("aria-label=\"Navigation principale\""), "{html}");
    assert!(html.contains("aria-label=\"Réseaux sociaux\""), "{html}");
    for label in ["Lesa", "Menu", "Histoire", "Contact", "Instagram", "TikTok"] {
        assert!(html.contains(&format!(">{label}<")), "{label} missing in {html}");
    }
    assert!(html.contains("aria-label=\"Facebook\""));
}
