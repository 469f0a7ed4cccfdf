use crate::core::{theme, NavGroup, NavGroupKind, NavLink, NavbarLayout, NavbarVariant};
use crate::i18n;
use crate::t;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

// Navbar stylesheet, linked as an asset and inlined in native release builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Mounts the stylesheet defining every utility class `SiteNavbar` emits.
///
/// Render it once near the root of the app.
#[component]
pub fn NavbarStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }
    }
}

/// Site navigation bar: the "Lesa" brand followed by one or two link groups.
///
/// Output depends only on `variant`; light and dark classes are both present and
/// the active theme is left to the stylesheet. `SiteNavbar {}` renders the
/// default `Social` variant.
#[component]
pub fn SiteNavbar(#[props(default)] variant: NavbarVariant) -> Element {
    i18n::init();
    debug!("SiteNavbar render variant={variant:?}");

    let layout = NavbarLayout::for_variant(variant);
    let brand_class = layout.brand_class();
    let brand = NavbarVariant::BRAND;

    rsx! {
        nav { id: "navbar", class: theme::BAR,
            div { class: layout.inner,
                div { class: "{brand_class}", "{brand}" }
                for group in variant.groups() {
                    {nav_group(group)}
                }
            }
        }
    }
}

fn nav_group(group: &NavGroup) -> Element {
    let label = match group.kind {
        NavGroupKind::Primary => t!("nav-primary-label"),
        NavGroupKind::Social => t!("nav-social-label"),
    };

    rsx! {
        div { class: group.class, aria_label: "{label}",
            for link in group.links {
                {nav_link(link)}
            }
        }
    }
}

fn nav_link(link: &NavLink) -> Element {
    match link.icon {
        // Icon-only: the label moves to aria-label and the image is decorative.
        Some(icon) => rsx! {
            a { href: link.href, class: theme::LINK, aria_label: link.label,
                img { class: theme::ICON, src: icon.src(), alt: "" }
            }
        },
        None => {
            let label = link.label;
            rsx! {
                a { href: link.href, class: theme::LINK, "{label}" }
            }
        }
    }
}
