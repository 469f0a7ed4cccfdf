//! Link groups rendered by the navbar.
//!
//! Every target is the placeholder anchor `#`; the site has no routes yet.

use dioxus::prelude::*;

const FACEBOOK_ICON: Asset = asset!("/assets/icons/facebook.svg");

/// Which of the two navbar layouts to render.
///
/// `Social` is the later revision of the bar and the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavbarVariant {
    /// Home / About / Contact.
    Classic,
    /// Menu / Histoire / Contact plus a social group.
    #[default]
    Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Facebook,
}

impl NavIcon {
    pub fn src(self) -> Asset {
        match self {
            NavIcon::Facebook => FACEBOOK_ICON,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Visible text, or the accessible name when `icon` is set.
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Option<NavIcon>,
}

impl NavLink {
    const fn text(label: &'static str) -> Self {
        Self {
            label,
            href: "#",
            icon: None,
        }
    }

    const fn icon(label: &'static str, icon: NavIcon) -> Self {
        Self {
            label,
            href: "#",
            icon: Some(icon),
        }
    }
}

/// Selects the localized landmark label of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGroupKind {
    Primary,
    Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGroup {
    pub kind: NavGroupKind,
    pub class: &'static str,
    pub links: &'static [NavLink],
}

const CLASSIC_GROUPS: &[NavGroup] = &[NavGroup {
    kind: NavGroupKind::Primary,
    class: "flex items-center gap-6",
    links: &[
        NavLink::text("Home"),
        NavLink::text("About"),
        NavLink::text("Contact"),
    ],
}];

const SOCIAL_GROUPS: &[NavGroup] = &[
    NavGroup {
        kind: NavGroupKind::Primary,
        class: "flex items-center gap-8",
        links: &[
            NavLink::text("Menu"),
            NavLink::text("Histoire"),
            NavLink::text("Contact"),
        ],
    },
    NavGroup {
        kind: NavGroupKind::Social,
        class: "flex items-center gap-4",
        links: &[
            NavLink::icon("Facebook", NavIcon::Facebook),
            NavLink::text("Instagram"),
            NavLink::text("TikTok"),
        ],
    },
];

impl NavbarVariant {
    pub const BRAND: &'static str = "Lesa";

    pub fn groups(self) -> &'static [NavGroup] {
        match self {
            NavbarVariant::Classic => CLASSIC_GROUPS,
            NavbarVariant::Social => SOCIAL_GROUPS,
        }
    }
}
