//! Shared UI crate for the Lesa site: the navigation bar and its assets.

pub mod core;
pub mod i18n;

pub mod components {
    // Site navigation bar and its stylesheet (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::NavbarStyles;
    pub use site_navbar::SiteNavbar;
}

pub use crate::core::NavbarVariant;
