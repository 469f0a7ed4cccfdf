//! Utility class strings for the navbar.
//!
//! Light and dark classes are always emitted together; which one takes effect is
//! decided by the stylesheet (`prefers-color-scheme` or a `.dark` ancestor).

use super::links::NavbarVariant;

pub const BAR: &str =
    "w-full bg-white dark:bg-black border-b border-black/[.08] dark:border-white/[.145]";
pub const BRAND: &str = "text-2xl font-semibold text-black dark:text-zinc-50";
pub const LINK: &str = "text-black dark:text-zinc-50 hover:underline";
pub const ICON: &str = "h-5 w-5 dark:invert";

/// Spacing that differs between the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarLayout {
    pub inner: &'static str,
    pub brand_padding: &'static str,
}

impl NavbarLayout {
    pub const fn for_variant(variant: NavbarVariant) -> Self {
        match variant {
            NavbarVariant::Classic => Self {
                inner: "p-6 flex items-center justify-between mx-auto",
                brand_padding: "px-6",
            },
            NavbarVariant::Social => Self {
                inner: "px-8 py-4 flex items-center justify-between mx-auto",
                brand_padding: "px-2",
            },
        }
    }

    pub fn brand_class(&self) -> String {
        format!("{BRAND} {}", self.brand_padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_carries_light_and_dark_classes() {
        let classes: Vec<&str> = BAR.split_whitespace().collect();
        assert!(classes.contains(&"bg-white"));
        assert!(classes.contains(&"dark:bg-black"));
    }

    #[test]
    fn variants_differ_only_in_spacing() {
        let classic = NavbarLayout::for_variant(NavbarVariant::Classic);
        let social = NavbarLayout::for_variant(NavbarVariant::Social);
        assert_ne!(classic, social);
        assert!(classic.brand_class().starts_with(BRAND));
        assert!(social.brand_class().starts_with(BRAND));
        assert!(classic.inner.ends_with("justify-between mx-auto"));
        assert!(social.inner.ends_with("justify-between mx-auto"));
    }
}
