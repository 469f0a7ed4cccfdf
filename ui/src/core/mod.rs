//! Static navbar data: link groups per variant and the utility classes they render with.

pub mod links;
pub mod theme;

pub use links::{NavGroup, NavGroupKind, NavIcon, NavLink, NavbarVariant};
pub use theme::NavbarLayout;
