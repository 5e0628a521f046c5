//! Site components

mod features;
mod footer;
mod navbar;
mod sidebar_menu;

pub use features::{FeatureCard, HomepageFeatures};
pub use footer::Footer;
pub use navbar::Navbar;
pub use sidebar_menu::SidebarMenu;
