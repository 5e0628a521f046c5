//! NexusData Site Configuration
//!
//! This crate provides the declarative layer of the NexusData documentation
//! site: the resolved site configuration record, the docs sidebar tree, the
//! sidebar menu definition, and the homepage feature list. Everything here is
//! defined once at source level and never mutated at runtime.

pub mod features;
pub mod menu;
pub mod sidebar;
pub mod site;

use thiserror::Error;

pub use features::{feature_entries, FeatureEntry};
pub use menu::{menu_entries, NavigationEntry};
pub use sidebar::{tutorial_sidebar, SidebarItem};
pub use site::{FooterLink, FooterLinkGroup, NavbarItem, NavbarPosition, SiteConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("site title must not be empty")]
    EmptyTitle,

    #[error("site url must not end with a slash: {0}")]
    TrailingSlash(String),

    #[error("base url must begin and end with '/': {0}")]
    MalformedBaseUrl(String),

    #[error("default locale '{0}' is not in the locale list")]
    UnknownDefaultLocale(String),

    #[error("link '{0}' has no target")]
    MissingLinkTarget(String),

    #[error("sidebar category '{0}' has no items")]
    EmptySidebarCategory(String),

    #[error("duplicate doc id in sidebar: {0}")]
    DuplicateDocId(String),

    #[error("export error: {0}")]
    Export(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Icon symbols referenced by navigation and feature entries.
///
/// The renderer decides how a symbol is drawn; the definitions only name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Code,
    Database,
    Diagram,
    Cloud,
    Server,
    Shield,
    Briefcase,
    Plug,
    Tools,
    ChartLine,
    Book,
    Edit,
    Folder,
    Layers,
    Globe,
}

impl Icon {
    /// The glyph drawn for this symbol.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Code => "💻",
            Self::Database => "🗄️",
            Self::Diagram => "🧩",
            Self::Cloud => "☁️",
            Self::Server => "🖥️",
            Self::Shield => "🛡️",
            Self::Briefcase => "💼",
            Self::Plug => "🔌",
            Self::Tools => "🔧",
            Self::ChartLine => "📈",
            Self::Book => "📖",
            Self::Edit => "✏️",
            Self::Folder => "📁",
            Self::Layers => "📐",
            Self::Globe => "🌍",
        }
    }
}
