//! Resolved site configuration.
//!
//! The declarative record the external static-site build tool consumes:
//! title, tagline, deployment urls, locales, navbar and footer entries, and
//! preset options. The page shells only read `title` and `tagline` at render
//! time; everything else exists for the export contract.

use chrono::{Datelike, Utc};
use serde::Serialize;

use crate::{ConfigError, ConfigResult};

/// Which side of the navbar an item is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    Left,
    Right,
}

/// A navbar entry. Internal links use `to`, external links use `href`.
#[derive(Debug, Clone, Serialize)]
pub struct NavbarItem {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
    pub position: NavbarPosition,
    #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<&'static str>,
}

impl NavbarItem {
    pub fn url(&self) -> &'static str {
        self.to.or(self.href).unwrap_or("#")
    }

    pub fn is_external(&self) -> bool {
        self.href.is_some()
    }
}

/// A single footer link.
#[derive(Debug, Clone, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<&'static str>,
}

impl FooterLink {
    pub fn url(&self) -> &'static str {
        self.to.or(self.href).unwrap_or("#")
    }
}

/// A titled column of footer links.
#[derive(Debug, Clone, Serialize)]
pub struct FooterLinkGroup {
    pub title: &'static str,
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub default_locale: &'static str,
    pub locales: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsOptions {
    pub sidebar_path: &'static str,
    pub edit_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogOptions {
    pub show_reading_time: bool,
    pub edit_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    pub custom_css: &'static str,
}

/// Options for one build-tool preset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetOptions {
    pub name: &'static str,
    pub docs: DocsOptions,
    pub blog: BlogOptions,
    pub theme: ThemeOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoConfig {
    pub alt: &'static str,
    pub src: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarConfig {
    pub title: &'static str,
    pub logo: LogoConfig,
    pub items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    pub style: &'static str,
    pub links: Vec<FooterLinkGroup>,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorModeConfig {
    pub default_mode: &'static str,
    pub disable_switch: bool,
    pub respect_prefers_color_scheme: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub image: &'static str,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    pub color_mode: ColorModeConfig,
}

/// The resolved site configuration object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: &'static str,
    pub tagline: &'static str,
    pub favicon: &'static str,
    pub url: &'static str,
    pub base_url: &'static str,
    pub organization_name: &'static str,
    pub project_name: &'static str,
    pub i18n: I18nConfig,
    pub presets: Vec<PresetOptions>,
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// The canonical configuration for the NexusData documentation site.
    pub fn nexusdata() -> Self {
        Self {
            title: "NexusData API",
            tagline: "La plataforma definitiva para desarrollo de APIs modernas",
            favicon: "img/favicon.ico",
            url: "https://mbescalante.github.io",
            base_url: "/nexusdata/",
            organization_name: "mbescalante",
            project_name: "nexusdata",
            i18n: I18nConfig { default_locale: "es", locales: vec!["es", "en"] },
            presets: vec![PresetOptions {
                name: "classic",
                docs: DocsOptions {
                    sidebar_path: "./sidebars.js",
                    edit_url: "https://github.com/mbescalante/nexusdata/edit/main/",
                },
                blog: BlogOptions {
                    show_reading_time: true,
                    edit_url: "https://github.com/mbescalante/nexusdata/edit/main/blog/",
                },
                theme: ThemeOptions { custom_css: "./src/css/custom.css" },
            }],
            theme_config: ThemeConfig {
                image: "img/nexusdata-social-card.jpg",
                navbar: NavbarConfig {
                    title: "NexusData API",
                    logo: LogoConfig { alt: "NexusData API Logo", src: "img/logo.svg" },
                    items: vec![
                        NavbarItem {
                            label: "Documentación",
                            to: Some("/docs/intro"),
                            href: None,
                            position: NavbarPosition::Left,
                            class_name: None,
                        },
                        NavbarItem {
                            label: "Inicio Rápido",
                            to: Some("/docs/quickstart"),
                            href: None,
                            position: NavbarPosition::Left,
                            class_name: None,
                        },
                        NavbarItem {
                            label: "Blog",
                            to: Some("/blog"),
                            href: None,
                            position: NavbarPosition::Left,
                            class_name: None,
                        },
                        NavbarItem {
                            label: "GitHub",
                            to: None,
                            href: Some("https://github.com/mbescalante/nexusdata"),
                            position: NavbarPosition::Right,
                            class_name: None,
                        },
                        NavbarItem {
                            label: "Login",
                            to: Some("/login"),
                            href: None,
                            position: NavbarPosition::Right,
                            class_name: Some("navbar-login-button"),
                        },
                        NavbarItem {
                            label: "Registrarse",
                            to: Some("/signup"),
                            href: None,
                            position: NavbarPosition::Right,
                            class_name: Some("navbar-signup-button button button--primary"),
                        },
                    ],
                },
                footer: FooterConfig {
                    style: "dark",
                    links: vec![
                        FooterLinkGroup {
                            title: "Docs",
                            items: vec![
                                FooterLink { label: "Documentación", to: Some("/docs/intro"), href: None },
                                FooterLink { label: "Inicio Rápido", to: Some("/docs/quickstart"), href: None },
                                FooterLink { label: "API Referencias", to: Some("/docs/api"), href: None },
                            ],
                        },
                        FooterLinkGroup {
                            title: "Comunidad",
                            items: vec![
                                FooterLink {
                                    label: "Discord",
                                    to: None,
                                    href: Some("https://discord.gg/nexusdata"),
                                },
                                FooterLink {
                                    label: "Twitter",
                                    to: None,
                                    href: Some("https://twitter.com/nexusdata"),
                                },
                                FooterLink {
                                    label: "Stack Overflow",
                                    to: None,
                                    href: Some("https://stackoverflow.com/questions/tagged/nexusdata"),
                                },
                            ],
                        },
                        FooterLinkGroup {
                            title: "Más",
                            items: vec![
                                FooterLink { label: "Blog", to: Some("/blog"), href: None },
                                FooterLink {
                                    label: "GitHub",
                                    to: None,
                                    href: Some("https://github.com/mbescalante/nexusdata"),
                                },
                            ],
                        },
                    ],
                    copyright: format!(
                        "Copyright © {} NexusData. Todos los derechos reservados.",
                        Utc::now().year()
                    ),
                },
                color_mode: ColorModeConfig {
                    default_mode: "light",
                    disable_switch: false,
                    respect_prefers_color_scheme: true,
                },
            },
        }
    }

    /// Navbar items anchored to the given side, in definition order.
    pub fn navbar_items(&self, position: NavbarPosition) -> Vec<NavbarItem> {
        self.theme_config
            .navbar
            .items
            .iter()
            .filter(|item| item.position == position)
            .cloned()
            .collect()
    }

    /// Structural checks on the record before it is handed to the build tool.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        if self.url.ends_with('/') {
            return Err(ConfigError::TrailingSlash(self.url.to_string()));
        }
        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::MalformedBaseUrl(self.base_url.to_string()));
        }
        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            return Err(ConfigError::UnknownDefaultLocale(self.i18n.default_locale.to_string()));
        }
        for item in &self.theme_config.navbar.items {
            if item.to.is_none() && item.href.is_none() {
                return Err(ConfigError::MissingLinkTarget(item.label.to_string()));
            }
        }
        for group in &self.theme_config.footer.links {
            for link in &group.items {
                if link.to.is_none() && link.href.is_none() {
                    return Err(ConfigError::MissingLinkTarget(link.label.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Serializes the record into the build tool's expected export shape.
    pub fn to_export_json(&self) -> ConfigResult<serde_json::Value> {
        self.validate()?;
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_config_is_valid() {
        SiteConfig::nexusdata().validate().unwrap();
    }

    #[test]
    fn export_carries_contract_fields() {
        let json = SiteConfig::nexusdata().to_export_json().unwrap();
        for key in ["title", "tagline", "url", "baseUrl", "i18n", "presets", "themeConfig"] {
            assert!(json.get(key).is_some(), "missing contract key {key}");
        }
        assert_eq!(json["i18n"]["defaultLocale"], "es");
        assert_eq!(json["i18n"]["locales"], serde_json::json!(["es", "en"]));
        assert_eq!(json["themeConfig"]["footer"]["style"], "dark");
    }

    #[test]
    fn navbar_items_split_by_position() {
        let site = SiteConfig::nexusdata();
        let left = site.navbar_items(NavbarPosition::Left);
        let right = site.navbar_items(NavbarPosition::Right);
        assert_eq!(left.len() + right.len(), site.theme_config.navbar.items.len());
        assert_eq!(right.last().unwrap().label, "Registrarse");
        assert_eq!(right.last().unwrap().url(), "/signup");
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let mut site = SiteConfig::nexusdata();
        site.base_url = "nexusdata/";
        match site.validate() {
            Err(ConfigError::MalformedBaseUrl(value)) => assert_eq!(value, "nexusdata/"),
            other => panic!("expected base-url error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_default_locale_is_rejected() {
        let mut site = SiteConfig::nexusdata();
        site.i18n.default_locale = "fr";
        assert!(matches!(site.validate(), Err(ConfigError::UnknownDefaultLocale(_))));
    }

    #[test]
    fn target_less_navbar_item_is_rejected() {
        let mut site = SiteConfig::nexusdata();
        site.theme_config.navbar.items.push(NavbarItem {
            label: "Huérfano",
            to: None,
            href: None,
            position: NavbarPosition::Left,
            class_name: None,
        });
        assert!(matches!(site.validate(), Err(ConfigError::MissingLinkTarget(_))));
    }
}
