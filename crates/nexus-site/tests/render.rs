//! Server-side render checks for the site components and page shells.

use leptos::ssr::render_to_string;
use leptos::*;
use leptos_meta::provide_meta_context;

use nexus_config::{feature_entries, menu_entries, SiteConfig};
use nexus_site::components::{HomepageFeatures, SidebarMenu};
use nexus_site::pages::{HomePage, LoginPage, SignupPage};

fn render_with_site<F, N>(f: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    render_to_string(move || {
        provide_meta_context();
        provide_context(SiteConfig::nexusdata());
        f().into_view()
    })
    .to_string()
}

/// Positions of each needle in the haystack, asserting all are present.
fn positions(html: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("missing {needle:?} in rendered output"))
        })
        .collect()
}

#[test]
fn sidebar_menu_renders_every_entry_in_order() {
    let html = render_with_site(|| view! { <SidebarMenu/> });

    let link_count = html.matches("<a href=\"/docs/").count();
    assert_eq!(link_count, menu_entries().len());

    let hrefs: Vec<String> = menu_entries()
        .iter()
        .map(|entry| format!("href=\"{}\"", entry.path))
        .collect();
    let offsets = positions(&html, &hrefs);
    assert!(offsets.windows(2).all(|w| w[0] < w[1]), "menu links out of order");

    for entry in menu_entries() {
        assert!(html.contains(entry.label), "missing label {}", entry.label);
    }
}

#[test]
fn sidebar_menu_last_link_is_reference() {
    let html = render_with_site(|| view! { <SidebarMenu/> });
    let reference = html.find("href=\"/docs/reference\"").expect("reference link");
    for entry in menu_entries() {
        let offset = html.find(&format!("href=\"{}\"", entry.path)).unwrap();
        assert!(offset <= reference, "{} rendered after the last entry", entry.path);
    }
    assert!(html.contains("Referencia"));
}

#[test]
fn feature_grid_renders_six_cards_in_order() {
    let html = render_with_site(|| view! { <HomepageFeatures/> });

    let titles: Vec<String> = feature_entries()
        .iter()
        .map(|entry| entry.title.to_string())
        .collect();
    assert_eq!(titles.len(), 6);
    assert_eq!(titles[0], "Fácil Creación de Contenido");

    let offsets = positions(&html, &titles);
    assert!(offsets.windows(2).all(|w| w[0] < w[1]), "feature cards out of order");

    for entry in feature_entries() {
        assert!(html.contains(entry.description), "missing description for {}", entry.title);
    }
}

#[test]
fn home_page_shows_title_and_tagline() {
    let html = render_with_site(|| view! { <HomePage/> });
    let site = SiteConfig::nexusdata();
    assert!(html.contains(site.title));
    assert!(html.contains(site.tagline));
    assert!(html.contains("Características Principales"));
}

#[test]
fn login_form_is_a_local_no_op() {
    let html = render_with_site(|| view! { <LoginPage/> });

    assert!(html.contains("Log in to NexusData"));
    assert!(html.contains("Email"));
    assert!(html.contains("Password"));
    // Password field starts masked.
    assert!(html.contains("type=\"password\""));
    // Submitting navigates nowhere: the form has no action target.
    assert!(!html.contains(" action="), "login form must not post anywhere");
    assert!(html.contains("href=\"/signup\""));
}

#[test]
fn signup_form_renders_tabs_and_profile_fields() {
    let html = render_with_site(|| view! { <SignupPage/> });

    assert!(html.contains("Sign up for NexusData"));
    assert!(html.contains("Work Email"));
    assert!(html.contains("Personal Use"));
    assert!(html.contains("Confirm Password"));
    assert!(html.contains("First Name"));
    assert!(html.contains("Organization"));
    // Both password fields start masked.
    assert_eq!(html.matches("type=\"password\"").count(), 2);
    assert!(!html.contains(" action="), "signup form must not post anywhere");
}
