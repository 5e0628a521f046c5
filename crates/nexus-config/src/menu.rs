//! Sidebar menu definition.
//!
//! The ordered list of documentation sections shown by the homepage sidebar
//! menu. The renderer preserves this order exactly.

use crate::Icon;

/// A single sidebar menu link: target path, display label, icon symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

const MENU_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry { path: "/docs/intro", label: "Introducción", icon: Icon::Home },
    NavigationEntry { path: "/docs/quickstart", label: "Inicio Rápido", icon: Icon::Code },
    NavigationEntry { path: "/docs/data-sources", label: "Fuentes de Datos", icon: Icon::Database },
    NavigationEntry { path: "/docs/data-modeling", label: "Modelado de Datos", icon: Icon::Diagram },
    NavigationEntry { path: "/docs/graphql-api", label: "API GraphQL", icon: Icon::Cloud },
    NavigationEntry { path: "/docs/servicios-http", label: "Servicios HTTP", icon: Icon::Server },
    NavigationEntry { path: "/docs/auth", label: "Autenticación", icon: Icon::Shield },
    NavigationEntry { path: "/docs/business-logic", label: "Lógica de Negocio", icon: Icon::Briefcase },
    NavigationEntry { path: "/docs/plugins", label: "Plugins", icon: Icon::Plug },
    NavigationEntry { path: "/docs/deployment", label: "Implementación", icon: Icon::Tools },
    NavigationEntry { path: "/docs/monitoring", label: "Monitorización", icon: Icon::ChartLine },
    NavigationEntry { path: "/docs/reference", label: "Referencia", icon: Icon::Book },
];

/// The sidebar menu entries, in display order.
pub fn menu_entries() -> &'static [NavigationEntry] {
    MENU_ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_entries_in_order() {
        let entries = menu_entries();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].path, "/docs/intro");
        assert_eq!(entries[0].label, "Introducción");
    }

    #[test]
    fn last_entry_is_reference() {
        let last = menu_entries().last().unwrap();
        assert_eq!(last.path, "/docs/reference");
        assert_eq!(last.label, "Referencia");
    }

    #[test]
    fn all_entries_target_docs() {
        for entry in menu_entries() {
            assert!(entry.path.starts_with("/docs/"), "unexpected path {}", entry.path);
            assert!(!entry.label.is_empty());
        }
    }
}
