//! Docs sidebar tree.
//!
//! The declarative category/document tree consumed by the external docs
//! renderer. Rendering it is not this crate's job; the tree is defined and
//! checked here so the export contract stays well formed.

use std::collections::HashSet;

use crate::{ConfigError, ConfigResult};

/// One node of the docs sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItem {
    Doc {
        id: &'static str,
        label: &'static str,
    },
    Category {
        label: &'static str,
        items: &'static [&'static str],
    },
}

const TUTORIAL_SIDEBAR: &[SidebarItem] = &[
    SidebarItem::Doc { id: "intro", label: "Introducción" },
    SidebarItem::Doc { id: "quickstart", label: "Inicio Rápido" },
    SidebarItem::Category {
        label: "Fuente de Datos",
        items: &["data-sources/index", "data-sources/sql", "data-sources/nosql", "data-sources/rest-api"],
    },
    SidebarItem::Category {
        label: "Modelado de Datos",
        items: &[
            "data-modeling/index",
            "data-modeling/schemas",
            "data-modeling/relationships",
            "data-modeling/validation",
        ],
    },
    SidebarItem::Category {
        label: "API GraphQL",
        items: &[
            "graphql-api/index",
            "graphql-api/queries",
            "graphql-api/mutations",
            "graphql-api/subscriptions",
        ],
    },
    SidebarItem::Category {
        label: "Servicios HTTP",
        items: &["servicios-http/index", "servicios-http/rest", "servicios-http/webhooks"],
    },
    SidebarItem::Category {
        label: "Autenticación",
        items: &["auth/index", "auth/jwt", "auth/oauth", "auth/roles-permisos"],
    },
    SidebarItem::Category {
        label: "Lógica de Negocio",
        items: &[
            "business-logic/index",
            "business-logic/hooks",
            "business-logic/servicios",
            "business-logic/acciones",
            "business-logic/eventos",
            "business-logic/tareas",
            "business-logic/flujos",
        ],
    },
    SidebarItem::Category {
        label: "Plugins",
        items: &["plugins/index", "plugins/desarrollo", "plugins/marketplace"],
    },
    SidebarItem::Category { label: "Implementación", items: &["deployment/index"] },
    SidebarItem::Category {
        label: "Monitorización",
        items: &[
            "monitoring/index",
            "monitoring/logs",
            "monitoring/metrics",
            "monitoring/alertas",
            "monitoring/dashboard",
        ],
    },
    SidebarItem::Doc { id: "reference", label: "Referencia" },
];

/// The docs sidebar tree, in display order.
pub fn tutorial_sidebar() -> &'static [SidebarItem] {
    TUTORIAL_SIDEBAR
}

/// All doc ids reachable from the tree, in display order.
pub fn doc_ids(items: &[SidebarItem]) -> Vec<&'static str> {
    let mut ids = Vec::new();
    for item in items {
        match item {
            SidebarItem::Doc { id, .. } => ids.push(*id),
            SidebarItem::Category { items, .. } => ids.extend_from_slice(items),
        }
    }
    ids
}

/// Checks the tree for empty categories and duplicate doc ids.
pub fn validate(items: &[SidebarItem]) -> ConfigResult<()> {
    for item in items {
        if let SidebarItem::Category { label, items } = item {
            if items.is_empty() {
                return Err(ConfigError::EmptySidebarCategory((*label).to_string()));
            }
        }
    }
    let mut seen = HashSet::new();
    for id in doc_ids(items) {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateDocId(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_is_well_formed() {
        validate(tutorial_sidebar()).unwrap();
    }

    #[test]
    fn doc_ids_flatten_in_order() {
        let ids = doc_ids(tutorial_sidebar());
        assert_eq!(ids.first(), Some(&"intro"));
        assert_eq!(ids.last(), Some(&"reference"));
        assert!(ids.contains(&"graphql-api/subscriptions"));
        assert!(ids.contains(&"business-logic/flujos"));
    }

    #[test]
    fn empty_category_is_rejected() {
        let tree = [SidebarItem::Category { label: "Vacía", items: &[] }];
        match validate(&tree) {
            Err(ConfigError::EmptySidebarCategory(label)) => assert_eq!(label, "Vacía"),
            other => panic!("expected empty-category error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_doc_id_is_rejected() {
        let tree = [
            SidebarItem::Doc { id: "intro", label: "Introducción" },
            SidebarItem::Category { label: "Más", items: &["intro"] },
        ];
        match validate(&tree) {
            Err(ConfigError::DuplicateDocId(id)) => assert_eq!(id, "intro"),
            other => panic!("expected duplicate-id error, got {other:?}"),
        }
    }
}
