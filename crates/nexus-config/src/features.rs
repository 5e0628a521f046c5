//! Homepage feature list definition.

use crate::Icon;

/// A single marketing feature card: title, icon symbol, description copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

const FEATURE_ENTRIES: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Fácil Creación de Contenido",
        icon: Icon::Edit,
        description: "Crea contenido rápidamente con nuestra interfaz intuitiva. \
                      Publica páginas, documentos y blogs con solo unos clics.",
    },
    FeatureEntry {
        title: "Organización Perfecta",
        icon: Icon::Folder,
        description: "Estructura tu contenido de manera lógica y accesible. \
                      Mantén todo organizado en secciones y categorías claras.",
    },
    FeatureEntry {
        title: "Diseño Adaptable",
        icon: Icon::Layers,
        description: "Tu sitio se verá espectacular en cualquier dispositivo. \
                      Nuestro diseño responde automáticamente a diferentes tamaños de pantalla.",
    },
    FeatureEntry {
        title: "Implementación Global",
        icon: Icon::Globe,
        description: "Publica tu sitio a nivel mundial con solo unos pasos. \
                      Opciones de alojamiento flexibles para adaptarse a tus necesidades.",
    },
    FeatureEntry {
        title: "Personalización Total",
        icon: Icon::Tools,
        description: "Adapta cada aspecto de tu sitio con opciones avanzadas. \
                      Colores, fuentes, layouts y mucho más a tu disposición.",
    },
    FeatureEntry {
        title: "SEO Optimizado",
        icon: Icon::ChartLine,
        description: "Mejora la visibilidad de tu contenido en los buscadores. \
                      Herramientas integradas para optimizar tus páginas.",
    },
];

/// The homepage feature cards, in display order.
pub fn feature_entries() -> &'static [FeatureEntry] {
    FEATURE_ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_entries_in_order() {
        let entries = feature_entries();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].title, "Fácil Creación de Contenido");
        assert_eq!(entries[5].title, "SEO Optimizado");
    }

    #[test]
    fn descriptions_are_copy_text() {
        for entry in feature_entries() {
            assert!(!entry.title.is_empty());
            assert!(entry.description.len() > 40, "description too short for {}", entry.title);
        }
    }
}
