//! Fixed product table shown on the order page.
//!
//! The order form only accepts product names listed here.

use serde::Serialize;

/// A purchasable board variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: &'static str,
    pub dimensions: &'static str,
    pub handles: &'static str,
    pub thickness: &'static str,
    /// Asset path relative to the site root, see `SiteConfig::image_path`.
    pub image: &'static str,
}

impl CatalogEntry {
    /// Text of the `<option>` offering this entry in the product select.
    pub fn option_label(&self) -> String {
        format!("{} ({}, {})", self.name, self.dimensions, self.handles)
    }
}

pub const CATALOG: [CatalogEntry; 2] = [
    CatalogEntry {
        id: 1,
        name: "Planche 120cm",
        dimensions: "120cm x 25cm",
        handles: "1 poignée",
        thickness: "2,5cm",
        image: "/images/Planche_120cm_1.jpeg",
    },
    CatalogEntry {
        id: 2,
        name: "Planche 100cm",
        dimensions: "100cm x 40cm",
        handles: "2 poignées",
        thickness: "2,5cm",
        image: "/images/Planche_100cm_1.jpeg",
    },
];

/// Characteristics shared by every board.
pub const COMMON_FEATURES: [&str; 5] = [
    "Bois de hêtre français",
    "Fabrication artisanale en Charente",
    "Finition à l'huile de pépins de raisin",
    "Food contact compliance",
    "Rainure pour évacuer le jus",
];

pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Looks up an entry by its exact display name.
pub fn find_by_name(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_declared_order() {
        let names: Vec<_> = catalog().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Planche 120cm", "Planche 100cm"]);
    }

    #[test]
    fn find_by_name_is_exact() {
        assert_eq!(find_by_name("Planche 100cm").map(|e| e.id), Some(2));
        assert!(find_by_name("planche 100cm").is_none());
        assert!(find_by_name("").is_none());
    }

    #[test]
    fn option_label_lists_dimensions_and_handles() {
        assert_eq!(
            CATALOG[0].option_label(),
            "Planche 120cm (120cm x 25cm, 1 poignée)"
        );
        assert_eq!(
            CATALOG[1].option_label(),
            "Planche 100cm (100cm x 40cm, 2 poignées)"
        );
    }
}
