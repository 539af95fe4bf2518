//! Enumerable languages and themes offered by an engine

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable identifier stored in block data (e.g. "javascript")
    pub id: String,
    /// Label for selection lists (e.g. "JavaScript")
    pub display_name: String,
}

impl CatalogEntry {
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Source of the language/theme selection lists
pub trait Catalog {
    fn languages(&self) -> Vec<CatalogEntry>;
    fn themes(&self) -> Vec<CatalogEntry>;
}

/// Fixed lists, for hosts that know their catalog up front
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    pub languages: Vec<CatalogEntry>,
    pub themes: Vec<CatalogEntry>,
}

impl Catalog for StaticCatalog {
    fn languages(&self) -> Vec<CatalogEntry> {
        self.languages.clone()
    }

    fn themes(&self) -> Vec<CatalogEntry> {
        self.themes.clone()
    }
}
