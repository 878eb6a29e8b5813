use crate::builtin::{builtin_categories, builtin_definitions};
use crate::{BlockDefinition, CatalogError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Category id that disables category filtering
pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCategory {
    pub id: String,
    pub name: String,
}

impl BlockCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Library filter as driven by the search box and category buttons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    fn matches(&self, definition: &BlockDefinition) -> bool {
        let category_ok = match self.category.as_deref() {
            None | Some(ALL_CATEGORY) => true,
            Some(category) => definition.category == category,
        };

        let search_ok = match self.search.as_deref() {
            None => true,
            Some(query) => definition.matches_search(query),
        };

        category_ok && search_ok
    }
}

/// Immutable registry of block definitions.
///
/// Constructed once and shared (usually behind an `Arc`) by every session
/// and renderer that needs it.
#[derive(Debug, Clone)]
pub struct BlockCatalog {
    definitions: Vec<BlockDefinition>,
    categories: Vec<BlockCategory>,
    by_id: HashMap<String, usize>,
    by_type: HashMap<String, usize>,
}

impl BlockCatalog {
    /// Catalog with every block type the editor ships with
    pub fn builtin() -> Self {
        // Builtin data is covered by tests; a failure here is a build defect
        match Self::new(builtin_definitions()) {
            Ok(catalog) => catalog,
            Err(e) => panic!("builtin block catalog is invalid: {}", e),
        }
    }

    /// Validate and index a definition set
    pub fn new(definitions: Vec<BlockDefinition>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::new();
        let mut by_type = HashMap::new();

        for (index, def) in definitions.iter().enumerate() {
            if def.id.is_empty() {
                return Err(CatalogError::MissingField {
                    id: def.name.clone(),
                    field: "id",
                });
            }
            if def.block_type.is_empty() {
                return Err(CatalogError::MissingField {
                    id: def.id.clone(),
                    field: "type",
                });
            }
            if def.name.is_empty() {
                return Err(CatalogError::MissingField {
                    id: def.id.clone(),
                    field: "name",
                });
            }
            if def.category.is_empty() {
                return Err(CatalogError::MissingField {
                    id: def.id.clone(),
                    field: "category",
                });
            }
            if def.default_props.is_empty() {
                return Err(CatalogError::EmptyDefaultProps { id: def.id.clone() });
            }
            if by_id.insert(def.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
            if by_type.insert(def.block_type.clone(), index).is_some() {
                return Err(CatalogError::DuplicateType(def.block_type.clone()));
            }
        }

        let mut categories = builtin_categories();
        for def in &definitions {
            if !categories.iter().any(|c| c.id == def.category) {
                categories.push(BlockCategory::new(def.category.clone(), def.category.clone()));
            }
        }

        debug!(definitions = definitions.len(), "Block catalog constructed");

        Ok(Self {
            definitions,
            categories,
            by_id,
            by_type,
        })
    }

    /// Load a catalog from a JSON array of definitions
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<BlockDefinition> = serde_json::from_str(json)?;
        Self::new(definitions)
    }

    /// Definitions in catalog order, optionally filtered
    pub fn list_definitions(&self, filter: Option<&CatalogFilter>) -> Vec<&BlockDefinition> {
        self.definitions
            .iter()
            .filter(|def| filter.map_or(true, |f| f.matches(def)))
            .collect()
    }

    /// Split a listing into (popular, regular) the way the library panel shows it
    pub fn partition_popular<'a>(
        definitions: Vec<&'a BlockDefinition>,
    ) -> (Vec<&'a BlockDefinition>, Vec<&'a BlockDefinition>) {
        definitions.into_iter().partition(|def| def.is_popular)
    }

    pub fn definition(&self, id: &str) -> Option<&BlockDefinition> {
        self.by_id.get(id).map(|&i| &self.definitions[i])
    }

    pub fn definition_for_type(&self, block_type: &str) -> Option<&BlockDefinition> {
        self.by_type.get(block_type).map(|&i| &self.definitions[i])
    }

    pub fn categories(&self) -> &[BlockCategory] {
        &self.categories
    }

    pub fn contains_type(&self, block_type: &str) -> bool {
        self.by_type.contains_key(block_type)
    }

    /// Whether `key` is a prop the given block type understands.
    ///
    /// Unknown types recognize nothing.
    pub fn recognizes(&self, block_type: &str, key: &str) -> bool {
        self.definition_for_type(block_type)
            .map_or(false, |def| def.recognizes(key))
    }

    /// Default plus optional prop keys of a type, empty for unknown types
    pub fn recognized_keys(&self, block_type: &str) -> Vec<&str> {
        self.definition_for_type(block_type)
            .map(|def| def.recognized_keys().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for BlockCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockKind;
    use serde_json::json;

    #[test]
    fn test_builtin_catalog_covers_every_kind() {
        let catalog = BlockCatalog::builtin();
        for kind in BlockKind::ALL {
            let def = catalog
                .definition_for_type(kind.as_str())
                .unwrap_or_else(|| panic!("missing definition for {}", kind));
            assert!(!def.default_props.is_empty());
        }
        assert_eq!(catalog.len(), BlockKind::ALL.len());
    }

    #[test]
    fn test_all_category_bypasses_filter() {
        let catalog = BlockCatalog::builtin();
        let filter = CatalogFilter::new().category("all");
        assert_eq!(catalog.list_definitions(Some(&filter)).len(), catalog.len());
        assert_eq!(catalog.list_definitions(None).len(), catalog.len());
    }

    #[test]
    fn test_category_is_exact_match() {
        let catalog = BlockCatalog::builtin();
        let filter = CatalogFilter::new().category("media");
        let types: Vec<_> = catalog
            .list_definitions(Some(&filter))
            .iter()
            .map(|d| d.block_type.as_str())
            .collect();
        assert_eq!(types, vec!["gallery", "video", "image"]);

        let filter = CatalogFilter::new().category("Media");
        assert!(catalog.list_definitions(Some(&filter)).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let catalog = BlockCatalog::builtin();
        let filter = CatalogFilter::new().category("forms").search("EMAIL");
        let ids: Vec<_> = catalog
            .list_definitions(Some(&filter))
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["newsletter-signup"]);
    }

    #[test]
    fn test_partition_popular_keeps_order() {
        let catalog = BlockCatalog::builtin();
        let (popular, regular) = BlockCatalog::partition_popular(catalog.list_definitions(None));
        assert_eq!(popular[0].id, "hero-section");
        assert!(popular.iter().all(|d| d.is_popular));
        assert!(regular.iter().all(|d| !d.is_popular));
    }

    #[test]
    fn test_rejects_empty_default_props() {
        let def = BlockDefinition::new("x", BlockKind::Spacer, "layout", "X", "", json!({}));
        assert!(matches!(
            BlockCatalog::new(vec![def]),
            Err(CatalogError::EmptyDefaultProps { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_types() {
        let a = BlockDefinition::new("a", BlockKind::Spacer, "layout", "A", "", json!({ "height": "small" }));
        let b = BlockDefinition::new("b", BlockKind::Spacer, "layout", "B", "", json!({ "height": "large" }));
        assert!(matches!(
            BlockCatalog::new(vec![a, b]),
            Err(CatalogError::DuplicateType(t)) if t == "spacer"
        ));
    }

    #[test]
    fn test_reduced_catalog_from_json() {
        let json = r#"[
            { "id": "hero-section", "type": "hero", "category": "content", "name": "Hero",
              "defaultProps": { "title": "Hi" } },
            { "id": "promo", "type": "promo", "category": "seasonal", "name": "Promo",
              "defaultProps": { "headline": "Sale" } }
        ]"#;

        let catalog = BlockCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains_type("promo"));
        assert!(catalog.categories().iter().any(|c| c.id == "seasonal"));
        assert!(catalog.recognizes("hero", "title"));
        assert!(!catalog.recognizes("hero", "subtitle"));
        assert!(!catalog.recognizes("missing", "title"));
    }
}
