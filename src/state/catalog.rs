use std::collections::HashMap;
use std::fs;
use std::path::Path;

use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Recipe;
use crate::parser::extract_categories;

/// Minimum Jaro-Winkler similarity for a fuzzy title suggestion.
const TITLE_MATCH_THRESHOLD: f64 = 0.7;

/// Resolves recipe ids to recipes.
pub trait RecipeLookup {
    fn recipe(&self, id: &str) -> Option<&Recipe>;
}

impl RecipeLookup for [Recipe] {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.iter().find(|r| r.id == id)
    }
}

impl RecipeLookup for Vec<Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.as_slice().recipe(id)
    }
}

impl RecipeLookup for HashMap<String, Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

/// The recipe collection, in catalog order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl RecipeCatalog {
    /// Build a catalog. A repeated id replaces the earlier recipe in place.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut catalog = Self::default();
        for recipe in recipes {
            match catalog.index.get(&recipe.id) {
                Some(&pos) => catalog.recipes[pos] = recipe,
                None => {
                    catalog.index.insert(recipe.id.clone(), catalog.recipes.len());
                    catalog.recipes.push(recipe);
                }
            }
        }
        catalog
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.index.get(id).map(|&pos| &self.recipes[pos])
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Exact title match, case-insensitive.
    pub fn find_by_title(&self, title: &str) -> Option<&Recipe> {
        let lower = title.trim().to_lowercase();
        self.recipes.iter().find(|r| r.title.to_lowercase() == lower)
    }

    /// Recipes whose title resembles `query`, best match first.
    pub fn suggest_titles(&self, query: &str, limit: usize) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();
        let mut candidates: Vec<(&Recipe, f64)> = self
            .recipes
            .iter()
            .map(|r| (r, jaro_winkler(&r.title.to_lowercase(), &query)))
            .filter(|(_, score)| *score > TITLE_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().take(limit).map(|(r, _)| r).collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeLookup for RecipeCatalog {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

/// Load recipes from a JSON array.
///
/// Recipes without a category take category and subcategory from their id path.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<RecipeCatalog> {
    let content = fs::read_to_string(path)?;
    let mut recipes: Vec<Recipe> = serde_json::from_str(&content)?;

    for recipe in &mut recipes {
        if recipe.category.is_empty() {
            let (category, subcategory) = extract_categories(&recipe.id);
            recipe.category = category;
            if recipe.subcategory.is_empty() {
                recipe.subcategory = subcategory;
            }
        }
    }

    Ok(RecipeCatalog::new(recipes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn recipe(id: &str, title: &str, category: &str) -> Recipe {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "category": category,
        }))
        .unwrap()
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let catalog = RecipeCatalog::new(vec![
            recipe("a", "First", "Mains"),
            recipe("b", "Second", "Soups"),
            recipe("a", "First v2", "Mains"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].title, "First v2");
        assert_eq!(catalog.get("b").unwrap().title, "Second");
    }

    #[test]
    fn test_title_lookup_and_suggestions() {
        let catalog = RecipeCatalog::new(vec![
            recipe("a", "Chicken Tikka Masala", "Mains"),
            recipe("b", "Beef Stew", "Mains"),
        ]);
        assert_eq!(catalog.find_by_title("beef stew").unwrap().id, "b");
        let suggestions = catalog.suggest_titles("chicken tika", 5);
        assert_eq!(suggestions.first().map(|r| r.id.as_str()), Some("a"));
    }

    #[test]
    fn test_load_recipes_derives_categories() {
        let json = r#"[
            {"id": "Recipes/4. Mains/Chicken/Tacos.md", "title": "Tacos", "servings": 4},
            {"id": "Recipes/Soups/Chili.md", "title": "Chili", "category": "Soups", "subcategory": "Beef"}
        ]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_recipes(file.path()).unwrap();
        let tacos = catalog.get("Recipes/4. Mains/Chicken/Tacos.md").unwrap();
        assert_eq!(tacos.category, "Mains");
        assert_eq!(tacos.subcategory, "Chicken");
        assert_eq!(catalog.get("Recipes/Soups/Chili.md").unwrap().subcategory, "Beef");
    }
}
