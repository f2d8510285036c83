use std::collections::HashMap;

use tracing::debug;

use crate::grocery::lookup::{CategoryLookup, StoreLookup};
use crate::grocery::quantity::combine_quantities;
use crate::models::{GroceryCategory, GroceryItem, Recipe};

/// Sections whose heading contains this word are optional and never shopped for.
const OPTIONAL_SECTION_MARKER: &str = "sides";

fn is_optional_section(heading: &str) -> bool {
    heading.to_lowercase().contains(OPTIONAL_SECTION_MARKER)
}

/// Build a consolidated shopping list for a set of recipes.
///
/// Ingredients are merged by lowercase name. The first occurrence fixes the
/// display name, unit, category, and store; later ones add to the quantity
/// and record their recipe title. Output is ordered by category, then name.
pub fn generate_grocery_list<C, S>(recipes: &[&Recipe], categories: &C, stores: &S) -> Vec<GroceryItem>
where
    C: CategoryLookup + ?Sized,
    S: StoreLookup + ?Sized,
{
    let mut order: Vec<String> = Vec::new();
    let mut consolidated: HashMap<String, GroceryItem> = HashMap::new();

    for recipe in recipes {
        for section in &recipe.ingredients {
            if is_optional_section(&section.heading) {
                debug!(recipe = %recipe.title, section = %section.heading, "skipping optional section");
                continue;
            }

            for item in &section.items {
                let key = item.key();
                let quantity = item.quantity.as_deref().unwrap_or("");
                let unit = item.unit.as_deref().unwrap_or("");

                match consolidated.get_mut(&key) {
                    Some(existing) => {
                        existing.quantity =
                            combine_quantities(&existing.quantity, quantity, &existing.unit, unit);
                        if !existing.from_recipes.contains(&recipe.title) {
                            existing.from_recipes.push(recipe.title.clone());
                        }
                    }
                    None => {
                        order.push(key.clone());
                        consolidated.insert(
                            key,
                            GroceryItem {
                                name: item.name.clone(),
                                quantity: quantity.to_string(),
                                unit: unit.to_string(),
                                category: categories.category_for(&item.name),
                                store: stores.store_for(&item.name),
                                from_recipes: vec![recipe.title.clone()],
                                checked: false,
                            },
                        );
                    }
                }
            }
        }
    }

    let mut items: Vec<GroceryItem> = order
        .iter()
        .filter_map(|key| consolidated.remove(key))
        .collect();

    items.sort_by(|a, b| {
        a.category
            .order()
            .cmp(&b.category.order())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });

    debug!(recipes = recipes.len(), items = items.len(), "consolidated grocery list");
    items
}

/// Partition a consolidated list by category, groups in first-seen order.
pub fn group_by_category(items: &[GroceryItem]) -> Vec<(GroceryCategory, Vec<&GroceryItem>)> {
    group_by(items, |item| item.category)
}

/// Partition a consolidated list by store, groups in first-seen order.
pub fn group_by_store(items: &[GroceryItem]) -> Vec<(String, Vec<&GroceryItem>)> {
    group_by(items, |item| item.store.clone())
}

fn group_by<K, F>(items: &[GroceryItem], key_of: F) -> Vec<(K, Vec<&GroceryItem>)>
where
    K: PartialEq,
    F: Fn(&GroceryItem) -> K,
{
    let mut groups: Vec<(K, Vec<&GroceryItem>)> = Vec::new();
    for item in items {
        let key = key_of(item);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::lookup::HeuristicLookup;
    use crate::models::{IngredientSection, IngredientItem};
    use crate::parser::parse_ingredient_line;

    fn recipe(title: &str, sections: &[(&str, Vec<&str>)]) -> Recipe {
        Recipe {
            id: format!("Recipes/Mains/{}.md", title),
            title: title.to_string(),
            category: "Mains".to_string(),
            subcategory: String::new(),
            ingredients: sections
                .iter()
                .map(|(heading, lines)| IngredientSection {
                    heading: heading.to_string(),
                    items: lines.iter().map(|l| parse_ingredient_line(l)).collect::<Vec<IngredientItem>>(),
                })
                .collect(),
            servings: 4.0,
            calories_per_serving: 0.0,
            net_carbs: 0.0,
            protein: 0.0,
        }
    }

    #[test]
    fn test_merges_same_ingredient_across_recipes() {
        let a = recipe("Tacos", &[("Main", vec!["2 cups rice", "1 lb chicken thighs"])]);
        let b = recipe("Bowls", &[("Main", vec!["1 cup rice", "3 eggs"])]);

        let items = generate_grocery_list(&[&a, &b], &HeuristicLookup, &HeuristicLookup);
        let rice = items.iter().find(|i| i.name == "rice").unwrap();
        assert_eq!(rice.quantity, "2 cups + 1 cup");
        assert_eq!(rice.from_recipes, vec!["Tacos", "Bowls"]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_same_unit_sums() {
        let a = recipe("A", &[("Main", vec!["2 cups broth"])]);
        let b = recipe("B", &[("Main", vec!["1 cups broth"])]);
        let items = generate_grocery_list(&[&a, &b], &HeuristicLookup, &HeuristicLookup);
        assert_eq!(items[0].quantity, "3");
        assert_eq!(items[0].unit, "cups");
    }

    #[test]
    fn test_skips_sides_sections() {
        let a = recipe(
            "Steak Night",
            &[("Main", vec!["1 lb steak"]), ("Sides (if applicable)", vec!["1 baguette"])],
        );
        let items = generate_grocery_list(&[&a], &HeuristicLookup, &HeuristicLookup);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "steak");
    }

    #[test]
    fn test_recipe_title_recorded_once() {
        let a = recipe("Chili", &[("Main", vec!["1 onion"]), ("Topping", vec!["1 onion"])]);
        let items = generate_grocery_list(&[&a], &HeuristicLookup, &HeuristicLookup);
        assert_eq!(items[0].quantity, "2");
        assert_eq!(items[0].from_recipes, vec!["Chili"]);
    }

    #[test]
    fn test_sorted_by_category_then_name() {
        let a = recipe(
            "Mix",
            &[("Main", vec!["1 cup rice", "2 zucchini", "1 lb pork", "1 avocado", "1 cup milk"])],
        );
        let items = generate_grocery_list(&[&a], &HeuristicLookup, &HeuristicLookup);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["avocado", "zucchini", "pork", "milk", "rice"]);
    }

    #[test]
    fn test_grouping_preserves_order() {
        let a = recipe("Mix", &[("Main", vec!["1 avocado", "1 lb pork", "2 zucchini"])]);
        let items = generate_grocery_list(&[&a], &HeuristicLookup, &HeuristicLookup);

        let by_category = group_by_category(&items);
        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category[0].0, GroceryCategory::Produce);
        assert_eq!(by_category[0].1.len(), 2);

        let by_store = group_by_store(&items);
        assert_eq!(by_store.len(), 1);
        assert_eq!(by_store[0].0, "Any");
        assert_eq!(by_store[0].1.len(), 3);
    }
}
