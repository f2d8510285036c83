use crate::dates::day_name;
use crate::grocery::{group_by_category, group_by_store};
use crate::models::{CookedMeal, GroceryItem, Recipe, RecipeStats, WeeklyPlan};
use crate::planner::{ScoredRecipe, ingredient_overlap};
use crate::state::{RecipeLookup, was_cooked};

fn title_of<'a, L: RecipeLookup + ?Sized>(recipes: &'a L, id: &'a str) -> &'a str {
    recipes.recipe(id).map(|r| r.title.as_str()).unwrap_or(id)
}

/// Widest text in characters, for `{:<width$}` padding.
fn column_width<'a>(texts: impl IntoIterator<Item = &'a str>) -> usize {
    texts.into_iter().map(|t| t.chars().count()).max().unwrap_or(10)
}

/// Display a weekly plan, one line per meal. Meals found in `history`
/// on their planned date are checked off.
///
/// With `explain` non-empty, each dinner is followed by its score breakdown.
pub fn display_weekly_plan<L: RecipeLookup + ?Sized>(
    plan: &WeeklyPlan,
    recipes: &L,
    history: &[CookedMeal],
    explain: &[ScoredRecipe],
) {
    if plan.is_empty() {
        println!("No meals planned for the week of {}.", plan.week_start);
        return;
    }

    println!();
    println!("=== Week of {} ===", plan.week_start);
    println!();

    let max_title_len = column_width(plan.meals.iter().map(|m| title_of(recipes, &m.recipe_id)));

    let mut previous_dinner: Option<&Recipe> = None;

    for meal in &plan.meals {
        let title = title_of(recipes, &meal.recipe_id);
        let kind = if meal.is_leftover {
            format!("{} (leftover)", meal.meal_type)
        } else {
            meal.meal_type.to_string()
        };

        println!(
            "[{}] {:<9} {} | {:<16} {:<width$} - {} servings",
            if was_cooked(history, meal) { "x" } else { " " },
            day_name(meal.planned_date),
            meal.planned_date,
            kind,
            title,
            meal.servings,
            width = max_title_len
        );

        if meal.is_leftover {
            continue;
        }

        let current = recipes.recipe(&meal.recipe_id);
        if let (Some(prev), Some(cur)) = (previous_dinner, current) {
            let shared = ingredient_overlap(prev, cur);
            if !shared.is_empty() {
                println!("{:>32} shares: {}", "", shared.join(", "));
            }
        }
        previous_dinner = current;

        if let Some(scored) = explain.iter().find(|s| s.recipe.id == meal.recipe_id) {
            println!("{:>32} score {:.1}", "", scored.score);
            for reason in &scored.reasons {
                println!("{:>34} {}", "", reason);
            }
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Dinners: {}", plan.dinners().count());
    println!("Leftover lunches: {}", plan.leftovers().count());
    println!();
}

fn item_line(item: &GroceryItem) -> String {
    let amount = match (item.quantity.is_empty(), item.unit.is_empty()) {
        (true, _) => String::new(),
        (false, true) => format!("{} ", item.quantity),
        (false, false) => format!("{} {} ", item.quantity, item.unit),
    };
    format!("  [{}] {}{}", if item.checked { "x" } else { " " }, amount, item.name)
}

/// Display a grocery list grouped by category, or by store.
pub fn display_grocery_list(items: &[GroceryItem], by_store: bool) {
    if items.is_empty() {
        println!("Grocery list: (none)");
        return;
    }

    println!();
    println!("=== Grocery list ({} items) ===", items.len());

    if by_store {
        for (store, members) in group_by_store(items) {
            println!();
            println!("{}:", store);
            for item in members {
                println!("{}  ({})", item_line(item), item.category.label());
            }
        }
    } else {
        for (category, members) in group_by_category(items) {
            println!();
            println!("{}:", category.label());
            for item in members {
                println!("{}", item_line(item));
            }
        }
    }

    println!();
}

/// Display cooking history per recipe.
pub fn display_recipe_stats(rows: &[(&Recipe, RecipeStats)]) {
    if rows.is_empty() {
        println!("No recipes loaded.");
        return;
    }

    let max_title_len = column_width(rows.iter().map(|(r, _)| r.title.as_str()));

    println!();
    println!(
        "{:<width$}  {:>6}  {:<10}  {:>5}",
        "Recipe",
        "Cooked",
        "Last",
        "Days",
        width = max_title_len
    );

    for (recipe, stats) in rows {
        let last = stats
            .last_cooked
            .map(|d| d.to_string())
            .unwrap_or_else(|| "never".to_string());
        let days = stats
            .days_since_last_made
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<width$}  {:>6}  {:<10}  {:>5}",
            recipe.title,
            stats.times_cooked,
            last,
            days,
            width = max_title_len
        );
    }

    println!();
}

/// Display the season and the ingredients at their peak.
pub fn display_season(month: u32, label: &str, peak_keywords: &[&str]) {
    println!();
    println!("=== {} (month {}) ===", label, month);
    if peak_keywords.is_empty() {
        println!("  (nothing at its peak)");
    } else {
        for chunk in peak_keywords.chunks(6) {
            println!("  {}", chunk.join(", "));
        }
    }
    println!();
}
