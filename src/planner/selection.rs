use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Utc};
use rand::Rng;
use tracing::debug;

use crate::dates::{add_days, monday_of};
use crate::error::{PlannerError, Result};
use crate::models::{CookedMeal, PlannedMeal, Recipe, RecipeStats, WeeklyPlan};
use crate::planner::constants::{MAX_PER_CATEGORY, MAX_PER_SUBCATEGORY};
use crate::planner::leftovers::derive_leftovers;
use crate::planner::scoring::{ScoredRecipe, score_recipe};
use crate::seasonal::{IngredientMatcher, SeasonalOracle};
use crate::state::all_recipe_stats;

/// Parameters for one plan generation.
#[derive(Debug, Clone)]
pub struct PlanRequest<'a> {
    /// Dinners to select.
    pub count: usize,
    /// Eligible recipe categories, matched case-insensitively.
    pub plan_categories: &'a [String],
    /// Any date in the target week; dinners start on its Monday.
    pub week_of: NaiveDate,
    /// Reference date for days-since-last-made.
    pub today: NaiveDate,
    /// Month (1-12) used for seasonality.
    pub month: u32,
    pub leftover_lunches: bool,
}

/// A generated plan and the scored recipes behind its dinners, in plan order.
#[derive(Debug)]
pub struct PlanOutcome<'a> {
    pub plan: WeeklyPlan,
    pub selected: Vec<ScoredRecipe<'a>>,
}

/// Names of `b`'s ingredients that also appear in `a`, case-insensitive.
pub fn ingredient_overlap(a: &Recipe, b: &Recipe) -> Vec<String> {
    let a_keys = a.ingredient_keys();
    b.items()
        .filter(|item| a_keys.contains(&item.key()))
        .map(|item| item.name.clone())
        .collect()
}

/// Greedy diversity-capped top-`count` selection.
///
/// Sorts by score (stable, so ties keep input order), takes recipes while
/// no subcategory exceeds [`MAX_PER_SUBCATEGORY`] and no category exceeds
/// [`MAX_PER_CATEGORY`], then backfills ignoring the caps if short.
pub fn select_recipes<'a>(mut scored: Vec<ScoredRecipe<'a>>, count: usize) -> Vec<ScoredRecipe<'a>> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut taken = vec![false; scored.len()];
    let mut picked: Vec<usize> = Vec::new();
    let mut per_subcategory: HashMap<&str, usize> = HashMap::new();
    let mut per_category: HashMap<&str, usize> = HashMap::new();

    for (i, candidate) in scored.iter().enumerate() {
        if picked.len() >= count {
            break;
        }

        let recipe = candidate.recipe;
        let sub_key = recipe.diversity_key();
        let sub_count = per_subcategory.get(sub_key).copied().unwrap_or(0);
        if sub_count >= MAX_PER_SUBCATEGORY {
            debug!(recipe = %recipe.title, subcategory = sub_key, "subcategory cap reached");
            continue;
        }

        let cat_count = per_category.get(recipe.category.as_str()).copied().unwrap_or(0);
        if cat_count >= MAX_PER_CATEGORY {
            debug!(recipe = %recipe.title, category = %recipe.category, "category cap reached");
            continue;
        }

        taken[i] = true;
        picked.push(i);
        per_subcategory.insert(sub_key, sub_count + 1);
        per_category.insert(recipe.category.as_str(), cat_count + 1);
    }

    if picked.len() < count {
        debug!(picked = picked.len(), count, "backfilling without diversity caps");
        for i in 0..scored.len() {
            if picked.len() >= count {
                break;
            }
            if !taken[i] {
                taken[i] = true;
                picked.push(i);
            }
        }
    }

    let mut slots: Vec<Option<ScoredRecipe<'a>>> = scored.into_iter().map(Some).collect();
    let selected = picked.into_iter().filter_map(|i| slots[i].take()).collect();
    optimize_order(selected)
}

/// Reorder so each recipe is followed by the remaining one sharing the most
/// ingredient names. Ties go to the earliest remaining recipe.
pub fn optimize_order<'a>(selected: Vec<ScoredRecipe<'a>>) -> Vec<ScoredRecipe<'a>> {
    if selected.len() <= 2 {
        return selected;
    }

    let key_sets: Vec<HashSet<String>> = selected.iter().map(|s| s.recipe.ingredient_keys()).collect();
    let mut order = vec![0usize];
    let mut used = vec![false; selected.len()];
    used[0] = true;

    while order.len() < selected.len() {
        let last = &key_sets[order[order.len() - 1]];
        let mut best: Option<(usize, usize)> = None;

        for (i, keys) in key_sets.iter().enumerate() {
            if used[i] {
                continue;
            }
            let overlap = keys.iter().filter(|k| last.contains(*k)).count();
            if best.is_none_or(|(_, best_overlap)| overlap > best_overlap) {
                best = Some((i, overlap));
            }
        }

        match best {
            Some((i, _)) => {
                used[i] = true;
                order.push(i);
            }
            None => break,
        }
    }

    let mut slots: Vec<Option<ScoredRecipe<'a>>> = selected.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Score eligible recipes and pick a week of dinners.
pub fn select_dinners<'a, M, R>(
    eligible: &[&'a Recipe],
    stats: &HashMap<String, RecipeStats>,
    count: usize,
    oracle: &SeasonalOracle<M>,
    month: u32,
    rng: &mut R,
) -> Vec<ScoredRecipe<'a>>
where
    M: IngredientMatcher,
    R: Rng + ?Sized,
{
    let scored: Vec<ScoredRecipe<'a>> = eligible
        .iter()
        .map(|&recipe| {
            let stat = stats
                .get(&recipe.id)
                .cloned()
                .unwrap_or_else(|| RecipeStats::never_cooked(recipe.id.as_str()));
            score_recipe(recipe, &stat, oracle, month, rng)
        })
        .collect();

    select_recipes(scored, count)
}

/// Generate a weekly dinner plan with leftover lunches.
///
/// Fails with [`PlannerError::NoEligibleRecipes`] when no recipe is in a
/// planning category.
pub fn generate_weekly_plan<'a, M, R>(
    recipes: &'a [Recipe],
    history: &[CookedMeal],
    request: &PlanRequest<'_>,
    oracle: &SeasonalOracle<M>,
    rng: &mut R,
) -> Result<PlanOutcome<'a>>
where
    M: IngredientMatcher,
    R: Rng + ?Sized,
{
    let wanted: HashSet<String> = request
        .plan_categories
        .iter()
        .map(|c| c.to_lowercase())
        .collect();
    let eligible: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| wanted.contains(&r.category.to_lowercase()))
        .collect();

    if eligible.is_empty() {
        return Err(PlannerError::NoEligibleRecipes);
    }
    debug!(eligible = eligible.len(), count = request.count, "generating weekly plan");

    let stats = all_recipe_stats(eligible.iter().map(|r| r.id.as_str()), history, request.today);
    let selected = select_dinners(&eligible, &stats, request.count, oracle, request.month, rng);

    let monday = monday_of(request.week_of);
    let dinners: Vec<PlannedMeal> = selected
        .iter()
        .enumerate()
        .map(|(i, s)| PlannedMeal::dinner(s.recipe.id.as_str(), add_days(monday, i as i64), s.recipe.servings))
        .collect();

    let meals = derive_leftovers(&dinners, recipes, request.leftover_lunches);

    Ok(PlanOutcome {
        plan: WeeklyPlan {
            week_start: monday,
            meals,
            generated_at: Utc::now(),
        },
        selected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IngredientSection;
    use crate::parser::parse_ingredient_line;
    use crate::seasonal::FirstMatch;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn recipe(title: &str, category: &str, subcategory: &str, lines: &[&str]) -> Recipe {
        Recipe {
            id: format!("Recipes/{}/{}.md", category, title),
            title: title.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            ingredients: vec![IngredientSection {
                heading: "Main".to_string(),
                items: lines.iter().map(|l| parse_ingredient_line(l)).collect(),
            }],
            servings: 2.0,
            calories_per_serving: 0.0,
            net_carbs: 0.0,
            protein: 0.0,
        }
    }

    fn scored<'a>(recipe: &'a Recipe, score: f64) -> ScoredRecipe<'a> {
        ScoredRecipe {
            recipe,
            score,
            reasons: Vec::new(),
        }
    }

    fn titles(selected: &[ScoredRecipe]) -> Vec<String> {
        selected.iter().map(|s| s.recipe.title.clone()).collect()
    }

    #[test]
    fn test_subcategory_cap_and_backfill() {
        let recipes = vec![
            recipe("A", "Mains", "Chicken", &["1 lb chicken"]),
            recipe("B", "Mains", "Chicken", &["1 lb chicken"]),
            recipe("C", "Mains", "Chicken", &["1 lb chicken"]),
            recipe("D", "Mains", "Beef", &["1 lb beef"]),
        ];
        let input: Vec<ScoredRecipe> = recipes
            .iter()
            .zip([40.0, 39.0, 38.0, 10.0])
            .map(|(r, s)| scored(r, s))
            .collect();

        // C is capped out, D fills the third slot
        let picked = select_recipes(input.clone(), 3);
        let mut names = titles(&picked);
        names.sort();
        assert_eq!(names, vec!["A", "B", "D"]);

        // Four requested: caps cannot satisfy, C is backfilled
        let picked = select_recipes(input, 4);
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_category_cap() {
        let recipes = vec![
            recipe("A", "Mains", "Chicken", &[]),
            recipe("B", "Mains", "Beef", &[]),
            recipe("C", "Mains", "Pork", &[]),
            recipe("D", "Mains", "Fish", &[]),
            recipe("E", "Soups", "", &[]),
        ];
        let input: Vec<ScoredRecipe> = recipes
            .iter()
            .zip([50.0, 40.0, 30.0, 20.0, 1.0])
            .map(|(r, s)| scored(r, s))
            .collect();

        let picked = select_recipes(input, 4);
        let mut names = titles(&picked);
        names.sort();
        assert_eq!(names, vec!["A", "B", "C", "E"]);
    }

    #[test]
    fn test_never_more_than_count() {
        let recipes: Vec<Recipe> = (0..10)
            .map(|i| recipe(&format!("R{}", i), "Mains", &format!("S{}", i), &[]))
            .collect();
        let input: Vec<ScoredRecipe> = recipes.iter().map(|r| scored(r, 1.0)).collect();
        assert_eq!(select_recipes(input.clone(), 5).len(), 5);
        assert_eq!(select_recipes(input.clone(), 20).len(), 10);
        assert_eq!(select_recipes(input, 0).len(), 0);
    }

    #[test]
    fn test_stable_ties_keep_input_order() {
        let recipes = vec![
            recipe("First", "Mains", "A", &[]),
            recipe("Second", "Soups", "B", &[]),
        ];
        let input: Vec<ScoredRecipe> = recipes.iter().map(|r| scored(r, 5.0)).collect();
        assert_eq!(titles(&select_recipes(input, 2)), vec!["First", "Second"]);
    }

    #[test]
    fn test_optimize_order_groups_shared_ingredients() {
        let recipes = vec![
            recipe("Tacos", "Mains", "A", &["1 lb beef", "1 onion", "8 tortillas"]),
            recipe("Soup", "Soups", "B", &["4 cups broth", "2 carrots"]),
            recipe("Chili", "Mains", "C", &["1 lb beef", "1 onion", "1 can beans"]),
        ];
        let input: Vec<ScoredRecipe> = recipes.iter().map(|r| scored(r, 1.0)).collect();
        assert_eq!(titles(&optimize_order(input)), vec!["Tacos", "Chili", "Soup"]);
    }

    #[test]
    fn test_ingredient_overlap() {
        let a = recipe("Tacos", "Mains", "", &["1 lb beef", "1 Onion"]);
        let b = recipe("Chili", "Mains", "", &["1 onion", "1 lb Beef", "2 cups broth"]);
        assert_eq!(ingredient_overlap(&a, &b), vec!["onion", "Beef"]);
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let recipes = vec![recipe("Cake", "Desserts", "", &[])];
        let categories = vec!["Mains".to_string()];
        let request = PlanRequest {
            count: 5,
            plan_categories: &categories,
            week_of: NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
            today: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            month: 10,
            leftover_lunches: true,
        };
        let result = generate_weekly_plan(
            &recipes,
            &[],
            &request,
            &SeasonalOracle::new(FirstMatch),
            &mut StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(PlannerError::NoEligibleRecipes)));
    }

    #[test]
    fn test_plan_is_monday_anchored() {
        let recipes = vec![
            recipe("A", "mains", "X", &[]),
            recipe("B", "MAINS", "Y", &[]),
        ];
        let categories = vec!["Mains".to_string()];
        let request = PlanRequest {
            count: 5,
            plan_categories: &categories,
            week_of: NaiveDate::from_ymd_opt(2026, 10, 23).unwrap(),
            today: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            month: 10,
            leftover_lunches: false,
        };
        let outcome = generate_weekly_plan(
            &recipes,
            &[],
            &request,
            &SeasonalOracle::new(FirstMatch),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(outcome.plan.week_start, monday);
        assert_eq!(outcome.plan.meals.len(), 2);
        assert_eq!(outcome.plan.meals[0].planned_date, monday);
        assert_eq!(outcome.plan.meals[1].planned_date, add_days(monday, 1));
        assert_eq!(outcome.selected.len(), 2);
    }
}
