use clap::Parser;
use std::path::Path;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use menu_planner_rs::cli::{Cli, Command};
use menu_planner_rs::dates::{monday_of, parse_date, today_utc};
use menu_planner_rs::error::{PlannerError, Result};
use menu_planner_rs::grocery::{export_csv, export_markdown, generate_grocery_list};
use menu_planner_rs::interface::{
    display_grocery_list, display_recipe_stats, display_season, display_weekly_plan, pick_recipe,
    prompt_yes_no,
};
use menu_planner_rs::models::{CookedMeal, GroceryCategory, MealType, Recipe, WeeklyPlan};
use menu_planner_rs::planner::{
    PlanRequest, ScoredRecipe, clear_plan, generate_weekly_plan, remove_meal, swap_recipe,
};
use menu_planner_rs::seasonal::{FirstMatch, SeasonalOracle, current_month, season_label};
use menu_planner_rs::state::{
    PlannerStateManager, RecipeCatalog, load_data, load_recipes, save_data,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. RUST_LOG wins over the -v count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    let data_path = Path::new(&cli.file);
    let recipes_path = Path::new(&cli.recipes);

    match command {
        Command::Plan {
            week,
            count,
            categories,
            no_leftovers,
            seed,
            explain,
            yes,
        } => cmd_plan(
            recipes_path,
            data_path,
            PlanArgs {
                week,
                count,
                categories,
                no_leftovers,
                seed,
                explain,
                yes,
            },
        ),
        Command::Show { week } => cmd_show(recipes_path, data_path, week.as_deref()),
        Command::Groceries {
            week,
            by_store,
            export,
            csv,
        } => cmd_groceries(recipes_path, data_path, week.as_deref(), by_store, export, csv),
        Command::Cooked { title, date, meal } => {
            cmd_cooked(recipes_path, data_path, &title, date.as_deref(), &meal)
        }
        Command::Done { date, meal, undo } => {
            cmd_done(recipes_path, data_path, date.as_deref(), &meal, undo)
        }
        Command::Swap { date, title, meal } => {
            cmd_swap(recipes_path, data_path, &date, &title, &meal)
        }
        Command::Remove { date, meal } => cmd_remove(data_path, &date, &meal),
        Command::Clear { week } => cmd_clear(data_path, week.as_deref()),
        Command::Stats => cmd_stats(recipes_path, data_path),
        Command::Season { month } => cmd_season(month),
        Command::AssignStore { ingredient, store } => {
            cmd_assign_store(data_path, &ingredient, &store)
        }
        Command::SetCategory {
            ingredient,
            category,
        } => cmd_set_category(data_path, &ingredient, &category),
    }
}

struct PlanArgs {
    week: Option<String>,
    count: Option<usize>,
    categories: Option<Vec<String>>,
    no_leftovers: bool,
    seed: Option<u64>,
    explain: bool,
    yes: bool,
}

fn load_catalog(path: &Path) -> Result<RecipeCatalog> {
    if !path.exists() {
        return Err(PlannerError::InvalidInput(format!(
            "Recipe catalog not found: {}",
            path.display()
        )));
    }
    let catalog = load_recipes(path)?;
    println!("Loaded {} recipes", catalog.len());
    Ok(catalog)
}

fn load_manager(path: &Path) -> Result<PlannerStateManager> {
    Ok(PlannerStateManager::new(load_data(path)?))
}

fn save_manager(path: &Path, manager: &PlannerStateManager) -> Result<()> {
    save_data(path, manager.data())
}

fn date_or_today(date: Option<&str>) -> Result<NaiveDate> {
    date.map(parse_date).unwrap_or_else(|| Ok(today_utc()))
}

/// Copy of the saved plan for the week containing `date`.
fn saved_plan(manager: &PlannerStateManager, date: NaiveDate) -> Result<WeeklyPlan> {
    manager
        .plan_for_week(date)
        .cloned()
        .ok_or_else(|| PlannerError::PlanNotFound(monday_of(date).to_string()))
}

/// Generate a plan, display it, and save it on confirmation.
fn cmd_plan(recipes_path: &Path, data_path: &Path, args: PlanArgs) -> Result<()> {
    let catalog = load_catalog(recipes_path)?;
    let mut manager = load_manager(data_path)?;
    let settings = manager.settings().clone();

    let categories = args.categories.unwrap_or(settings.plan_categories);
    let today = today_utc();
    let request = PlanRequest {
        count: args.count.unwrap_or(settings.dinners_per_week),
        plan_categories: &categories,
        week_of: date_or_today(args.week.as_deref())?,
        today,
        month: current_month(),
        leftover_lunches: settings.leftover_lunches && !args.no_leftovers,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let oracle = SeasonalOracle::new(FirstMatch);

    let outcome = generate_weekly_plan(
        catalog.all(),
        manager.cooked_meals(),
        &request,
        &oracle,
        &mut rng,
    )?;

    let explain: &[ScoredRecipe] = if args.explain { &outcome.selected } else { &[] };
    display_weekly_plan(&outcome.plan, &catalog, manager.cooked_meals(), explain);

    if outcome.plan.is_empty() {
        return Ok(());
    }

    let save = args.yes || prompt_yes_no("Save this plan?", true)?;
    if save {
        manager.save_weekly_plan(outcome.plan)?;
        save_manager(data_path, &manager)?;
        println!("Plan saved.");
    }

    Ok(())
}

fn cmd_show(recipes_path: &Path, data_path: &Path, week: Option<&str>) -> Result<()> {
    let catalog = load_catalog(recipes_path)?;
    let manager = load_manager(data_path)?;
    let plan = saved_plan(&manager, date_or_today(week)?)?;
    display_weekly_plan(&plan, &catalog, manager.cooked_meals(), &[]);
    Ok(())
}

/// Build, display, and optionally export the grocery list for a saved week.
fn cmd_groceries(
    recipes_path: &Path,
    data_path: &Path,
    week: Option<&str>,
    by_store: bool,
    export: Option<Option<String>>,
    csv: Option<String>,
) -> Result<()> {
    let catalog = load_catalog(recipes_path)?;
    let manager = load_manager(data_path)?;
    let plan = saved_plan(&manager, date_or_today(week)?)?;

    let mut recipes: Vec<&Recipe> = Vec::new();
    for dinner in plan.dinners() {
        match catalog.get(&dinner.recipe_id) {
            Some(recipe) => recipes.push(recipe),
            None => warn!(recipe = %dinner.recipe_id, "planned recipe missing from catalog, skipped"),
        }
    }

    let items = generate_grocery_list(&recipes, &manager, &manager);
    display_grocery_list(&items, by_store);

    let titles: Vec<String> = recipes.iter().map(|r| r.title.clone()).collect();

    if let Some(path) = export {
        let path = path.unwrap_or_else(|| manager.settings().grocery_export_path.clone());
        export_markdown(&path, &items, &titles)?;
        println!("Grocery checklist written to {}", path);
    }

    if let Some(path) = csv {
        export_csv(&path, &items)?;
        println!("Grocery CSV written to {}", path);
    }

    Ok(())
}

fn cmd_cooked(
    recipes_path: &Path,
    data_path: &Path,
    title: &str,
    date: Option<&str>,
    meal: &str,
) -> Result<()> {
    let catalog = load_catalog(recipes_path)?;
    let mut manager = load_manager(data_path)?;

    let Some(recipe) = pick_recipe(&catalog, title)? else {
        return Ok(());
    };

    let cooked_date = date_or_today(date)?;
    manager.add_cooked_meal(CookedMeal {
        recipe_id: recipe.id.clone(),
        cooked_date,
        meal_type: meal.parse::<MealType>()?,
        notes: None,
    });
    save_manager(data_path, &manager)?;

    let stats = manager.recipe_stats(&recipe.id, today_utc());
    println!(
        "Recorded '{}' on {} (cooked {} times)",
        recipe.title, cooked_date, stats.times_cooked
    );
    Ok(())
}

/// Check off, or with `undo` uncheck, a planned meal.
fn cmd_done(
    recipes_path: &Path,
    data_path: &Path,
    date: Option<&str>,
    meal: &str,
    undo: bool,
) -> Result<()> {
    let catalog = load_catalog(recipes_path)?;
    let mut manager = load_manager(data_path)?;
    let date = date_or_today(date)?;

    let planned = manager.set_meal_cooked(date, meal.parse()?, !undo)?;
    save_manager(data_path, &manager)?;

    let title = catalog
        .get(&planned.recipe_id)
        .map(|r| r.title.as_str())
        .unwrap_or(planned.recipe_id.as_str());
    if undo {
        println!("Unchecked '{}' on {}.", title, planned.planned_date);
    } else {
        println!("Checked off '{}' on {}.", title, planned.planned_date);
    }
    Ok(())
}

fn cmd_swap(recipes_path: &Path, data_path: &Path, date: &str, title: &str, meal: &str) -> Result<()> {
    let catalog = load_catalog(recipes_path)?;
    let mut manager = load_manager(data_path)?;
    let date = parse_date(date)?;

    let recipe = pick_recipe(&catalog, title)?
        .ok_or_else(|| PlannerError::RecipeNotFound(title.to_string()))?;

    let mut plan = saved_plan(&manager, date)?;
    let leftovers = manager.settings().leftover_lunches;
    swap_recipe(&mut plan, date, meal.parse()?, recipe, leftovers)?;

    display_weekly_plan(&plan, &catalog, manager.cooked_meals(), &[]);
    manager.save_weekly_plan(plan)?;
    save_manager(data_path, &manager)?;
    println!("Plan saved.");
    Ok(())
}

fn cmd_remove(data_path: &Path, date: &str, meal: &str) -> Result<()> {
    let mut manager = load_manager(data_path)?;
    let date = parse_date(date)?;

    let mut plan = saved_plan(&manager, date)?;
    let removed = remove_meal(&mut plan, date, meal.parse()?)?;

    manager.save_weekly_plan(plan)?;
    save_manager(data_path, &manager)?;
    println!("Removed {} on {}.", removed.meal_type, removed.planned_date);
    Ok(())
}

fn cmd_clear(data_path: &Path, week: Option<&str>) -> Result<()> {
    let mut manager = load_manager(data_path)?;
    let mut plan = saved_plan(&manager, date_or_today(week)?)?;

    if !prompt_yes_no(&format!("Clear every meal for the week of {}?", plan.week_start), false)? {
        return Ok(());
    }

    clear_plan(&mut plan);
    manager.save_weekly_plan(plan)?;
    save_manager(data_path, &manager)?;
    println!("Plan cleared.");
    Ok(())
}

fn cmd_stats(recipes_path: &Path, data_path: &Path) -> Result<()> {
    let catalog = load_catalog(recipes_path)?;
    let manager = load_manager(data_path)?;
    let today = today_utc();

    let mut rows: Vec<(&Recipe, _)> = catalog
        .all()
        .iter()
        .map(|r| (r, manager.recipe_stats(&r.id, today)))
        .collect();
    rows.sort_by(|a, b| b.1.times_cooked.cmp(&a.1.times_cooked).then_with(|| a.0.title.cmp(&b.0.title)));

    display_recipe_stats(&rows);
    Ok(())
}

fn cmd_season(month: Option<u32>) -> Result<()> {
    let month = month.unwrap_or_else(current_month);
    let oracle = SeasonalOracle::new(FirstMatch);
    display_season(month, season_label(month), &oracle.peak_keywords(month));
    Ok(())
}

fn cmd_assign_store(data_path: &Path, ingredient: &str, store: &str) -> Result<()> {
    let mut manager = load_manager(data_path)?;
    manager.set_store_assignment(ingredient, store);
    save_manager(data_path, &manager)?;
    println!("'{}' will be bought at {}.", ingredient, store);
    Ok(())
}

fn cmd_set_category(data_path: &Path, ingredient: &str, category: &str) -> Result<()> {
    let category: GroceryCategory = category.parse()?;
    let mut manager = load_manager(data_path)?;
    manager.set_ingredient_category(ingredient, category);
    save_manager(data_path, &manager)?;
    println!("'{}' is now listed under {}.", ingredient, category.label());
    Ok(())
}
