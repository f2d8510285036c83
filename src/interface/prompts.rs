use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::models::Recipe;
use crate::state::RecipeCatalog;

/// Fuzzy suggestions offered when a title has no exact match.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a recipe title typed by the user.
///
/// Exact (case-insensitive) titles win. Otherwise similar titles are offered
/// for confirmation or selection; `None` when nothing fits or the user declines.
pub fn pick_recipe<'a>(catalog: &'a RecipeCatalog, query: &str) -> Result<Option<&'a Recipe>> {
    if let Some(recipe) = catalog.find_by_title(query) {
        return Ok(Some(recipe));
    }

    let candidates = catalog.suggest_titles(query, MAX_SUGGESTIONS);

    if candidates.is_empty() {
        println!("No recipe matching '{}'", query);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let recipe = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", recipe.title))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(recipe));
    }

    // Multiple matches - let user select
    let mut options: Vec<String> = candidates.iter().map(|r| r.title.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(candidates.get(selection).copied())
}
