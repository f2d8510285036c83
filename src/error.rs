use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No eligible recipes found for meal planning")]
    NoEligibleRecipes,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Meal not found in plan: {0}")]
    MealNotFound(String),

    #[error("No saved plan for the week of {0}")]
    PlanNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
