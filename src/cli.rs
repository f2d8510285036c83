use clap::{ArgAction, Parser, Subcommand};

/// Menu planner: weekly dinner plans, leftovers, and grocery lists from a recipe collection.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "recipes.json", global = true)]
    pub recipes: String,

    /// Path to the planner data JSON file.
    #[arg(short, long, default_value = "planner_data.json", global = true)]
    pub file: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a dinner plan for a week.
    Plan {
        /// Any date in the target week (YYYY-MM-DD). Defaults to this week.
        #[arg(long)]
        week: Option<String>,

        /// Number of dinners. Defaults to the saved setting.
        #[arg(long)]
        count: Option<usize>,

        /// Comma-separated planning categories. Defaults to the saved setting.
        #[arg(long, value_delimiter = ',')]
        categories: Option<Vec<String>>,

        /// Do not add leftover lunches.
        #[arg(long)]
        no_leftovers: bool,

        /// Seed for the random variety term.
        #[arg(long)]
        seed: Option<u64>,

        /// Show the score breakdown for each dinner.
        #[arg(long)]
        explain: bool,

        /// Save without asking.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the saved plan for a week.
    Show {
        #[arg(long)]
        week: Option<String>,
    },

    /// Build the grocery list for a week's dinners.
    Groceries {
        #[arg(long)]
        week: Option<String>,

        /// Group by store instead of category.
        #[arg(long)]
        by_store: bool,

        /// Write a markdown checklist. Without a path, uses the saved export path.
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<String>>,

        /// Write the list as CSV.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Record a recipe as cooked.
    Cooked {
        /// Recipe title (fuzzy matched).
        title: String,

        /// Date cooked (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Meal type: breakfast, lunch, dinner, or snack.
        #[arg(long, default_value = "dinner")]
        meal: String,
    },

    /// Check off a planned meal as cooked.
    Done {
        /// Date of the slot (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "dinner")]
        meal: String,

        /// Uncheck instead, removing it from the cooking history.
        #[arg(long)]
        undo: bool,
    },

    /// Replace the recipe in a planned slot.
    Swap {
        /// Date of the slot (YYYY-MM-DD).
        #[arg(long)]
        date: String,

        /// New recipe title (fuzzy matched).
        title: String,

        #[arg(long, default_value = "dinner")]
        meal: String,
    },

    /// Remove a planned meal.
    Remove {
        #[arg(long)]
        date: String,

        #[arg(long, default_value = "dinner")]
        meal: String,
    },

    /// Remove every meal from a week's plan.
    Clear {
        #[arg(long)]
        week: Option<String>,
    },

    /// Show times cooked and last cooked for every recipe.
    Stats,

    /// Show the season and ingredients at their peak.
    Season {
        /// Month 1-12. Defaults to the current month.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Assign an ingredient to a store.
    AssignStore { ingredient: String, store: String },

    /// Override the grocery category of an ingredient.
    SetCategory { ingredient: String, category: String },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            week: None,
            count: None,
            categories: None,
            no_leftovers: false,
            seed: None,
            explain: false,
            yes: false,
        }
    }
}
