use std::fmt;

use rand::Rng;

use crate::models::{Recipe, RecipeStats};
use crate::planner::constants::*;
use crate::seasonal::{IngredientMatcher, SeasonalOracle};

/// Scoring rule that contributed to a recipe's score.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreRule {
    NeverCooked,
    LongAgo { days: i64 },
    FewWeeksAgo { days: i64 },
    CoupleWeeksAgo { days: i64 },
    RecentlyMade { days: i64 },
    VeryFrequent { times: u32 },
    Frequent { times: u32 },
    HighProtein,
    ModerateCarbs,
    /// Up to three in-season ingredient names.
    InSeason { ingredients: Vec<String> },
    OutOfSeason,
    /// Random perturbation.
    Variety,
}

impl fmt::Display for ScoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreRule::NeverCooked => write!(f, "Never cooked"),
            ScoreRule::LongAgo { days } => write!(f, "Not made in {} days", days),
            ScoreRule::FewWeeksAgo { days } | ScoreRule::CoupleWeeksAgo { days } => {
                write!(f, "Made {} days ago", days)
            }
            ScoreRule::RecentlyMade { days } => write!(f, "Made recently ({} days ago)", days),
            ScoreRule::VeryFrequent { times } | ScoreRule::Frequent { times } => {
                write!(f, "Made {} times", times)
            }
            ScoreRule::HighProtein => write!(f, "Good protein"),
            ScoreRule::ModerateCarbs => write!(f, "Moderate carbs"),
            ScoreRule::InSeason { ingredients } => write!(f, "Seasonal: {}", ingredients.join(", ")),
            ScoreRule::OutOfSeason => write!(f, "Out of season"),
            ScoreRule::Variety => write!(f, "Variety"),
        }
    }
}

/// One applied rule and the points it added.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReason {
    pub rule: ScoreRule,
    pub delta: f64,
}

impl ScoreReason {
    fn new(rule: ScoreRule, delta: f64) -> Self {
        Self { rule, delta }
    }
}

impl fmt::Display for ScoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delta.fract() == 0.0 {
            write!(f, "{} ({:+})", self.rule, self.delta as i64)
        } else {
            write!(f, "{} ({:+.1})", self.rule, self.delta)
        }
    }
}

/// A recipe with its desirability score and the rules behind it.
#[derive(Debug, Clone)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
    pub reasons: Vec<ScoreReason>,
}

fn recency_reason(days_since: Option<i64>) -> ScoreReason {
    match days_since {
        None => ScoreReason::new(ScoreRule::NeverCooked, NEVER_COOKED_POINTS),
        Some(days) if days > LONG_AGO_DAYS => {
            ScoreReason::new(ScoreRule::LongAgo { days }, LONG_AGO_POINTS)
        }
        Some(days) if days > FEW_WEEKS_DAYS => {
            ScoreReason::new(ScoreRule::FewWeeksAgo { days }, FEW_WEEKS_POINTS)
        }
        Some(days) if days > COUPLE_WEEKS_DAYS => {
            ScoreReason::new(ScoreRule::CoupleWeeksAgo { days }, COUPLE_WEEKS_POINTS)
        }
        Some(days) => ScoreReason::new(ScoreRule::RecentlyMade { days }, 0.0),
    }
}

fn frequency_reason(times: u32) -> Option<ScoreReason> {
    if times > VERY_FREQUENT_TIMES {
        Some(ScoreReason::new(ScoreRule::VeryFrequent { times }, VERY_FREQUENT_PENALTY))
    } else if times > FREQUENT_TIMES {
        Some(ScoreReason::new(ScoreRule::Frequent { times }, FREQUENT_PENALTY))
    } else {
        None
    }
}

fn seasonal_reason<M: IngredientMatcher>(
    recipe: &Recipe,
    oracle: &SeasonalOracle<M>,
    month: u32,
) -> Option<ScoreReason> {
    let names = recipe.ingredient_names();
    let seasonal_score = oracle.recipe_seasonal_score(&names, month);

    if seasonal_score > SEASONAL_BONUS_THRESHOLD {
        let mut ingredients = oracle.in_season_ingredients(&names, month);
        ingredients.truncate(SEASONAL_REASON_ITEMS);
        let bonus = (seasonal_score * SEASONAL_BONUS_SCALE).round();
        Some(ScoreReason::new(ScoreRule::InSeason { ingredients }, bonus))
    } else if seasonal_score > 0.0 && seasonal_score < OUT_OF_SEASON_THRESHOLD {
        Some(ScoreReason::new(ScoreRule::OutOfSeason, OUT_OF_SEASON_PENALTY))
    } else {
        None
    }
}

/// Score a recipe for dinner planning.
///
/// Purely additive: one recency tier, at most one frequency penalty,
/// nutrition bonuses, a seasonal bonus or penalty, and a random variety
/// term in `[0, VARIETY_RANGE)` drawn from `rng`.
pub fn score_recipe<'a, M, R>(
    recipe: &'a Recipe,
    stats: &RecipeStats,
    oracle: &SeasonalOracle<M>,
    month: u32,
    rng: &mut R,
) -> ScoredRecipe<'a>
where
    M: IngredientMatcher,
    R: Rng + ?Sized,
{
    let mut reasons = vec![recency_reason(stats.days_since_last_made)];
    reasons.extend(frequency_reason(stats.times_cooked));

    if recipe.protein >= HIGH_PROTEIN_GRAMS {
        reasons.push(ScoreReason::new(ScoreRule::HighProtein, HIGH_PROTEIN_POINTS));
    }
    if recipe.net_carbs > 0.0 && recipe.net_carbs < MODERATE_CARBS_MAX {
        reasons.push(ScoreReason::new(ScoreRule::ModerateCarbs, MODERATE_CARBS_POINTS));
    }

    reasons.extend(seasonal_reason(recipe, oracle, month));
    reasons.push(ScoreReason::new(ScoreRule::Variety, rng.gen_range(0.0..VARIETY_RANGE)));

    let score = reasons.iter().map(|r| r.delta).sum();
    ScoredRecipe {
        recipe,
        score,
        reasons,
    }
}
