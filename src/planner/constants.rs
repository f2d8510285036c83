// ─────────────────────────────────────────────────────────────────────────────
// Recency tiers (days since last made)
// ─────────────────────────────────────────────────────────────────────────────

/// Points for a recipe that has never been cooked.
pub const NEVER_COOKED_POINTS: f64 = 35.0;

/// Points when last made more than `LONG_AGO_DAYS` ago.
pub const LONG_AGO_POINTS: f64 = 40.0;
pub const LONG_AGO_DAYS: i64 = 30;

/// Points when last made more than `FEW_WEEKS_DAYS` ago.
pub const FEW_WEEKS_POINTS: f64 = 25.0;
pub const FEW_WEEKS_DAYS: i64 = 14;

/// Points when last made more than `COUPLE_WEEKS_DAYS` ago.
pub const COUPLE_WEEKS_POINTS: f64 = 10.0;
pub const COUPLE_WEEKS_DAYS: i64 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Frequency penalties (times cooked)
// ─────────────────────────────────────────────────────────────────────────────

pub const VERY_FREQUENT_TIMES: u32 = 10;
pub const VERY_FREQUENT_PENALTY: f64 = -10.0;

pub const FREQUENT_TIMES: u32 = 5;
pub const FREQUENT_PENALTY: f64 = -5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition and seasonality
// ─────────────────────────────────────────────────────────────────────────────

/// Protein grams per serving that earn the protein bonus.
pub const HIGH_PROTEIN_GRAMS: f64 = 20.0;
pub const HIGH_PROTEIN_POINTS: f64 = 5.0;

/// Net carbs strictly below this (and above zero) earn the carb bonus.
pub const MODERATE_CARBS_MAX: f64 = 30.0;
pub const MODERATE_CARBS_POINTS: f64 = 5.0;

/// Seasonal scores above this earn `round(score * SEASONAL_BONUS_SCALE)`.
pub const SEASONAL_BONUS_THRESHOLD: f64 = 0.5;
pub const SEASONAL_BONUS_SCALE: f64 = 15.0;

/// Seasonal scores above zero but below this are penalized.
pub const OUT_OF_SEASON_THRESHOLD: f64 = 0.3;
pub const OUT_OF_SEASON_PENALTY: f64 = -5.0;

/// In-season ingredient names listed in a seasonal reason.
pub const SEASONAL_REASON_ITEMS: usize = 3;

/// Upper bound (exclusive) of the random variety term.
pub const VARIETY_RANGE: f64 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Selection and leftovers
// ─────────────────────────────────────────────────────────────────────────────

/// Dinners per subcategory (or category when no subcategory) before the cap.
pub const MAX_PER_SUBCATEGORY: usize = 2;

/// Dinners per top-level category before the cap.
pub const MAX_PER_CATEGORY: usize = 3;

/// Default dinners per plan.
pub const DEFAULT_DINNER_COUNT: usize = 5;

/// Servings needed for one leftover lunch.
pub const LEFTOVER_MIN_SERVINGS: f64 = 4.0;

/// Servings needed for a double leftover lunch.
pub const DOUBLE_LEFTOVER_SERVINGS: f64 = 6.0;
