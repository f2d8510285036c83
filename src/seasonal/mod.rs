//! Seasonal ingredient awareness.
//!
//! Answers whether an ingredient is at its peak in a given month and how
//! seasonal a recipe is overall. Months are 1-12; callers pass the month
//! explicitly, [`current_month`] supplies the wall-clock default.

mod table;

use chrono::Datelike;

pub use table::{SEASONAL_TABLE, SeasonalEntry};

/// Score returned when a recipe has no seasonal ingredients at all.
pub const NEUTRAL_SEASONAL_SCORE: f64 = 0.5;

/// Strategy for resolving an ingredient name to a table entry.
pub trait IngredientMatcher {
    fn find<'t>(&self, table: &'t [SeasonalEntry], name: &str) -> Option<&'t SeasonalEntry>;
}

/// Exact lowercase match first, then the first declared keyword that
/// contains or is contained in the name.
///
/// First hit wins even when a later keyword is more specific: "lime" is
/// found inside "key lime pie filling", "pea" inside "peanut butter".
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl IngredientMatcher for FirstMatch {
    fn find<'t>(&self, table: &'t [SeasonalEntry], name: &str) -> Option<&'t SeasonalEntry> {
        let lower = name.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }

        table.iter().find(|e| e.keyword == lower).or_else(|| {
            table
                .iter()
                .find(|e| lower.contains(e.keyword) || e.keyword.contains(lower.as_str()))
        })
    }
}

/// Seasonality lookups over a static table.
#[derive(Debug, Clone)]
pub struct SeasonalOracle<M = FirstMatch> {
    table: &'static [SeasonalEntry],
    matcher: M,
}

impl Default for SeasonalOracle<FirstMatch> {
    fn default() -> Self {
        Self::new(FirstMatch)
    }
}

impl<M: IngredientMatcher> SeasonalOracle<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            table: SEASONAL_TABLE,
            matcher,
        }
    }

    /// Seasonal (non year-round) entry for a name, if any.
    fn seasonal_entry(&self, name: &str) -> Option<&'static SeasonalEntry> {
        self.matcher
            .find(self.table, name)
            .filter(|e| !e.is_year_round())
    }

    pub fn lookup(&self, name: &str) -> Option<&'static SeasonalEntry> {
        self.matcher.find(self.table, name)
    }

    /// False for unknown ingredients and year-round staples.
    pub fn is_in_season(&self, name: &str, month: u32) -> bool {
        self.seasonal_entry(name)
            .is_some_and(|e| e.peaks_in(month))
    }

    /// Share of seasonal ingredients at their peak, in 0.0..=1.0.
    ///
    /// Names that resolve to nothing or to a year-round staple are ignored;
    /// with no seasonal names left the score is [`NEUTRAL_SEASONAL_SCORE`].
    pub fn recipe_seasonal_score<S: AsRef<str>>(&self, names: &[S], month: u32) -> f64 {
        let (total, in_season) = names
            .iter()
            .filter_map(|n| self.seasonal_entry(n.as_ref()))
            .fold((0usize, 0usize), |(total, hits), e| {
                (total + 1, hits + usize::from(e.peaks_in(month)))
            });

        if total == 0 {
            return NEUTRAL_SEASONAL_SCORE;
        }
        in_season as f64 / total as f64
    }

    pub fn in_season_ingredients<S: AsRef<str>>(&self, names: &[S], month: u32) -> Vec<String> {
        names
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| self.is_in_season(n, month))
            .map(str::to_string)
            .collect()
    }

    pub fn out_of_season_ingredients<S: AsRef<str>>(&self, names: &[S], month: u32) -> Vec<String> {
        names
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| self.seasonal_entry(n).is_some_and(|e| !e.peaks_in(month)))
            .map(str::to_string)
            .collect()
    }

    /// Table keywords at their peak in `month`.
    pub fn peak_keywords(&self, month: u32) -> Vec<&'static str> {
        self.table
            .iter()
            .filter(|e| !e.is_year_round() && e.peaks_in(month))
            .map(|e| e.keyword)
            .collect()
    }
}

/// Current month (1-12) in UTC.
pub fn current_month() -> u32 {
    crate::dates::today_utc().month()
}

/// Meteorological season name for a month.
pub fn season_label(month: u32) -> &'static str {
    match month {
        3..=5 => "Spring",
        6..=8 => "Summer",
        9..=11 => "Fall",
        _ => "Winter",
    }
}
