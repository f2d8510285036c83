/// Peak months for one ingredient keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalEntry {
    pub keyword: &'static str,
    /// Months 1-12 when the ingredient is at its peak.
    pub months: &'static [u32],
    pub kind: &'static str,
}

impl SeasonalEntry {
    /// Year-round staples never count as seasonal.
    pub fn is_year_round(&self) -> bool {
        self.months.len() >= 12
    }

    pub fn peaks_in(&self, month: u32) -> bool {
        self.months.contains(&month)
    }
}

const fn entry(keyword: &'static str, months: &'static [u32], kind: &'static str) -> SeasonalEntry {
    SeasonalEntry {
        keyword,
        months,
        kind,
    }
}

const ALL_YEAR: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// US temperate-climate seasonality. Lookup order is declaration order.
pub static SEASONAL_TABLE: &[SeasonalEntry] = &[
    // Spring
    entry("asparagus", &[3, 4, 5], "vegetable"),
    entry("artichoke", &[3, 4, 5], "vegetable"),
    entry("pea", &[3, 4, 5, 6], "vegetable"),
    entry("peas", &[3, 4, 5, 6], "vegetable"),
    entry("radish", &[3, 4, 5], "vegetable"),
    entry("rhubarb", &[4, 5, 6], "fruit"),
    entry("strawberry", &[4, 5, 6], "fruit"),
    entry("strawberries", &[4, 5, 6], "fruit"),
    // Summer
    entry("tomato", &[6, 7, 8, 9], "vegetable"),
    entry("tomatoes", &[6, 7, 8, 9], "vegetable"),
    entry("cherry tomato", &[6, 7, 8, 9], "vegetable"),
    entry("cherry tomatoes", &[6, 7, 8, 9], "vegetable"),
    entry("zucchini", &[6, 7, 8], "vegetable"),
    entry("corn", &[6, 7, 8, 9], "vegetable"),
    entry("bell pepper", &[6, 7, 8, 9], "vegetable"),
    entry("bell peppers", &[6, 7, 8, 9], "vegetable"),
    entry("cucumber", &[5, 6, 7, 8], "vegetable"),
    entry("eggplant", &[7, 8, 9], "vegetable"),
    entry("green bean", &[6, 7, 8], "vegetable"),
    entry("green beans", &[6, 7, 8], "vegetable"),
    entry("peach", &[6, 7, 8], "fruit"),
    entry("peaches", &[6, 7, 8], "fruit"),
    entry("blueberry", &[6, 7, 8], "fruit"),
    entry("blueberries", &[6, 7, 8], "fruit"),
    entry("raspberry", &[6, 7, 8], "fruit"),
    entry("raspberries", &[6, 7, 8], "fruit"),
    entry("watermelon", &[6, 7, 8], "fruit"),
    entry("cantaloupe", &[6, 7, 8], "fruit"),
    entry("basil", &[6, 7, 8, 9], "herb"),
    entry("cilantro", &[5, 6, 9, 10], "herb"),
    entry("jalapeño", &[6, 7, 8, 9], "vegetable"),
    entry("okra", &[6, 7, 8, 9], "vegetable"),
    entry("avocado", &[3, 4, 5, 6, 7, 8], "fruit"),
    // Fall
    entry("apple", &[9, 10, 11], "fruit"),
    entry("apples", &[9, 10, 11], "fruit"),
    entry("pumpkin", &[9, 10, 11], "vegetable"),
    entry("sweet potato", &[9, 10, 11, 12], "vegetable"),
    entry("sweet potatoes", &[9, 10, 11, 12], "vegetable"),
    entry("butternut squash", &[9, 10, 11], "vegetable"),
    entry("squash", &[9, 10, 11], "vegetable"),
    entry("spaghetti squash", &[9, 10, 11], "vegetable"),
    entry("brussels sprout", &[9, 10, 11, 12], "vegetable"),
    entry("brussels sprouts", &[9, 10, 11, 12], "vegetable"),
    entry("cranberry", &[10, 11, 12], "fruit"),
    entry("cranberries", &[10, 11, 12], "fruit"),
    entry("pear", &[9, 10, 11], "fruit"),
    entry("pears", &[9, 10, 11], "fruit"),
    entry("fig", &[8, 9, 10], "fruit"),
    entry("figs", &[8, 9, 10], "fruit"),
    entry("grape", &[8, 9, 10], "fruit"),
    entry("grapes", &[8, 9, 10], "fruit"),
    entry("cauliflower", &[9, 10, 11], "vegetable"),
    entry("turnip", &[10, 11, 12], "vegetable"),
    entry("parsnip", &[10, 11, 12, 1, 2], "vegetable"),
    // Winter
    entry("citrus", &[12, 1, 2, 3], "fruit"),
    entry("orange", &[12, 1, 2, 3], "fruit"),
    entry("oranges", &[12, 1, 2, 3], "fruit"),
    entry("grapefruit", &[12, 1, 2, 3], "fruit"),
    entry("lemon", &[12, 1, 2, 3], "fruit"),
    entry("lemons", &[12, 1, 2, 3], "fruit"),
    entry("lime", &[5, 6, 7, 8, 9, 10], "fruit"),
    entry("kale", &[10, 11, 12, 1, 2, 3], "vegetable"),
    entry("collard greens", &[11, 12, 1, 2], "vegetable"),
    entry("cabbage", &[10, 11, 12, 1, 2, 3], "vegetable"),
    entry("beet", &[6, 7, 8, 9, 10], "vegetable"),
    entry("beets", &[6, 7, 8, 9, 10], "vegetable"),
    entry("celery", &[9, 10, 11], "vegetable"),
    entry("pomegranate", &[10, 11, 12, 1], "fruit"),
    // Year-round staples (never seasonal)
    entry("onion", ALL_YEAR, "vegetable"),
    entry("red onion", ALL_YEAR, "vegetable"),
    entry("garlic", ALL_YEAR, "vegetable"),
    entry("potato", ALL_YEAR, "vegetable"),
    entry("potatoes", ALL_YEAR, "vegetable"),
    entry("carrot", ALL_YEAR, "vegetable"),
    entry("carrots", ALL_YEAR, "vegetable"),
    entry("spinach", &[3, 4, 5, 9, 10, 11], "vegetable"),
    entry("lettuce", &[3, 4, 5, 9, 10, 11], "vegetable"),
    entry("broccoli", &[10, 11, 12, 1, 2, 3], "vegetable"),
    entry("mushroom", &[9, 10, 11, 12, 1, 2, 3], "vegetable"),
    entry("mushrooms", &[9, 10, 11, 12, 1, 2, 3], "vegetable"),
    entry("ginger", ALL_YEAR, "spice"),
    // Seafood
    entry("shrimp", &[4, 5, 6, 7, 8, 9, 10], "seafood"),
    entry("salmon", &[5, 6, 7, 8, 9], "seafood"),
    entry("crab", &[10, 11, 12, 1], "seafood"),
];
