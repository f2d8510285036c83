use std::sync::LazyLock;

use regex::Regex;

use crate::models::IngredientItem;

/// Leading quantity: digits, unicode fractions, slashes, and dashes, with an
/// optional second token for mixed numbers ("1 1/2").
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\d½¼¾⅓⅔⅛/\-–]+(?:\s*[\d½¼¾⅓⅔⅛/\-–]*)?)\s+").expect("quantity pattern")
});

static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(cups?|tbsp|tsp|oz|lb|lbs?|pint|quart|gallon|cloves?|cans?|packages?|packets?|slices?|pieces?|stalks?|heads?|bunche?s?|large|medium|small|whole|center-cut)\b\.?\s*",
    )
    .expect("unit pattern")
});

static AFTER_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s.*$").expect("comma pattern"));
static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("parenthetical pattern"));
static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern"));

/// Split a raw ingredient line into quantity, unit, and canonical name.
///
/// ```text
/// "4 oz cream cheese, softened"       -> 4 / oz / cream cheese
/// "3 cups cooked shredded chicken"    -> 3 / cups / cooked shredded chicken
/// "Kosher salt"                       -> - / - / Kosher salt
/// ```
pub fn parse_ingredient_line(raw: &str) -> IngredientItem {
    let clean = MULTI_SPACE_RE.replace_all(raw, " ").trim().to_string();

    let Some(caps) = QUANTITY_RE.captures(&clean) else {
        return IngredientItem {
            name: extract_ingredient_name(&clean),
            raw: clean,
            quantity: None,
            unit: None,
        };
    };

    let quantity = caps[1].trim().to_string();
    let rest = &clean[caps[0].len()..];

    let (unit, name_part) = match UNIT_RE.captures(rest) {
        Some(unit_caps) => (
            Some(unit_caps[1].to_string()),
            &rest[unit_caps[0].len()..],
        ),
        None => (None, rest),
    };

    IngredientItem {
        name: extract_ingredient_name(name_part),
        quantity: Some(quantity),
        unit,
        raw: clean.clone(),
    }
}

/// Strip preparation notes: anything after the first ", " and parenthetical asides.
pub fn extract_ingredient_name(raw: &str) -> String {
    let name = AFTER_COMMA_RE.replace(raw, "");
    let name = PARENTHETICAL_RE.replace_all(&name, "");
    let name = MULTI_SPACE_RE.replace_all(&name, " ");
    name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_unit_name() {
        let item = parse_ingredient_line("4 oz cream cheese, softened");
        assert_eq!(item.quantity.as_deref(), Some("4"));
        assert_eq!(item.unit.as_deref(), Some("oz"));
        assert_eq!(item.name, "cream cheese");
    }

    #[test]
    fn test_mixed_number_and_plural_unit() {
        let item = parse_ingredient_line("1 1/2 cups chicken broth (low sodium)");
        assert_eq!(item.quantity.as_deref(), Some("1 1/2"));
        assert_eq!(item.unit.as_deref(), Some("cups"));
        assert_eq!(item.name, "chicken broth");
    }

    #[test]
    fn test_no_quantity() {
        let item = parse_ingredient_line("Kosher salt");
        assert!(item.quantity.is_none());
        assert!(item.unit.is_none());
        assert_eq!(item.name, "Kosher salt");
    }

    #[test]
    fn test_quantity_without_unit() {
        let item = parse_ingredient_line("3 eggs");
        assert_eq!(item.quantity.as_deref(), Some("3"));
        assert!(item.unit.is_none());
        assert_eq!(item.name, "eggs");
    }

    #[test]
    fn test_unicode_fraction_and_unit_with_period() {
        let item = parse_ingredient_line("½ Tbsp. olive oil");
        assert_eq!(item.quantity.as_deref(), Some("½"));
        assert_eq!(item.unit.as_deref(), Some("Tbsp"));
        assert_eq!(item.name, "olive oil");
    }

    #[test]
    fn test_unit_requires_word_boundary() {
        let item = parse_ingredient_line("2 canola oil sprays");
        assert!(item.unit.is_none());
        assert_eq!(item.name, "canola oil sprays");
    }

    #[test]
    fn test_range_quantity() {
        let item = parse_ingredient_line("2-3 cloves garlic, minced");
        assert_eq!(item.quantity.as_deref(), Some("2-3"));
        assert_eq!(item.unit.as_deref(), Some("cloves"));
        assert_eq!(item.name, "garlic");
    }
}
