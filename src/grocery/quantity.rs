use std::sync::LazyLock;

use regex::Regex;

/// Unicode vulgar fractions understood in quantities.
const UNICODE_FRACTIONS: [(char, f64); 6] = [
    ('½', 0.5),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅓', 0.333),
    ('⅔', 0.667),
    ('⅛', 0.125),
];

static FRACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*/\s*(\d+)$").expect("fraction pattern"));
static MIXED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(\d+)\s*/\s*(\d+)$").expect("mixed number pattern"));
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\d.]+)\s*[–\-]\s*([\d.]+)$").expect("range pattern"));
static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)").expect("number pattern")
});

/// Parse the numeric prefix of a string ("2 large" is 2), like a lenient
/// float reader.
fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER_RE
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

fn ratio(numerator: &str, denominator: &str) -> f64 {
    let n: f64 = numerator.parse().unwrap_or(0.0);
    let d: f64 = denominator.parse().unwrap_or(0.0);
    if d == 0.0 { 0.0 } else { n / d }
}

/// Resolve a free-text quantity to a number. Never fails: unreadable text is 0.
///
/// Tried in order: unicode fraction (plus any whole-number prefix), "a/b",
/// "a b/c", a range "a-b" (upper bound), then a plain number.
pub fn parse_quantity(quantity: &str) -> f64 {
    let cleaned = quantity.trim();

    for (glyph, value) in UNICODE_FRACTIONS {
        if cleaned.contains(glyph) {
            let prefix = cleaned.replacen(glyph, "", 1);
            let whole = leading_number(prefix.trim()).unwrap_or(0.0);
            return whole + value;
        }
    }

    if let Some(caps) = FRACTION_RE.captures(cleaned) {
        return ratio(&caps[1], &caps[2]);
    }

    if let Some(caps) = MIXED_RE.captures(cleaned) {
        let whole: f64 = caps[1].parse().unwrap_or(0.0);
        return whole + ratio(&caps[2], &caps[3]);
    }

    if let Some(caps) = RANGE_RE.captures(cleaned) {
        return leading_number(&caps[2]).unwrap_or(0.0);
    }

    leading_number(cleaned).unwrap_or(0.0)
}

/// Render a summed quantity: integers plainly, otherwise one decimal place.
fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn with_unit(quantity: &str, unit: &str) -> String {
    if unit.is_empty() {
        quantity.to_string()
    } else {
        format!("{} {}", quantity, unit)
    }
}

/// Merge two quantities of the same ingredient.
///
/// Same unit (case-insensitive, or both unit-less) and both positive: the
/// numeric sum. Otherwise the two are joined as text, `"2 cups + 1 tbsp"`.
pub fn combine_quantities(q1: &str, q2: &str, u1: &str, u2: &str) -> String {
    if q1.is_empty() {
        return q2.to_string();
    }
    if q2.is_empty() {
        return q1.to_string();
    }

    if u1.to_lowercase() == u2.to_lowercase() {
        let n1 = parse_quantity(q1);
        let n2 = parse_quantity(q2);
        if n1 > 0.0 && n2 > 0.0 {
            return format_quantity(n1 + n2);
        }
    }

    format!("{} + {}", with_unit(q1, u1), with_unit(q2, u2))
}
