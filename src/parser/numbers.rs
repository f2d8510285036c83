use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+)\s*[–\-]\s*([\d.]+)").expect("range pattern"));
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+)").expect("number pattern"));
static FOLDER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("folder prefix pattern"));

/// Parse a numeric recipe field written as free text.
///
/// Handles "~380–420" (rounded average), "11g", and "4–6 (12 taquitos)".
/// Anything without a number is 0.
pub fn parse_number(value: &str) -> f64 {
    let cleaned: String = value.chars().filter(|c| *c != '~' && *c != 'g').collect();

    if let Some(caps) = RANGE_RE.captures(&cleaned) {
        let low: f64 = caps[1].parse().unwrap_or(0.0);
        let high: f64 = caps[2].parse().unwrap_or(0.0);
        return ((low + high) / 2.0).round();
    }

    NUMBER_RE
        .captures(&cleaned)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0.0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Serde adapter accepting either a JSON number or free text for numeric fields.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => parse_number(&s),
        None => 0.0,
    })
}

/// Derive `(category, subcategory)` from a recipe path.
///
/// `Recipes/4. Mains/Chicken/file.md` gives `("Mains", "Chicken")`: the
/// root folder and file name are dropped, numeric prefixes are stripped.
pub fn extract_categories(path: &str) -> (String, String) {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() < 3 {
        return (String::new(), String::new());
    }
    let folders = &parts[1..parts.len() - 1];

    let strip = |folder: &str| FOLDER_PREFIX_RE.replace(folder, "").to_string();
    let category = folders.first().map(|f| strip(f)).unwrap_or_default();
    let subcategory = folders.get(1).map(|f| strip(f)).unwrap_or_default();

    (category, subcategory)
}
