pub mod ingredient;
pub mod numbers;

pub use ingredient::{extract_ingredient_name, parse_ingredient_line};
pub use numbers::{extract_categories, lenient_number, parse_number};
