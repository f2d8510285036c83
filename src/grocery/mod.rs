pub mod consolidate;
pub mod export;
pub mod lookup;
pub mod quantity;

pub use consolidate::{generate_grocery_list, group_by_category, group_by_store};
pub use export::{build_markdown, export_csv, export_markdown, write_csv};
pub use lookup::{CategoryLookup, HeuristicLookup, StoreLookup, guess_category};
pub use quantity::{combine_quantities, parse_quantity};
