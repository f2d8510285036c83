use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::grocery::consolidate::group_by_category;
use crate::models::{DEFAULT_STORE, GroceryItem};

/// One checklist line: `- [ ] {qty}{ unit} {name}{ @store}`.
fn checklist_line(item: &GroceryItem) -> String {
    let mut line = String::from(if item.checked { "- [x] " } else { "- [ ] " });

    if !item.quantity.is_empty() {
        line.push_str(&item.quantity);
        if !item.unit.is_empty() {
            line.push(' ');
            line.push_str(&item.unit);
        }
        line.push(' ');
    }
    line.push_str(&item.name);

    if item.store != DEFAULT_STORE && !item.store.is_empty() {
        line.push_str(" @");
        line.push_str(&item.store);
    }
    line
}

/// Render a consolidated list as a markdown checklist grouped by category.
pub fn build_markdown(items: &[GroceryItem], recipe_titles: &[String]) -> String {
    let mut out = String::from("# Grocery list\n\n");

    if !recipe_titles.is_empty() {
        out.push_str(&format!("**Recipes:** {}\n\n", recipe_titles.join(", ")));
    }

    for (category, members) in group_by_category(items) {
        out.push_str(&format!("## {}\n", category.label()));
        for item in members {
            out.push_str(&checklist_line(item));
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

pub fn export_markdown<P: AsRef<Path>>(
    path: P,
    items: &[GroceryItem],
    recipe_titles: &[String],
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, build_markdown(items, recipe_titles))?;
    info!(path = %path.display(), items = items.len(), "exported grocery checklist");
    Ok(())
}

/// Write items as CSV, one row per item. `from_recipes` is joined with "; ".
pub fn write_csv<W: io::Write>(writer: W, items: &[GroceryItem]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "name",
        "quantity",
        "unit",
        "category",
        "store",
        "from_recipes",
        "checked",
    ])?;

    for item in items {
        let checked = item.checked.to_string();
        wtr.write_record([
            item.name.as_str(),
            item.quantity.as_str(),
            item.unit.as_str(),
            item.category.as_str(),
            item.store.as_str(),
            item.from_recipes.join("; ").as_str(),
            checked.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_csv<P: AsRef<Path>>(path: P, items: &[GroceryItem]) -> Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path)?;
    write_csv(file, items)?;
    info!(path = %path.display(), items = items.len(), "exported grocery csv");
    Ok(())
}
