//! Category CLI command

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Category")]
    name: &'static str,
}

/// Format the fixed category list in picker order
pub fn format_category_list() -> String {
    let rows = Category::ALL.iter().enumerate().map(|(i, c)| CategoryRow {
        index: i + 1,
        name: c.name(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Handle `track categories`
pub fn handle_categories_command() {
    print!("{}", format_category_list());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_category() {
        let output = format_category_list();
        for category in Category::ALL {
            assert!(output.contains(category.name()));
        }
    }
}
