use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right aligned cell for numbers.
pub fn value_cell(text: impl Into<String>) -> Cell {
    Cell::new(text.into()).set_alignment(CellAlignment::Right)
}

/// Bold green right aligned cell for the figures a table is about.
pub fn highlight_cell(text: impl Into<String>) -> Cell {
    value_cell(text)
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
}

/// Right aligned cell colored by the sign of `value`.
pub fn signed_cell(value: f64, text: impl Into<String>) -> Cell {
    let color = if value >= 0.0 { Color::Green } else { Color::Red };
    value_cell(text).fg(color)
}

/// Dim cell for explanatory text.
pub fn note_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

/// Footnote shown below calculated figures.
pub fn disclaimer(currency: &str) -> String {
    style_text(
        &format!(
            "All calculations are based on the company's most recent annual report and shown in {currency}. \
             These numbers help you understand the company's current position, but remember that \
             performance changes over time."
        ),
        StyleType::Subtle,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclaimer_names_currency() {
        console::set_colors_enabled(false);
        let text = disclaimer("AUD");
        assert!(text.contains("shown in AUD."));
    }

    #[test]
    fn test_styled_table_renders_rows() {
        let mut table = new_styled_table();
        table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
        table.add_row(vec![Cell::new("Share price"), value_cell("$187.10")]);
        let rendered = table.to_string();
        assert!(rendered.contains("Share price"));
        assert!(rendered.contains("$187.10"));
    }
}
