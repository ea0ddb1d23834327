use super::ui;
use crate::core::format::{format_money, format_money_compact, format_percent};
use crate::core::ownership::MILLION;
use crate::core::{CompanyLookup, Market, ReferenceStore, company_metrics};
use comfy_table::Cell;
use tracing::debug;

/// Lists the companies of `market` matching `query` with their headline
/// figures.
pub fn render(store: &ReferenceStore, market: Market, query: &str) -> String {
    let matches = store.search(market, query);
    debug!(%market, query, count = matches.len(), "Searched companies");

    if matches.is_empty() {
        return ui::style_text(
            &format!("No companies in {} match '{query}'.", market.name()),
            ui::StyleType::Warning,
        );
    }

    let symbol = market.currency_symbol();
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Ticker"),
        ui::header_cell("Company"),
        ui::header_cell("Exchange"),
        ui::header_cell("Share price"),
        ui::header_cell("Market cap"),
        ui::header_cell("Dividend yield"),
    ]);

    for company in matches {
        let (Some(snapshot), Some(metrics)) = (
            store.get(&company.id),
            company_metrics(&company.id, store),
        ) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(&company.id),
            Cell::new(&company.name),
            Cell::new(&company.exchange),
            ui::value_cell(format_money(symbol, metrics.share_price)),
            ui::value_cell(format_money_compact(symbol, snapshot.market_cap * MILLION)),
            ui::value_cell(format_percent(metrics.dividend_yield_percent)),
        ]);
    }

    format!(
        "Companies in {} ({})\n\n{}",
        ui::style_text(market.name(), ui::StyleType::Title),
        ui::style_text(market.currency(), ui::StyleType::TotalLabel),
        table
    )
}

pub fn run(store: &ReferenceStore, market: Market, query: &str) {
    println!("{}", render(store, market, query));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_market() {
        console::set_colors_enabled(false);
        let store = ReferenceStore::builtin();
        let output = render(&store, Market::Australia, "");

        assert!(output.contains("Companies in Australia (AUD)"));
        for name in ["Woolworths Group", "Commonwealth Bank", "BHP Group"] {
            assert!(output.contains(name), "missing {name}");
        }
        assert!(!output.contains("Apple Inc."));
        assert!(output.contains("A$37.50"));
    }

    #[test]
    fn test_render_query() {
        console::set_colors_enabled(false);
        let store = ReferenceStore::builtin();
        let output = render(&store, Market::UnitedStates, "apple");

        assert!(output.contains("Apple Inc."));
        assert!(!output.contains("Microsoft"));
        assert!(output.contains("$2.9T"));
    }

    #[test]
    fn test_render_no_match() {
        console::set_colors_enabled(false);
        let store = ReferenceStore::builtin();
        let output = render(&store, Market::Australia, "tesla");
        assert_eq!(output, "No companies in Australia match 'tesla'.");
    }
}
