use super::ui;
use crate::core::format::{
    format_money, format_money_compact, format_ownership, format_percent, share_text,
};
use crate::core::{Company, OwnershipInput, OwnershipResult, ReferenceStore};
use anyhow::{Context, Result};
use comfy_table::Cell;
use serde::Serialize;
use tracing::{info, warn};

/// JSON shape of `slice --json`.
#[derive(Debug, Serialize)]
struct SliceReport<'a> {
    company_id: &'a str,
    company: Option<&'a Company>,
    currency: Option<&'static str>,
    share_count: Option<f64>,
    #[serde(flatten)]
    result: OwnershipResult,
}

impl OwnershipResult {
    /// Renders the holding as a table. `company` labels the figures and
    /// picks the currency symbol; without it amounts carry no symbol.
    pub fn display_as_table(&self, company: Option<&Company>) -> String {
        let symbol = company.map_or("", |c| c.market.currency_symbol());

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Metric"),
            ui::header_cell("Value"),
            ui::header_cell("Meaning"),
        ]);

        table.add_row(vec![
            Cell::new("Share price"),
            ui::value_cell(format_money(symbol, self.share_price)),
            ui::note_cell("Market capitalisation divided by shares outstanding"),
        ]);
        table.add_row(vec![
            Cell::new("Your ownership"),
            ui::highlight_cell(format!("{}%", format_ownership(self.ownership_percentage))),
            ui::note_cell("Your percentage ownership of the company's total shares"),
        ]);
        table.add_row(vec![
            Cell::new("Revenue share"),
            ui::value_cell(format_money_compact(symbol, self.revenue_share as f64)),
            ui::note_cell("Your portion of the company's annual revenue based on your ownership"),
        ]);
        table.add_row(vec![
            Cell::new("Profit share"),
            ui::signed_cell(
                self.profit_share as f64,
                format_money_compact(symbol, self.profit_share as f64),
            ),
            ui::note_cell("Your portion of the company's annual profit based on your ownership"),
        ]);
        table.add_row(vec![
            Cell::new("Quarterly dividend income"),
            ui::value_cell(format_money(symbol, self.quarterly_dividend_income)),
            ui::note_cell("Dividend payment expected each quarter"),
        ]);
        table.add_row(vec![
            Cell::new("Annual dividend income"),
            ui::highlight_cell(format_money(symbol, self.annual_dividend_income)),
            ui::note_cell("Expected annual dividend payments based on current dividend rate"),
        ]);
        add_company_rows(
            &mut table,
            self.dividend_yield_percent,
            self.profit_margin_percent,
            self.return_on_investment_percent,
        );

        table.to_string()
    }
}

/// Rows shared with the `company` view.
pub(crate) fn add_company_rows(
    table: &mut comfy_table::Table,
    dividend_yield: f64,
    profit_margin: f64,
    return_on_investment: f64,
) {
    table.add_row(vec![
        Cell::new("Dividend yield"),
        ui::value_cell(format_percent(dividend_yield)),
        ui::note_cell("Annual dividend payments as a percentage of the current share price"),
    ]);
    table.add_row(vec![
        Cell::new("Profit margin"),
        ui::signed_cell(profit_margin, format_percent(profit_margin)),
        ui::note_cell("How much of each dollar of revenue becomes profit"),
    ]);
    table.add_row(vec![
        Cell::new("Return on investment"),
        ui::signed_cell(return_on_investment, format_percent(return_on_investment)),
        ui::note_cell("The company's earnings relative to share price"),
    ]);
}

/// Computes and renders a holding. Unknown tickers and unusable share counts
/// render zeroed figures with a warning instead of failing.
pub fn render(store: &ReferenceStore, ticker: &str, shares: &str, json: bool) -> Result<String> {
    let input = OwnershipInput::from_text(ticker, shares);
    let company = store.company(&input.company_id);
    let result = input.compute(store);
    info!(ticker, share_count = ?input.share_count, "Calculated slice");

    if json {
        let report = SliceReport {
            company_id: &input.company_id,
            company,
            currency: company.map(|c| c.market.currency()),
            share_count: input.share_count,
            result,
        };
        return serde_json::to_string_pretty(&report).context("Failed to serialize slice");
    }

    let mut output = String::new();
    match company {
        Some(c) => output.push_str(&format!(
            "Your slice of {} ({}:{})\n\n",
            ui::style_text(&c.name, ui::StyleType::Title),
            c.exchange,
            c.id
        )),
        None => {
            warn!(ticker, "No reference data for ticker");
            output.push_str(&ui::style_text(
                &format!("No data available for {ticker}, showing empty figures\n\n"),
                ui::StyleType::Warning,
            ));
        }
    }
    if input.share_count.is_none() {
        output.push_str(&ui::style_text(
            &format!("'{shares}' is not a number of shares, showing company figures only\n\n"),
            ui::StyleType::Warning,
        ));
    }

    output.push_str(&result.display_as_table(company));

    if let Some(c) = company {
        output.push_str(&format!(
            "\n\n{}\n\n{}",
            ui::disclaimer(c.market.currency()),
            share_text(c, &result)
        ));
    }
    Ok(output)
}

pub fn run(store: &ReferenceStore, ticker: &str, shares: &str, json: bool) -> Result<()> {
    println!("{}", render(store, ticker, shares, json)?);
    Ok(())
}
