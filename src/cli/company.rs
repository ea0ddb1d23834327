use super::{slice, ui};
use crate::core::format::{format_money, format_money_compact};
use crate::core::ownership::MILLION;
use crate::core::{CompanyLookup, CompanyMetrics, ReferenceStore};
use anyhow::{Result, anyhow};
use comfy_table::Cell;

/// Renders the company-wide figures of `ticker`.
pub fn render(store: &ReferenceStore, ticker: &str) -> Result<String> {
    let (company, snapshot) = store
        .company(ticker)
        .zip(store.get(ticker))
        .ok_or_else(|| anyhow!("No reference data for {ticker}"))?;
    let metrics = CompanyMetrics::from_snapshot(snapshot);
    let symbol = company.market.currency_symbol();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Metric"),
        ui::header_cell(&format!("Value ({})", company.market.currency())),
        ui::header_cell("Meaning"),
    ]);
    table.add_row(vec![
        Cell::new("Share price"),
        ui::highlight_cell(format_money(symbol, metrics.share_price)),
        ui::note_cell("Market capitalisation divided by shares outstanding"),
    ]);
    table.add_row(vec![
        Cell::new("Market cap"),
        ui::value_cell(format_money_compact(symbol, snapshot.market_cap * MILLION)),
        ui::note_cell("Total value of all shares"),
    ]);
    table.add_row(vec![
        Cell::new("Shares outstanding"),
        ui::value_cell(format_money_compact("", snapshot.shares_outstanding * MILLION)),
        ui::note_cell("Number of shares the company has issued"),
    ]);
    table.add_row(vec![
        Cell::new("Annual revenue"),
        ui::value_cell(format_money_compact(symbol, snapshot.annual_revenue * MILLION)),
        ui::note_cell("Sales over the last reported year"),
    ]);
    table.add_row(vec![
        Cell::new("Annual profit"),
        ui::signed_cell(
            snapshot.annual_profit,
            format_money_compact(symbol, snapshot.annual_profit * MILLION),
        ),
        ui::note_cell("Earnings over the last reported year"),
    ]);
    table.add_row(vec![
        Cell::new("Quarterly dividend"),
        ui::value_cell(format_money(symbol, snapshot.quarterly_dividend)),
        ui::note_cell("Dividend paid per share each quarter"),
    ]);
    slice::add_company_rows(
        &mut table,
        metrics.dividend_yield_percent,
        metrics.profit_margin_percent,
        metrics.return_on_investment_percent,
    );

    Ok(format!(
        "{} ({}:{})\n\n{}\n\n{}",
        ui::style_text(&company.name, ui::StyleType::Title),
        company.exchange,
        company.id,
        table,
        ui::disclaimer(company.market.currency())
    ))
}

pub fn run(store: &ReferenceStore, ticker: &str) -> Result<()> {
    println!("{}", render(store, ticker)?);
    Ok(())
}
