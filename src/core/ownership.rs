//! Ownership metrics derived from a share count and a company's reference
//! figures.
//!
//! Every calculation here is total: an unknown company or a missing share
//! count produces zeroed metrics rather than an error, so a caller always has
//! something to render.
use crate::core::company::CompanySnapshot;
use crate::core::store::CompanyLookup;
use rust_decimal::{Decimal, prelude::*};
use serde::Serialize;
use tracing::debug;

/// Reference figures are stored in millions.
pub const MILLION: f64 = 1_000_000.0;

/// A single calculation request: which company, and how many shares.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipInput {
    pub company_id: String,
    pub share_count: Option<f64>,
}

impl OwnershipInput {
    pub fn new(company_id: impl Into<String>, share_count: Option<f64>) -> Self {
        Self {
            company_id: company_id.into(),
            share_count,
        }
    }

    /// Builds an input from free-text share entry, see [`parse_share_count`].
    pub fn from_text(company_id: impl Into<String>, shares: &str) -> Self {
        Self::new(company_id, parse_share_count(shares))
    }

    pub fn compute<L: CompanyLookup + ?Sized>(&self, store: &L) -> OwnershipResult {
        compute_ownership(&self.company_id, self.share_count, store)
    }
}

/// Metrics for one holding. All zero when the company is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OwnershipResult {
    pub share_price: f64,
    pub ownership_percentage: f64,
    pub revenue_share: i64,
    pub profit_share: i64,
    pub quarterly_dividend_income: f64,
    pub annual_dividend_income: f64,
    pub dividend_yield_percent: f64,
    /// Earnings yield. Dividend yield is reported separately and not added in.
    pub return_on_investment_percent: f64,
    pub profit_margin_percent: f64,
}

/// Metrics that depend only on the company, not on the holding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CompanyMetrics {
    pub share_price: f64,
    pub dividend_yield_percent: f64,
    pub return_on_investment_percent: f64,
    pub profit_margin_percent: f64,
}

impl CompanyMetrics {
    pub fn from_snapshot(snapshot: &CompanySnapshot) -> Self {
        let share_price = share_price(snapshot);
        let dividend_yield = (snapshot.quarterly_dividend * 4.0) / share_price * 100.0;
        let earnings_yield = ((snapshot.annual_profit * MILLION)
            / (snapshot.shares_outstanding * MILLION)
            / share_price)
            * 100.0;

        Self {
            share_price,
            dividend_yield_percent: round_dp(dividend_yield, 2),
            return_on_investment_percent: round_dp(earnings_yield, 2),
            profit_margin_percent: profit_margin(snapshot.annual_revenue, snapshot.annual_profit),
        }
    }
}

/// Derived price per share. Positive for any snapshot held by a store.
pub fn share_price(snapshot: &CompanySnapshot) -> f64 {
    (snapshot.market_cap * MILLION) / (snapshot.shares_outstanding * MILLION)
}

/// Profit as a percentage of revenue, or zero when there is no revenue.
pub fn profit_margin(revenue: f64, profit: f64) -> f64 {
    if revenue > 0.0 {
        (profit / revenue) * 100.0
    } else {
        0.0
    }
}

/// Company-wide metrics, `None` when the company is not in the store.
pub fn company_metrics<L: CompanyLookup + ?Sized>(
    company_id: &str,
    store: &L,
) -> Option<CompanyMetrics> {
    store.get(company_id).map(CompanyMetrics::from_snapshot)
}

/// Derives the ownership metrics of `share_count` shares in `company_id`.
///
/// An unresolved company yields [`OwnershipResult::default`]. A missing,
/// negative or non-finite share count zeroes the holding metrics but keeps
/// the company-wide ones (price, yields, margin).
pub fn compute_ownership<L: CompanyLookup + ?Sized>(
    company_id: &str,
    share_count: Option<f64>,
    store: &L,
) -> OwnershipResult {
    let Some(snapshot) = store.get(company_id) else {
        debug!(company_id, "No reference data, returning empty result");
        return OwnershipResult::default();
    };

    let company = CompanyMetrics::from_snapshot(snapshot);
    let mut result = OwnershipResult {
        share_price: company.share_price,
        dividend_yield_percent: company.dividend_yield_percent,
        return_on_investment_percent: company.return_on_investment_percent,
        profit_margin_percent: company.profit_margin_percent,
        ..Default::default()
    };

    let Some(shares) = share_count.filter(|s| s.is_finite() && *s >= 0.0) else {
        debug!(company_id, ?share_count, "No holding, company metrics only");
        return result;
    };

    let ownership_percentage = (shares / (snapshot.shares_outstanding * MILLION)) * 100.0;
    let quarterly_dividend_income = round_dp(shares * snapshot.quarterly_dividend, 2);

    result.ownership_percentage = ownership_percentage;
    result.revenue_share =
        round_whole(snapshot.annual_revenue * MILLION * (ownership_percentage / 100.0));
    result.profit_share =
        round_whole(snapshot.annual_profit * MILLION * (ownership_percentage / 100.0));
    result.quarterly_dividend_income = quarterly_dividend_income;
    result.annual_dividend_income = round_dp(quarterly_dividend_income * 4.0, 2);

    debug!(company_id, shares, ?result, "Computed ownership");
    result
}

/// Strips everything but digits and the first decimal point from free-text
/// share entry, e.g. `"1,250.5 shares"` becomes `"1250.5"`.
pub fn sanitize_share_input(input: &str) -> String {
    let mut seen_point = false;
    input
        .chars()
        .filter(|c| match *c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Parses free-text share entry. Empty or unparseable input is `None`.
pub fn parse_share_count(input: &str) -> Option<f64> {
    let cleaned = sanitize_share_input(input);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Rounds to `dp` decimals. Values outside `Decimal`'s range are rounded
/// as floats; non-finite values become zero.
fn round_dp(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or_else(|| {
            let scale = 10f64.powi(dp as i32);
            (value * scale).round() / scale
        })
}

/// Rounds to a whole amount, saturating at the bounds of `i64`.
fn round_whole(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_i64())
        .unwrap_or_else(|| {
            debug!(value, "Whole amount outside i64 range, saturating");
            // `as` saturates at i64::MIN/MAX
            value.round() as i64
        })
}
