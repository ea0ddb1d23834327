//! Display formatting for amounts and percentages.
use crate::core::company::Company;
use crate::core::ownership::OwnershipResult;

/// Formats with two decimals and `,` thousands grouping, e.g. `1,234.50`.
pub fn format_currency(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if value < 0.0 && rounded != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}{}.{frac}", group_thousands(whole))
}

/// Like [`format_currency`] with a currency symbol placed after the sign,
/// e.g. `-A$12.00`.
pub fn format_money(symbol: &str, value: f64) -> String {
    let formatted = format_currency(value);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{symbol}{rest}"),
        None => format!("{symbol}{formatted}"),
    }
}

/// Abbreviates millions, billions and trillions with one decimal
/// (`2.5B`). Smaller magnitudes are printed as is.
pub fn format_large_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e12 {
        format!("{:.1}T", value / 1e12)
    } else if magnitude >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else {
        format!("{value}")
    }
}

/// Money amount that switches to [`format_large_number`] from a million
/// upwards, e.g. `$2.5B`.
pub fn format_money_compact(symbol: &str, value: f64) -> String {
    if value.abs() < 1e6 {
        return format_money(symbol, value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{}", format_large_number(value.abs()))
}

/// Ownership percentages are usually tiny, so keep up to nine decimals and
/// drop trailing zeros: `0.000000645`.
pub fn format_ownership(percentage: f64) -> String {
    let fixed = format!("{percentage:.9}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Short message describing a holding, suitable for sharing. Ownership uses
/// [`format_ownership`] so it agrees with the ownership table row.
pub fn share_text(company: &Company, result: &OwnershipResult) -> String {
    format!(
        "Check out my slice of {}: {}% ownership generating {} in annual dividends!",
        company.name,
        format_ownership(result.ownership_percentage),
        format_money(
            company.market.currency_symbol(),
            result.annual_dividend_income
        )
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::company::Market;
    use crate::core::ownership::compute_ownership;
    use crate::core::store::ReferenceStore;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(96.0), "96.00");
        assert_eq!(format_currency(187.096774), "187.10");
        assert_eq!(format_currency(1234.5), "1,234.50");
        assert_eq!(format_currency(1_234_567.891), "1,234,567.89");
        assert_eq!(format_currency(100_000.0), "100,000.00");
        assert_eq!(format_currency(-2500.0), "-2,500.00");
        assert_eq!(format_currency(-0.001), "0.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("$", 24.0), "$24.00");
        assert_eq!(format_money("A$", -1500.0), "-A$1,500.00");
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(2477.0), "2477");
        assert_eq!(format_large_number(999_999.0), "999999");
        assert_eq!(format_large_number(1_000_000.0), "1.0M");
        assert_eq!(format_large_number(383_900_000_000.0), "383.9B");
        assert_eq!(format_large_number(2_900_000_000_000.0), "2.9T");
        assert_eq!(format_large_number(-2_500_000.0), "-2.5M");
    }

    #[test]
    fn test_format_money_compact() {
        assert_eq!(format_money_compact("$", 2477.0), "$2,477.00");
        assert_eq!(format_money_compact("$", 2_476_774_194.0), "$2.5B");
        assert_eq!(format_money_compact("A$", -3_200_000.0), "-A$3.2M");
    }

    #[test]
    fn test_large_revenue_share_abbreviates_to_billions() {
        let store = ReferenceStore::builtin();
        let result = compute_ownership("AAPL", Some(100_000_000.0), &store);
        assert!(result.revenue_share >= 1_000_000_000);
        assert_eq!(format_large_number(result.revenue_share as f64), "2.5B");
    }

    #[test]
    fn test_format_ownership() {
        assert_eq!(format_ownership(0.0), "0");
        assert_eq!(format_ownership(6.451612903225806e-7), "0.000000645");
        assert_eq!(format_ownership(1.5), "1.5");
        assert_eq!(format_ownership(100.0), "100");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.51), "0.51%");
        assert_eq!(format_percent(25.265694), "25.27%");
    }

    #[test]
    fn test_share_text() {
        let store = ReferenceStore::builtin();
        let company = store.company("AAPL").unwrap();
        let result = compute_ownership("AAPL", Some(100.0), &store);
        // Same precision as the ownership row, not rounded to six decimals
        assert!(!share_text(company, &result).contains("0.000001%"));
        assert_eq!(
            share_text(company, &result),
            "Check out my slice of Apple Inc.: 0.000000645% ownership generating $96.00 in annual dividends!"
        );

        let company = Company {
            id: "CBA".to_string(),
            name: "Commonwealth Bank".to_string(),
            exchange: "ASX".to_string(),
            market: Market::Australia,
        };
        let result = compute_ownership("CBA", Some(10.0), &store);
        assert!(share_text(&company, &result).contains("A$46.00"));
    }
}
