//! Text formatting shared by the report sections.

use crate::model::Currency;

/// Printed when an identity or receipt field is blank.
pub const PLACEHOLDER: &str = "—";

/// Appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Format an amount with a currency symbol, thousands separators and two
/// decimals: `$1,234.56`, `-$1,234.56`. Non-finite amounts print as zero.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // A value that rounds to zero prints without a sign.
    let sign = if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", sign, currency_symbol(currency), grouped, cents)
}

/// Symbol printed before amounts.
pub fn currency_symbol(currency: Currency) -> &'static str {
    match currency {
        Currency::Usd | Currency::Cad => "$",
    }
}

/// Cut `text` to at most `max_chars` characters, ending with `…` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

/// Two-decimal distance.
pub fn format_distance(value: f64) -> String {
    format!("{:.2}", if value.is_finite() { value } else { 0.0 })
}

/// `value` unless blank, else the placeholder dash.
pub fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}
