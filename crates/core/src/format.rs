//! Display formatting shared by the rendering surface and the CSV export.

const RUPEE: char = '₹';

/// Group an integer the Indian way: last three digits, then pairs.
/// `12345678` → `"1,23,45,678"`.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Fraction digits kept, as en-IN locale formatting does by default.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Magnitude rounded to at most three decimals, with insignificant trailing
/// zeros dropped.
fn format_magnitude(amount: f64) -> String {
    let scale = 10u64.pow(MAX_FRACTION_DIGITS);
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let whole = group_indian(scaled / scale);
    let frac = scaled % scale;
    if frac == 0 {
        whole
    } else {
        let frac = format!("{frac:0width$}", width = MAX_FRACTION_DIGITS as usize);
        format!("{whole}.{}", frac.trim_end_matches('0'))
    }
}

/// `2340.0` → `"₹2,340"`, `-340.0` → `"-₹340"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 && format_magnitude(amount) != "0" {
        format!("-{RUPEE}{}", format_magnitude(amount))
    } else {
        format!("{RUPEE}{}", format_magnitude(amount))
    }
}

/// Always carries a sign: `"+₹1,250"` / `"-₹340"`.
#[must_use]
pub fn format_pnl(amount: f64) -> String {
    let sign = if amount >= 0.0 || format_magnitude(amount) == "0" { '+' } else { '-' };
    format!("{sign}{RUPEE}{}", format_magnitude(amount))
}

/// Fixed two decimals, for quotes: `45.5` → `"₹45.50"`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{RUPEE}{price:.2}")
}

/// `12.4` → `"+12.40%"`, `-0.8` → `"-0.80%"`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}
