//! Compact number formatting for the HUD.
//!
//! Large amounts are shortened by the digit count of their integer part:
//! every three digits step one suffix up, and the scaled value keeps three
//! significant digits. A seven-digit amount is shown in millions, but so is a
//! six-digit one (`$0.1M`).

const MONEY_SUFFIXES: [&str; 12] = ["", "k", "M", "B", "T", "q", "Q", "s", "S", "O", "N", "d"];
const COUNT_SUFFIXES: [&str; 7] = ["", "k", "M", "B", "T", "q", "Q"];

/// Formats a currency amount, e.g. `$12.50`, `$1.23k`, `$5M`.
pub fn format_money(amount: f64) -> String {
    if !(amount >= 1000.0) {
        return format!("${:.2}", amount);
    }

    let (scaled, suffix) = shorten(amount, &MONEY_SUFFIXES);
    let mut value = round_significant(scaled, 3);
    if value.fract() != 0.0 {
        value = round_decimals(value, 2);
    }
    format!("${}{}", value, suffix)
}

/// Formats a count such as the herd size, e.g. `42`, `1.5k`.
pub fn format_number(count: f64) -> String {
    if !(count >= 1000.0) {
        return (count.floor() as i64).to_string();
    }

    let (scaled, suffix) = shorten(count, &COUNT_SUFFIXES);
    format!("{}{}", round_significant(scaled, 3), suffix)
}

fn shorten(value: f64, suffixes: &[&'static str]) -> (f64, &'static str) {
    let digits = format!("{:.0}", value.floor()).len();
    let index = (digits / 3).min(suffixes.len() - 1);
    let scaled = if index == 0 {
        value
    } else {
        value / 1000f64.powi(index as i32)
    };
    (scaled, suffixes[index])
}

fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let shift = digits - 1 - magnitude;
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (value / factor).round() * factor
    }
}

fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
