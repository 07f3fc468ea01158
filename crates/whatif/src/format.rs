//! Display formatting for raw engine numbers
//!
//! The engine only ever returns raw `f64`s; everything user-facing is
//! formatted here.

/// Insert thousands separators into a non-negative integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// Format a currency value with cents: `$1,234.50`, `-$12.00`.
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let dollars = abs_value as i64;
    let cents = ((abs_value - dollars as f64) * 100.0).round() as i64;
    let (dollars, cents) = if cents >= 100 {
        (dollars + 1, 0)
    } else {
        (dollars, cents)
    };

    let formatted = group_thousands(&dollars.to_string());
    if value >= 0.0 {
        format!("${formatted}.{cents:02}")
    } else {
        format!("-${formatted}.{cents:02}")
    }
}

/// Format a profit/loss with an explicit sign: `+$1,000.00`, `-$500.00`.
pub fn format_signed_currency(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50).
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.1}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Format an asset quantity: at least 2 decimals, up to 4 for amounts of one
/// or more, up to 8 below that (sub-dollar coins need the extra digits).
pub fn format_quantity(value: f64) -> String {
    let precision = if value.abs() >= 1.0 { 4 } else { 8 };
    let fixed = format!("{value:.precision$}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_trimmed = frac_part.trim_end_matches('0');

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    format!("{sign}{}.{:0<2}", group_thousands(digits), frac_trimmed)
}

/// Format a plain calculator result: integers without decimals, otherwise up
/// to 6 decimals with float dust rounded away.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1e10).round() / 1e10;
    let (sign, abs_value) = if rounded < 0.0 {
        ("-", -rounded)
    } else {
        ("", rounded)
    };

    let int_part = group_thousands(&(abs_value.trunc() as i64).to_string());
    let fixed = format!("{abs_value:.6}");
    let frac_part = fixed
        .split_once('.')
        .map(|(_, frac)| frac.trim_end_matches('0'))
        .unwrap_or("");

    if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    }
}

/// Format a month offset for chart labels: "Now", "9mo", "1.5yr".
pub fn format_month(month: f64) -> String {
    if month == 0.0 {
        return "Now".to_string();
    }
    if month >= 12.0 {
        let years = month / 12.0;
        if years.fract() == 0.0 {
            return format!("{years:.0}yr");
        }
        return format!("{years:.1}yr");
    }
    format!("{:.0}mo", month.round())
}

/// Format a value multiplier: "0x", "2x", "2.5x", "137x".
pub fn format_multiplier(multiplier: f64) -> String {
    if multiplier <= 0.0 {
        return "0x".to_string();
    }
    if multiplier.fract() == 0.0 {
        return format!("{multiplier:.0}x");
    }
    if multiplier >= 100.0 {
        format!("{:.0}x", multiplier.round())
    } else if multiplier >= 10.0 {
        format!("{:.1}x", (multiplier * 10.0).round() / 10.0)
    } else {
        format!("{:.2}x", (multiplier * 100.0).round() / 100.0)
    }
}
