//! Display formatting for rupee, dollar and percentage values.

use itax_core::calculations::common::{round_half_up, round_rupees};
use rust_decimal::Decimal;

/// Groups a string of digits the Indian way: last three, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
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
    format!("{},{tail}", groups.join(","))
}

fn group_western(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole rupees with Indian digit grouping, e.g. `₹12,50,000`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_rupees(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&rounded.abs().trunc().to_string()))
}

/// Whole dollars with Western digit grouping, e.g. `$85,980`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_western(&format!("{:.0}", rounded.abs())))
}

/// A fraction as a percentage with at most two decimals, e.g. `0.11856` as `11.86%`.
pub fn format_percent(fraction: Decimal) -> String {
    let percent = round_half_up(fraction * Decimal::ONE_HUNDRED).normalize();
    format!("{percent}%")
}
