//! Console formatting for report values.

use chrono::DateTime;

const NO_DEADLINE: &str = "none";

/// Formats an amount as dollars with thousands separators, e.g. `$5,500.00`.
pub fn currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Formats epoch milliseconds as a UTC timestamp.
pub fn timestamp(epoch_ms: Option<i64>) -> String {
    epoch_ms
        .and_then(DateTime::from_timestamp_millis)
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| NO_DEADLINE.to_string())
}

#[cfg(test)]
mod tests {
    use super::{currency, timestamp};

    #[test]
    fn currency_groups_thousands_and_rounds_cents() {
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(5500.0), "$5,500.00");
        assert_eq!(currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(currency(210.0), "$210.00");
        assert_eq!(currency(-42.5), "-$42.50");
    }

    #[test]
    fn timestamp_formats_utc_or_none() {
        assert_eq!(timestamp(Some(0)), "1970-01-01 00:00:00 UTC");
        assert_eq!(timestamp(None), "none");
    }
}
