//! Display Formatting
//!
//! Number, cost, date and model-name formatting shared by every panel.

/// Token count as `2.5M`, `2K` or the plain integer
pub fn format_tokens(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", (n / 1_000_000.0 * 10.0).round() / 10.0)
    } else if n >= 1_000.0 {
        format!("{}K", (n / 1_000.0).round() as u64)
    } else {
        format!("{}", n.round() as u64)
    }
}

/// Dollar amount with two decimals, halves rounded up
pub fn format_cost(n: f64) -> String {
    // Snap to 1e-6 cents first so 3.005 is not rounded from 300.49999...
    let cents = ((n * 100.0 * 1e6).round() / 1e6).round();
    format!("${:.2}", cents / 100.0)
}

/// First four `-`-separated segments, e.g. `claude-sonnet-4-20250514` stays
/// whole while `claude-3-5-sonnet-20241022` becomes `claude-3-5-sonnet`
pub fn short_model_name(name: &str) -> String {
    name.split('-').take(4).collect::<Vec<_>>().join("-")
}

/// Calendar date of an RFC 3339 timestamp, empty when unparseable
pub fn format_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens() {
        assert_eq!(format_tokens(0.0), "0");
        assert_eq!(format_tokens(999.0), "999");
        assert_eq!(format_tokens(1_500.0), "2K");
        assert_eq!(format_tokens(1_499.0), "1K");
        assert_eq!(format_tokens(2_500_000.0), "2.5M");
        assert_eq!(format_tokens(1_250_000.0), "1.3M");
        assert_eq!(format_tokens(12_000_000.0), "12.0M");
    }

    #[test]
    fn test_format_cost() {
        assert_eq!(format_cost(3.0), "$3.00");
        assert_eq!(format_cost(3.005), "$3.01");
        assert_eq!(format_cost(0.0), "$0.00");
        assert_eq!(format_cost(12.344), "$12.34");
        assert_eq!(format_cost(1.1), "$1.10");
    }

    #[test]
    fn test_short_model_name() {
        assert_eq!(short_model_name("claude-sonnet-4-20250514"), "claude-sonnet-4-20250514");
        assert_eq!(short_model_name("claude-3-5-sonnet-20241022"), "claude-3-5-sonnet");
        assert_eq!(short_model_name("opus"), "opus");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-02-03T10:00:00Z"), "Feb 03, 2026");
        assert_eq!(format_date("yesterday"), "");
    }
}
