//! Formatting primitives shared by every screen

/// Format an amount with the currency symbol and two decimals
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a cost with its billing cycle suffix, e.g. "€15.49 /monthly"
pub fn format_cost_with_cycle(amount: f64, suffix: &str, symbol: &str) -> String {
    format!("{} {}", format_money(amount, symbol), suffix)
}

/// Whole-number percentage, truncated
pub fn format_percentage(pct: f64) -> String {
    format!("{}%", pct.trunc() as i64)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(15.0, "€"), "€15.00");
        assert_eq!(format_money(1234.567, "€"), "€1234.57");
        assert_eq!(format_money(-3.5, "$"), "-$3.50");
        assert_eq!(format_money(0.0, "€"), "€0.00");
    }

    #[test]
    fn test_format_cost_with_cycle() {
        assert_eq!(format_cost_with_cycle(9.99, "/weekly", "€"), "€9.99 /weekly");
    }

    #[test]
    fn test_format_percentage_truncates() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(33.9), "33%");
        assert_eq!(format_percentage(100.0), "100%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0.0, 100.0, 10), "          ");
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(100.0, 100.0, 4), "████");
        assert_eq!(format_bar(200.0, 100.0, 4), "████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("Savings & Investments", 3), "...");
        assert_eq!(truncate("café crème", 7), "café...");
    }
}
