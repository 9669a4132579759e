//! Formatting utilities used for CLI and export outputs.

/// `₪12,345` style amount, no decimals unless the value has a fraction.
pub fn money(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let frac = (rounded.fract().abs() * 100.0).round() as i64;

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    if frac == 0 {
        format!("{sign}₪{grouped}")
    } else {
        format!("{sign}₪{grouped}.{frac:02}")
    }
}

/// Hours without trailing zeros: `8`, `10.5`, `8.33`.
pub fn hours(h: f64) -> String {
    let s = format!("{:.2}", h);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Cut `s` to at most `max` characters, ending with `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(50000.0), "₪50,000");
        assert_eq!(money(512.0), "₪512");
        assert_eq!(money(1234.5), "₪1,234.50");
    }

    #[test]
    fn hours_drops_trailing_zeros() {
        assert_eq!(hours(8.0), "8");
        assert_eq!(hours(10.5), "10.5");
        assert_eq!(hours(8.333), "8.33");
    }
}
