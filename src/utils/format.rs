//! Output formatting utilities

/// Truncate a string to a maximum number of characters, marking the cut with "...".
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len < 3 {
        return "...".to_string();
    }
    let trimmed: String = s.chars().take(max_len - 3).collect();
    format!("{trimmed}...")
}

/// Format a cap amount as `$N`.
pub fn format_salary(amount: impl Into<i64>) -> String {
    let amount = amount.into();
    if amount < 0 {
        format!("-${}", amount.unsigned_abs())
    } else {
        format!("${amount}")
    }
}

/// `"N players"` with the singular form for one.
pub fn pluralize_players(count: usize) -> String {
    if count == 1 {
        "1 player".to_string()
    } else {
        format!("{count} players")
    }
}
