//! Formatting helpers for presenting statistics.

/// `1234567` → `1,234,567` for the engagement counters.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-number percentage label, e.g. `40%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Lowercase hyphen-separated identifier, shared by export filenames and
/// SVG gradient ids: `"Weekly Positive Sentiment"` → `weekly-positive-sentiment`.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_hyphen = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("chart");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn percents_round_to_whole_numbers() {
        assert_eq!(format_percent(40.0), "40%");
        assert_eq!(format_percent(66.6), "67%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn slugs_are_lowercase_and_hyphenated() {
        assert_eq!(slugify("Weekly Positive Sentiment"), "weekly-positive-sentiment");
        assert_eq!(slugify("Real-time Activity"), "real-time-activity");
        assert_eq!(slugify("  Sentiment   Trends!  "), "sentiment-trends");
        assert_eq!(slugify("日本語"), "chart");
    }
}
