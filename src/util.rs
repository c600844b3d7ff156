//! Small text helpers shared across the insight builders.

/// Capitalize the first letter and lower-case the remainder.
///
/// Example: "sARAH" → "Sarah"
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Collapse newlines and runs of whitespace into single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max` characters, marking the cut with `...`.
///
/// Counts characters, not bytes, so multi-byte input never splits.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Append a period unless the text already ends in terminal punctuation.
pub fn ensure_terminal_punctuation(s: &str) -> String {
    match s.chars().last() {
        Some('.') | Some('!') | Some('?') => s.to_string(),
        _ => format!("{}.", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("john"), "John");
        assert_eq!(capitalize_first("SARAH"), "Sarah");
        assert_eq!(capitalize_first("mOm"), "Mom");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a\n\nb  c"), "a b c");
        assert_eq!(collapse_whitespace("  lead and trail  "), "lead and trail");
        assert_eq!(collapse_whitespace("already clean"), "already clean");
    }

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate_with_ellipsis("short", 200), "short");
    }

    #[test]
    fn test_truncate_long_input_bounded() {
        let long = "x".repeat(300);
        let out = truncate_with_ellipsis(&long, 200);
        assert_eq!(out.chars().count(), 200);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        let long = "é".repeat(300);
        let out = truncate_with_ellipsis(&long, 200);
        assert_eq!(out.chars().count(), 200);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_ensure_terminal_punctuation() {
        assert_eq!(ensure_terminal_punctuation("no period"), "no period.");
        assert_eq!(ensure_terminal_punctuation("done."), "done.");
        assert_eq!(ensure_terminal_punctuation("really!"), "really!");
        assert_eq!(ensure_terminal_punctuation("sure?"), "sure?");
    }
}
