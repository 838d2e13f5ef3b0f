pub mod url_validator;

/// Trim an optional form value; blank input becomes `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `#rrggbb` color check used for category colors.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("   ".into())), None);
        assert_eq!(
            normalize_optional(Some("  notes ".into())),
            Some("notes".to_string())
        );
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#6366f1"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("6366f1"));
        assert!(!is_hex_color("#6366f"));
        assert!(!is_hex_color("#zzzzzz"));
        assert!(!is_hex_color("red"));
    }
}
