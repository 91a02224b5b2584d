//! Numeric validation functions

/// Parses numeric text the way a number input is read.
///
/// All whitespace is removed first. Empty text, text that does not parse and
/// non-finite results (`inf`, `1e999`) yield `None`: all are type errors, not
/// missing values.
pub fn parse_number(text: &str) -> Option<f64> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + std::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("25"), Some(25.0));
        assert_eq!(parse_number(" 2 5 "), Some(25.0));
        assert_eq!(parse_number("18.5"), Some(18.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-Infinity"), None);
        assert_eq!(parse_number("1e999"), None);
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_min_validation() {
        assert!(validate_min(25.0, 18.0).is_ok());
        assert!(validate_min(18.0, 18.0).is_ok());
        assert!(validate_min(17.9, 18.0).is_err());
        assert!(validate_min(15, 18).is_err());
    }
}
