//! Input clean-up for user-supplied text.

use crate::error::LoadError;

/// Trim every line and drop the blank ones.
///
/// # Example
///
/// ```
/// use adapter_tables::sanitize::trim_input;
///
/// assert_eq!(trim_input("  1.5 \n\n\t2\n"), "1.5\n2");
/// ```
pub fn trim_input(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a query coordinate, rejecting empty and non-finite input.
pub fn parse_query_value(input: &str) -> Result<f64, LoadError> {
    let trimmed = trim_input(input);
    let invalid = |reason: &str| LoadError::InvalidQuery {
        input: trimmed.clone(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("empty input"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| invalid("not a number"))?;

    if !value.is_finite() {
        return Err(invalid("must be finite"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_input() {
        assert_eq!(trim_input(""), "");
        assert_eq!(trim_input("   \n \n"), "");
        assert_eq!(trim_input("a\r\n  b  "), "a\nb");
    }

    #[test]
    fn test_parse_query_value() {
        assert_eq!(parse_query_value(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_query_value("-1e3\n").unwrap(), -1000.0);
    }

    #[test]
    fn test_parse_query_value_rejects() {
        for (bad, reason) in [
            ("", "empty input"),
            ("  ", "empty input"),
            ("abc", "not a number"),
            ("1\n2", "not a number"),
            ("NaN", "must be finite"),
            ("inf", "must be finite"),
        ] {
            match parse_query_value(bad) {
                Err(LoadError::InvalidQuery { reason: r, .. }) => assert_eq!(r, reason, "{:?}", bad),
                other => panic!("{:?} should be rejected, got {:?}", bad, other),
            }
        }
    }
}
