use super::AqueousError;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// coefficient, notation marker (*10^, *e^ or e^), signed exponent
const SCIENTIFIC_PATTERN: &str = r"^([0-9.]*)(\*10\^|\*?e\^)?([0-9.-]*)$";

static SCIENTIFIC_REGEX: OnceLock<Regex> = OnceLock::new();

fn scientific_regex() -> &'static Regex {
    SCIENTIFIC_REGEX.get_or_init(|| Regex::new(SCIENTIFIC_PATTERN).expect("valid regex literal"))
}

/// Parses a plain decimal or a number written as `C*10^E`, `C*e^E` or `Ce^E`.
///
/// All whitespace is removed first. A coefficient alone is returned as is, a coefficient
/// with an exponent gives `C * 10^E`. A parsed zero is `Ok(0.0)`, not an error.
///
/// # Errors
/// `AqueousError::InvalidNumber` when the text does not fit the grammar, the coefficient
/// is missing, a marker has no exponent, a part is not a valid float, or the value
/// overflows f64.
pub fn parse_numeric(text: &str) -> Result<f64, AqueousError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = || AqueousError::InvalidNumber(text.to_string());

    let captures = scientific_regex().captures(&compact).ok_or_else(invalid)?;
    let coefficient = captures.get(1).map_or("", |m| m.as_str());
    let marker = captures.get(2).map_or("", |m| m.as_str());
    let exponent = captures.get(3).map_or("", |m| m.as_str());

    if coefficient.is_empty() {
        return Err(invalid());
    }
    let coefficient: f64 = coefficient.parse().map_err(|_| invalid())?;
    if !coefficient.is_finite() {
        return Err(invalid());
    }

    if exponent.is_empty() {
        if !marker.is_empty() {
            return Err(invalid());
        }
        debug!("parsed {:?} as plain number {}", text, coefficient);
        return Ok(coefficient);
    }

    let exponent: f64 = exponent.parse().map_err(|_| invalid())?;
    let value = coefficient * 10f64.powf(exponent);
    if !value.is_finite() {
        return Err(invalid());
    }
    debug!(
        "parsed {:?} as {} * 10^{} = {}",
        text, coefficient, exponent, value
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plain_decimal() {
        assert_relative_eq!(parse_numeric("0.1").unwrap(), 0.1);
        assert_relative_eq!(parse_numeric("42").unwrap(), 42.0);
        assert_relative_eq!(parse_numeric(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_all_notation_markers() {
        assert_relative_eq!(parse_numeric("1.8e^-5").unwrap(), 1.8e-5, epsilon = 1e-15);
        assert_relative_eq!(parse_numeric("1.8*e^-5").unwrap(), 1.8e-5, epsilon = 1e-15);
        assert_relative_eq!(parse_numeric("1.8*10^-5").unwrap(), 1.8e-5, epsilon = 1e-15);
        assert_relative_eq!(parse_numeric("6.02*10^23").unwrap(), 6.02e23, max_relative = 1e-12);
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_relative_eq!(parse_numeric(" 1.8 * 10 ^ -5 ").unwrap(), 1.8e-5, epsilon = 1e-15);
        assert_relative_eq!(parse_numeric("0.1\n").unwrap(), 0.1);
        assert_relative_eq!(parse_numeric("\t2 e^ 3").unwrap(), 2000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_is_a_value_not_a_failure() {
        assert_eq!(parse_numeric("0"), Ok(0.0));
        assert_eq!(parse_numeric("0*10^5"), Ok(0.0));
    }

    #[test]
    fn test_overflow_is_rejected() {
        for text in ["1*10^400", "2e^309", "0*10^400"] {
            assert_eq!(
                parse_numeric(text),
                Err(AqueousError::InvalidNumber(text.to_string())),
                "{:?} should be rejected",
                text
            );
        }
        let digits = "9".repeat(400);
        assert!(parse_numeric(&digits).is_err());
        // underflow is a parsed zero, left for the caller to reject
        assert_eq!(parse_numeric("1*10^-400"), Ok(0.0));
    }

    #[test]
    fn test_fractional_exponent() {
        assert_relative_eq!(parse_numeric("1e^0.5").unwrap(), 10f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        for text in ["abc", "", "   ", "e^-5", "*10^3", "1.8e^", "1.2.3", "1e-5", "-0.1", "1.8x"] {
            assert_eq!(
                parse_numeric(text),
                Err(AqueousError::InvalidNumber(text.to_string())),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_formatted_pairs_parse_back() {
        let pairs = [(1.8, -5.0), (4.75, -10.0), (3.0, 2.0), (9.99, 0.0)];
        for (c, e) in pairs {
            let expected = c * 10f64.powf(e);
            for text in [
                format!("{}*10^{}", c, e),
                format!("{}*e^{}", c, e),
                format!("{}e^{}", c, e),
            ] {
                assert_relative_eq!(parse_numeric(&text).unwrap(), expected, max_relative = 1e-12);
            }
        }
    }
}
