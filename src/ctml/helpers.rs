//! Text splitting and number parsing for CTML element bodies

use super::CtmlError;

/// Split whitespace-separated element text (line breaks included)
pub fn split_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Parse a single floating-point value, ignoring surrounding whitespace
pub fn parse_float(text: &str, context: &str) -> Result<f64, CtmlError> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| CtmlError::InvalidNumber {
        context: context.to_string(),
        value: trimmed.to_string(),
    })
}

/// Parse a comma-separated list of floats such as a `floatArray` body
pub fn parse_float_list(text: &str, context: &str) -> Result<Vec<f64>, CtmlError> {
    text.trim()
        .split(',')
        .map(|item| parse_float(item, context))
        .collect()
}

/// Split whitespace-separated `key:value` tokens into pairs
pub fn parse_pairs(text: &str, context: &str) -> Result<Vec<(String, String)>, CtmlError> {
    text.split_whitespace()
        .map(|token| {
            let mut parts = token.split(':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => Ok((key.to_string(), value.to_string())),
                _ => Err(CtmlError::InvalidEntry {
                    context: context.to_string(),
                    value: token.to_string(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_handles_line_breaks() {
        let species = split_list("\n      H2  H  O\n      O2 OH\n    ");
        assert_eq!(species, vec!["H2", "H", "O", "O2", "OH"]);
        assert!(split_list("   ").is_empty());
    }

    #[test]
    fn test_parse_float_forms() {
        assert_eq!(parse_float(" 3.5 ", "A").unwrap(), 3.5);
        assert_eq!(parse_float("1.2E+13", "A").unwrap(), 1.2e13);
        assert_eq!(parse_float("-4", "A").unwrap(), -4.0);
        assert!(parse_float("inf", "A").unwrap().is_infinite());
    }

    #[test]
    fn test_parse_float_error_names_context() {
        let err = parse_float("abc", "Arrhenius/A").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number 'abc' in Arrhenius/A");
    }

    #[test]
    fn test_parse_float_list_multiline() {
        let values = parse_float_list(
            "\n  2.344331120E+00,   7.980520750E-03,\n  -1.947815100E-05\n",
            "floatArray",
        )
        .unwrap();
        assert_eq!(values, vec![2.34433112, 7.98052075e-3, -1.9478151e-5]);
    }

    #[test]
    fn test_parse_float_list_rejects_trailing_comma() {
        assert!(parse_float_list("1.0, 2.0,", "floatArray").is_err());
    }

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs(" AR:0.83  H2:2.4\n H2O:15.4 ", "efficiencies").unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("AR".to_string(), "0.83".to_string()));
        assert_eq!(pairs[2], ("H2O".to_string(), "15.4".to_string()));
    }

    #[test]
    fn test_parse_pairs_rejects_bad_token() {
        assert!(parse_pairs("H:1:2", "atomArray").is_err());
        assert!(parse_pairs("H2", "atomArray").is_err());
    }
}
