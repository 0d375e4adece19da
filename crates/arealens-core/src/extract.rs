use once_cell::sync::Lazy;
use regex::Regex;

/// Matches integers and decimals, including signed ones.
/// Accepts forms like "10", "10.5", ".5", "-.5", "+5", "1.".
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+-]?(?:\d+\.?\d*|\.\d+)").unwrap());

/// Scan free-form recognized text for decimal numbers.
///
/// Returns every maximal numeric substring as a float, in order of
/// appearance. A lone sign is never a match. Empty or whitespace-only
/// input yields an empty vec. Never fails: a match the float parser
/// rejects is silently dropped (the pattern is built so that should not
/// happen in practice).
pub fn extract_numbers(text: &str) -> Vec<f64> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_text_with_units_and_signs() {
        assert_eq!(
            extract_numbers("Size 10.5cm, other 20, -5.2"),
            vec![10.5, 20.0, -5.2]
        );
    }

    #[test]
    fn no_numbers() {
        assert_eq!(extract_numbers("No numbers here"), Vec::<f64>::new());
    }

    #[test]
    fn single_integer() {
        assert_eq!(extract_numbers("Value: 100"), vec![100.0]);
    }

    #[test]
    fn bare_decimal_forms() {
        // "1." parses as 1.0; ".7" has no integer part
        assert_eq!(extract_numbers("0.5, .7, 1."), vec![0.5, 0.7, 1.0]);
    }

    #[test]
    fn explicit_signs() {
        assert_eq!(extract_numbers("-0.5, +.8"), vec![-0.5, 0.8]);
        assert_eq!(extract_numbers("Number: -10"), vec![-10.0]);
    }

    #[test]
    fn sentence_trailing_period_not_part_of_number() {
        assert_eq!(extract_numbers("Text with 123 and 45.67."), vec![123.0, 45.67]);
    }

    #[test]
    fn lone_signs_are_not_matches() {
        assert_eq!(extract_numbers("Only signs + -"), Vec::<f64>::new());
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert_eq!(extract_numbers(""), Vec::<f64>::new());
        assert_eq!(extract_numbers("  "), Vec::<f64>::new());
    }

    #[test]
    fn adjacent_numbers_captured_independently() {
        assert_eq!(extract_numbers("12x34"), vec![12.0, 34.0]);
    }

    #[test]
    fn idempotent() {
        let text = "Size 10.5cm, other 20, -5.2";
        assert_eq!(extract_numbers(text), extract_numbers(text));
    }
}
