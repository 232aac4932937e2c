//! Lenient numeric coercion for survey answers and the rounding rule used
//! throughout the estimator.

const STRIPPED: [char; 3] = ['₹', '$', ','];

/// Parses a survey answer as an unsigned decimal after stripping currency
/// symbols and thousands separators. Anything else is `None`.
pub fn coerce_number(raw: Option<&str>) -> Option<f64> {
    let cleaned: String = raw?.chars().filter(|c| !STRIPPED.contains(c)).collect();
    let cleaned = cleaned.trim();

    let digits = cleaned.chars().filter(char::is_ascii_digit).count();
    let dots = cleaned.chars().filter(|c| *c == '.').count();
    if digits == 0 || dots > 1 || digits + dots != cleaned.chars().count() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// `coerce_number` with a fallback for missing or malformed answers.
pub fn number_or(raw: Option<&str>, default: f64) -> f64 {
    coerce_number(raw).unwrap_or(default)
}

/// Rounds to two decimal places. Exact halves go to the even cent.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("42"), Some(42.0))]
    #[case(Some(" 3.5 "), Some(3.5))]
    #[case(Some("₹50,000"), Some(50_000.0))]
    #[case(Some("$1,250.75"), Some(1250.75))]
    #[case(Some("5."), Some(5.0))]
    #[case(Some(".5"), Some(0.5))]
    #[case(Some("-3"), None)]
    #[case(Some("1.2.3"), None)]
    #[case(Some("about 20"), None)]
    #[case(Some("Less than 10"), None)]
    #[case(Some(""), None)]
    #[case(Some("."), None)]
    #[case(None, None)]
    fn coerces_survey_numbers(#[case] raw: Option<&str>, #[case] expected: Option<f64>) {
        assert_eq!(coerce_number(raw), expected);
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(number_or(Some("n/a"), 0.0), 0.0);
        assert_eq!(number_or(None, 7.0), 7.0);
        assert_eq!(number_or(Some("12"), 7.0), 12.0);
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round2(722.7000000000001), 722.7);
        assert_eq!(round2(43.799999), 43.8);
        assert_eq!(round2(0.0), 0.0);
    }

    #[rstest]
    #[case(9.125, 9.12)]
    #[case(0.375, 0.38)]
    #[case(36.5, 36.5)]
    fn exact_halves_round_to_even(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round2(value), expected);
    }
}
