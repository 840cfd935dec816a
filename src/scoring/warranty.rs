use regex_lite::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Extract a year count from free-text warranty terms.
///
/// Takes the leftmost run of ASCII digits and reads it as a whole number.
/// Units are not interpreted ("24 months" is 24) and decimals are not
/// supported ("1.5 years" is 1). No digits, empty or absent text gives 0.
/// A run too long for `u64` saturates.
pub fn extract_warranty_years(warranty: Option<&str>) -> u64 {
    let Some(text) = warranty else {
        return 0;
    };
    match DIGIT_RUN.find(text) {
        Some(m) => m.as_str().parse().unwrap_or(u64::MAX),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number() {
        assert_eq!(extract_warranty_years(Some("2 years parts and labor")), 2);
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(extract_warranty_years(Some("lifetime")), 0);
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(extract_warranty_years(None), 0);
        assert_eq!(extract_warranty_years(Some("")), 0);
    }

    #[test]
    fn test_units_ignored() {
        assert_eq!(extract_warranty_years(Some("24 months")), 24);
    }

    #[test]
    fn test_first_run_wins() {
        assert_eq!(extract_warranty_years(Some("3 years onsite, 5 years parts")), 3);
        assert_eq!(extract_warranty_years(Some("Standard (12) plus 36")), 12);
    }

    #[test]
    fn test_embedded_number() {
        assert_eq!(extract_warranty_years(Some("warranty:5yrs")), 5);
    }

    #[test]
    fn test_decimal_truncates_to_first_run() {
        assert_eq!(extract_warranty_years(Some("1.5 years")), 1);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(extract_warranty_years(Some("007 years")), 7);
    }

    #[test]
    fn test_overflow_saturates() {
        let text = "99999999999999999999999 years";
        assert_eq!(extract_warranty_years(Some(text)), u64::MAX);
    }
}
