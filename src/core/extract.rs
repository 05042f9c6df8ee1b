//! Token extraction shared by the model comparators.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NETWORK_TOKEN: Regex = Regex::new(r"(?i)\b[45]g\b").unwrap();
    static ref DOUBLE_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();
    static ref DIGITS: Regex = Regex::new(r"\d{1,4}").unwrap();
    static ref YEAR: Regex = Regex::new(r"\b(20\d{2})\b").unwrap();
}

/// Removes standalone "4G"/"5G" so "Galaxy A54 5G" is not read as model 5.
pub fn strip_network_tokens(name: &str) -> String {
    let stripped = NETWORK_TOKEN.replace_all(name, "");
    DOUBLE_SPACE.replace_all(&stripped, " ").trim().to_string()
}

/// First run of one to four digits after network tokens are stripped.
pub fn leading_number(name: &str) -> Option<u32> {
    let cleaned = strip_network_tokens(name);
    DIGITS
        .find(&cleaned)
        .and_then(|m| m.as_str().parse().ok())
}

/// A year token in 2000..=2099, as in "iPad Pro (2022)".
pub fn release_year(name: &str) -> Option<u32> {
    YEAR.captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Ranking value for an optional number, -1 when absent so it sorts last
/// under descending order.
pub fn number_or_missing(value: Option<u32>) -> i64 {
    value.map(i64::from).unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_network_tokens() {
        assert_eq!(strip_network_tokens("Galaxy A54 5G"), "Galaxy A54");
        assert_eq!(strip_network_tokens("Moto 4g G84"), "Moto G84");
        // only whole words
        assert_eq!(strip_network_tokens("Galaxy S5G2"), "Galaxy S5G2");
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("iPhone 13 Pro Max"), Some(13));
        assert_eq!(leading_number("Galaxy A54 5G"), Some(54));
        assert_eq!(leading_number("5G Galaxy Z Flip5"), Some(5));
        assert_eq!(leading_number("iPhone X"), None);
        assert_eq!(leading_number(""), None);
        assert_eq!(leading_number("Model 1234567"), Some(1234));
    }

    #[test]
    fn test_release_year() {
        assert_eq!(release_year("iPad Pro (2022)"), Some(2022));
        assert_eq!(release_year("MacBook Air 13\" M1 2020"), Some(2020));
        assert_eq!(release_year("iPad mini 5"), None);
        assert_eq!(release_year("Model 21000"), None);
    }

    #[test]
    fn test_number_or_missing() {
        assert_eq!(number_or_missing(Some(14)), 14);
        assert_eq!(number_or_missing(None), -1);
    }
}
