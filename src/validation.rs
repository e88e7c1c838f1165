use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

/// Per-field error messages shown under form inputs, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message of each field, the way the backend orders them.
    pub fn from_server(errors: HashMap<String, Vec<String>>) -> Self {
        let map = errors
            .into_iter()
            .filter_map(|(field, messages)| messages.into_iter().next().map(|m| (field, m)))
            .collect();
        Self(map)
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Copy without `field`, used by change handlers.
    pub fn without(&self, field: &str) -> Self {
        let mut next = self.clone();
        next.clear(field);
        next
    }

    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A phone number is valid when its digits alone are 10 to 13 long.
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=13).contains(&digits)
}

/// Accepts `YYYY-MM-DD` as well as ISO timestamps from the backend.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Value for a `<input type="date">`.
pub fn date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses an amount typed into a number input. Empty or malformed input is `None`.
pub fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn is_positive_amount(value: &str) -> bool {
    parse_amount(value).map(|v| v > 0.0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_digits_are_counted_after_stripping_separators() {
        assert!(is_valid_phone("0812-3456-7890"));
        assert!(is_valid_phone("+62 812 3456 7890"));
        assert!(is_valid_phone("0812345678"));
        assert!(is_valid_phone("0812345678901"));
        assert!(!is_valid_phone("081234567"));
        assert!(!is_valid_phone("08123456789012"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn server_errors_keep_only_the_first_message() {
        let mut raw = HashMap::new();
        raw.insert(
            "phone_number".to_string(),
            vec!["msg".to_string(), "second".to_string()],
        );
        raw.insert("name".to_string(), vec![]);

        let errors = FieldErrors::from_server(raw);

        assert_eq!(errors.get("phone_number"), Some("msg"));
        assert!(!errors.has("name"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn without_removes_a_single_field() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "required");
        errors.insert("amount", "required");

        let next = errors.without("name");

        assert!(!next.has("name"));
        assert!(next.has("amount"));
        assert!(errors.has("name"));
    }

    #[test]
    fn dates_accept_iso_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_date("2024-03-01"), expected);
        assert_eq!(parse_date("2024-03-01T00:00:00.000000Z"), expected);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("03/01/2024"), None);
    }

    #[test]
    fn amounts_must_be_positive_numbers() {
        assert!(is_positive_amount("15000"));
        assert!(is_positive_amount(" 0.5 "));
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount("-10"));
        assert!(!is_positive_amount(""));
        assert!(!is_positive_amount("abc"));
    }
}
