//! Form validation for the lookup fields.
//!
//! Pure functions only; the pipeline decides what to do with the result.

/// One form field as submitted: its current text and the placeholder label
/// shown to the user.
#[derive(Debug, Clone, Copy)]
pub struct FieldInput<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
}

impl<'a> FieldInput<'a> {
    pub fn new(value: &'a str, placeholder: &'a str) -> Self {
        Self { value, placeholder }
    }
}

/// Collect the placeholder of every field whose value is blank after
/// trimming, in input order. An empty result means the form is valid.
pub fn missing_fields(fields: &[FieldInput<'_>]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| field.value.trim().is_empty())
        .map(|field| field.placeholder.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form<'a>(city: &'a str, state: &'a str, country: &'a str) -> [FieldInput<'a>; 3] {
        [
            FieldInput::new(city, "City"),
            FieldInput::new(state, "State"),
            FieldInput::new(country, "Country"),
        ]
    }

    #[test]
    fn all_filled_is_valid() {
        assert!(missing_fields(&form("New York", "NY", "US")).is_empty());
    }

    #[test]
    fn blank_fields_reported_in_field_order() {
        let missing = missing_fields(&form("", "NY", "   "));
        assert_eq!(missing, vec!["City".to_string(), "Country".to_string()]);
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let missing = missing_fields(&form(" \t", "\n", ""));
        assert_eq!(
            missing,
            vec!["City".to_string(), "State".to_string(), "Country".to_string()]
        );
    }

    #[test]
    fn single_blank_field_reports_only_its_placeholder() {
        let missing = missing_fields(&form("Berlin", "", "DE"));
        assert_eq!(missing, vec!["State".to_string()]);
    }
}
