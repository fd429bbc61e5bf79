// Form input and payload extraction
//
// A form is a flat set of named string inputs. Extraction walks the
// descriptor's field list, coerces numeric kinds, and renames inputs to
// their wire keys. No validation happens here: an unparsable number
// becomes `null`, a missing required field is left for the server to
// reject.

use std::collections::BTreeMap;

use serde_json::{Number, Value};
use unboxing_api::{Encoding, FieldKind, FieldSpec, Payload, ResourceDescriptor};

/// Named string inputs of one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, input: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(input, value);
        self
    }

    pub fn set(&mut self, input: impl Into<String>, value: impl Into<String>) {
        self.values.insert(input.into(), value.into());
    }

    pub fn get(&self, input: &str) -> Option<&str> {
        self.values.get(input).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Build the request payload for `descriptor` from form input.
///
/// - present inputs are coerced by field kind and stored under the wire key
/// - optional inputs left blank are omitted
/// - missing required inputs are omitted from JSON bodies and sent empty
///   in form-encoded bodies
pub fn extract_payload(descriptor: &ResourceDescriptor, form: &FormData) -> Payload {
    let mut payload = Payload::new();
    for field in descriptor.fields {
        match form.get(field.input) {
            Some(raw) if !field.required && raw.trim().is_empty() => {}
            Some(raw) => {
                payload.insert(field.key.to_owned(), coerce(field, raw));
            }
            None if field.required && descriptor.encoding == Encoding::FormUrlEncoded => {
                payload.insert(field.key.to_owned(), Value::String(String::new()));
            }
            None => {}
        }
    }
    payload
}

fn coerce(field: &FieldSpec, raw: &str) -> Value {
    match field.kind {
        FieldKind::Text => Value::String(raw.to_owned()),
        FieldKind::Integer => raw
            .trim()
            .parse::<i64>()
            .map_or(Value::Null, |n| Value::Number(n.into())),
        FieldKind::Float => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use unboxing_api::catalog;

    use super::*;

    #[test]
    fn billing_fields_are_coerced() {
        let form = FormData::new()
            .with("customer_id", "3")
            .with("amount", "49.5")
            .with("date", "2024-01-01");
        let payload = extract_payload(&catalog::BILLING_CREATE, &form);
        assert_eq!(
            Value::Object(payload),
            json!({"customer_id": 3, "amount": 49.5, "date": "2024-01-01"})
        );
    }

    #[test]
    fn unparsable_numbers_become_null() {
        let form = FormData::new()
            .with("employee_id", "abc")
            .with("amount", "")
            .with("date", "2024-02-29");
        let payload = extract_payload(&catalog::PAYROLL_CREATE, &form);
        assert_eq!(payload.get("employee_id"), Some(&Value::Null));
        assert_eq!(payload.get("amount"), Some(&Value::Null));
    }

    #[test]
    fn phone_is_renamed_on_customer_create() {
        let form = FormData::new()
            .with("name", "Acme")
            .with("email", "ops@acme.test")
            .with("phone", "555-0100");
        let payload = extract_payload(&catalog::CUSTOMER_CREATE, &form);
        assert_eq!(payload.get("info"), Some(&json!("555-0100")));
        assert!(!payload.contains_key("phone"));
        assert!(!payload.contains_key("address"));
    }

    #[test]
    fn blank_optional_fields_are_left_out() {
        let form = FormData::new().with("email", "").with("role", "HR");
        let payload = extract_payload(&catalog::USER_UPDATE, &form);
        assert_eq!(Value::Object(payload), json!({"role": "HR"}));
    }

    #[test]
    fn missing_required_form_field_is_sent_empty() {
        let form = FormData::new().with("email", "admin@unboxing.test");
        let payload = extract_payload(&catalog::AUTHENTICATION, &form);
        assert_eq!(payload.get("password"), Some(&json!("")));

        let json_payload = extract_payload(&catalog::USER_CREATE, &form);
        assert!(!json_payload.contains_key("password"));
    }
}
