// Back-office record and payload types
//
// Records mirror what the backend returns. Fields use `#[serde(default)]`
// where older rows or alternate handlers may omit them. Payload types
// serialize to the exact wire keys each endpoint decodes.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::descriptor::Payload;
use crate::error::Error;

/// Timestamp as the backend serializes it (RFC 3339 with offset).
pub type Timestamp = DateTime<FixedOffset>;

// ── Records ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub version: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Billing {
    pub id: i64,
    pub customer_id: i64,
    pub amount: f64,
    pub date: Timestamp,
    #[serde(default)]
    pub version: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    pub amount: f64,
    pub date: Timestamp,
    #[serde(default)]
    pub version: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub name: String,
    pub email: String,
    /// Administrator, HR, Sales or Accountant.
    #[serde(default)]
    pub role: String,
}

// ── Authentication ──────────────────────────────────────────────────

/// `POST /tokens/authentication` response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticationResponse {
    pub authentication_token: TokenField,
}

/// The token field is either the full token object or just its text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenField {
    Full(AuthenticationToken),
    Bare(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationToken {
    pub token: String,
    #[serde(default)]
    pub expiry: Option<Timestamp>,
}

impl From<TokenField> for AuthenticationToken {
    fn from(field: TokenField) -> Self {
        match field {
            TokenField::Full(token) => token,
            TokenField::Bare(token) => Self {
                token,
                expiry: None,
            },
        }
    }
}

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Admin self-registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "secret-key", skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

// ── Payloads ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    /// Decoded by the create handler under `info`.
    #[serde(rename = "info")]
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBilling {
    pub customer_id: i64,
    pub amount: f64,
    /// `YYYY-MM-DD`
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPayroll {
    pub employee_id: i64,
    pub amount: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PayrollUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

// ── Health ──────────────────────────────────────────────────────────

/// `GET /healthcheck`, sent as `key: value` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub environment: String,
    pub version: String,
}

impl HealthStatus {
    pub fn parse(text: &str) -> Self {
        let mut health = Self::default();
        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim().to_owned();
            match key.trim() {
                "status" => health.status = value,
                "environment" => health.environment = value,
                "version" => health.version = value,
                _ => {}
            }
        }
        health
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Serialize a payload struct into the generic request payload.
pub fn to_payload<T: Serialize>(value: &T) -> Result<Payload, Error> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::Deserialization {
            message: "payload must serialize to a JSON object".into(),
            body: other.to_string(),
        }),
        Err(e) => Err(Error::Deserialization {
            message: e.to_string(),
            body: String::new(),
        }),
    }
}

/// Pull the record array out of a list response.
///
/// Accepts a bare array, or an object holding the array under `envelope`.
/// `null` is an empty list; anything else yields `None`.
pub fn listing(value: serde_json::Value, envelope: Option<&str>) -> Option<Vec<serde_json::Value>> {
    match value {
        serde_json::Value::Array(items) => Some(items),
        serde_json::Value::Object(mut map) => match map.remove(envelope?) {
            Some(serde_json::Value::Array(items)) => Some(items),
            _ => None,
        },
        serde_json::Value::Null => Some(Vec::new()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn token_accepts_object_and_bare_string() {
        let full: AuthenticationResponse = serde_json::from_value(json!({
            "authentication_token": {"token": "ABC", "expiry": "2024-05-02T10:00:00+02:00"}
        }))
        .unwrap();
        let token = AuthenticationToken::from(full.authentication_token);
        assert_eq!(token.token, "ABC");
        assert!(token.expiry.is_some());

        let bare: AuthenticationResponse =
            serde_json::from_value(json!({"authentication_token": "XYZ"})).unwrap();
        let token = AuthenticationToken::from(bare.authentication_token);
        assert_eq!(token.token, "XYZ");
        assert_eq!(token.expiry, None);
    }

    #[test]
    fn new_customer_sends_phone_as_info() {
        let payload = to_payload(&NewCustomer {
            name: "Acme".into(),
            email: "ops@acme.test".into(),
            phone: "555-0100".into(),
            address: "1 Main St".into(),
        })
        .unwrap();
        assert_eq!(payload.get("info"), Some(&json!("555-0100")));
        assert!(!payload.contains_key("phone"));
    }

    #[test]
    fn updates_skip_unset_fields() {
        let payload = to_payload(&PayrollUpdate {
            amount: Some(1200.0),
            ..PayrollUpdate::default()
        })
        .unwrap();
        assert_eq!(serde_json::Value::Object(payload), json!({"amount": 1200.0}));
    }

    #[test]
    fn billing_date_serializes_as_calendar_day() {
        let payload = to_payload(&NewBilling {
            customer_id: 3,
            amount: 49.5,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        })
        .unwrap();
        assert_eq!(payload.get("date"), Some(&json!("2024-01-01")));
    }

    #[test]
    fn listing_unwraps_envelope_or_bare_array() {
        assert_eq!(listing(json!([1, 2]), None), Some(vec![json!(1), json!(2)]));
        assert_eq!(
            listing(json!({"users": [{"id": 1}]}), Some("users")),
            Some(vec![json!({"id": 1})])
        );
        assert_eq!(listing(json!({"users": [1]}), None), None);
        assert_eq!(listing(json!(null), Some("users")), Some(Vec::new()));
    }

    #[test]
    fn health_status_parses_text_lines() {
        let health =
            HealthStatus::parse("status: available\nenvironment: development\nversion: 1.0.0\n");
        assert_eq!(health.status, "available");
        assert_eq!(health.environment, "development");
        assert_eq!(health.version, "1.0.0");
    }
}
