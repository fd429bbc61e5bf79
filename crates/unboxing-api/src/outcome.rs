// Request outcome classification
//
// Every call ends in exactly one of three shapes: a 2xx with a decoded
// body, a non-2xx carrying the raw server text, or a transport failure
// carrying the reason. The view layer branches on these directly.

use serde::de::DeserializeOwned;

use crate::error::Error;

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(serde_json::Value),
    Text(String),
    Empty,
}

impl Body {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) | Self::Empty => None,
        }
    }
}

/// Why a request produced no usable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, DNS failure, reset.
    Connect,
    Timeout,
    /// A 2xx arrived but its body could not be read or decoded.
    Decode,
    /// The request could not be built (bad URL, bad header value).
    Request,
}

/// Result of one `ResourceClient::perform` call.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Success(Body),
    /// Non-2xx status. `body` is the raw response text, never assumed JSON.
    HttpError { status: u16, body: String },
    TransportError { kind: FailureKind, reason: String },
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Human-readable server error text for an `HttpError`.
    ///
    /// Endpoints disagree on error shape: some send plain text, some a JSON
    /// string, some `{"message": ...}` or `{"error": ...}`. The first
    /// recognizable message wins; otherwise the raw text is returned with
    /// trailing whitespace trimmed. An empty body falls back to the
    /// canonical status reason.
    pub fn error_text(&self) -> Option<String> {
        match self {
            Self::HttpError { status, body } => Some(decode_error_text(*status, body)),
            Self::Success(_) | Self::TransportError { .. } => None,
        }
    }

    /// Decode the JSON body of a success into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self.into_body()? {
            Body::Json(value) => {
                let raw = value.to_string();
                serde_json::from_value(value).map_err(|e| Error::Deserialization {
                    message: e.to_string(),
                    body: raw,
                })
            }
            Body::Text(text) => Err(Error::Deserialization {
                message: "expected a JSON body".into(),
                body: text,
            }),
            Body::Empty => Err(Error::Deserialization {
                message: "expected a JSON body, got none".into(),
                body: String::new(),
            }),
        }
    }

    /// Discard the body of a success.
    pub fn into_unit(self) -> Result<(), Error> {
        self.into_body().map(|_| ())
    }

    /// Unwrap a success body, turning failures into [`Error`].
    pub fn into_body(self) -> Result<Body, Error> {
        match self {
            Self::Success(body) => Ok(body),
            Self::HttpError { status, body } => Err(Error::Http {
                status,
                message: decode_error_text(status, &body),
            }),
            Self::TransportError { kind, reason } => Err(Error::Transport { kind, reason }),
        }
    }
}

fn decode_error_text(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map_or_else(|| format!("HTTP {status}"), String::from);
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| match map.get(*key) {
                Some(serde_json::Value::String(text)) => Some(text.clone()),
                Some(serde_json::Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            })
            .unwrap_or_else(|| trimmed.to_owned()),
        _ => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn http(status: u16, body: &str) -> RequestOutcome {
        RequestOutcome::HttpError {
            status,
            body: body.into(),
        }
    }

    #[test]
    fn error_text_prefers_plain_text() {
        assert_eq!(
            http(404, "Data not found\n").error_text().as_deref(),
            Some("Data not found")
        );
    }

    #[test]
    fn error_text_unquotes_json_strings() {
        assert_eq!(
            http(404, "\"customer not found\"").error_text().as_deref(),
            Some("customer not found")
        );
    }

    #[test]
    fn error_text_reads_message_then_error_fields() {
        assert_eq!(
            http(422, r#"{"message":"amount must be positive"}"#)
                .error_text()
                .as_deref(),
            Some("amount must be positive")
        );
        assert_eq!(
            http(401, r#"{"error":"invalid or missing authentication token"}"#)
                .error_text()
                .as_deref(),
            Some("invalid or missing authentication token")
        );
        assert_eq!(
            http(422, r#"{"error":{"email":"must be provided"}}"#)
                .error_text()
                .as_deref(),
            Some(r#"{"email":"must be provided"}"#)
        );
    }

    #[test]
    fn error_text_falls_back_to_status_reason() {
        assert_eq!(
            http(500, "").error_text().as_deref(),
            Some("Internal Server Error")
        );
    }

    #[test]
    fn success_has_no_error_text() {
        assert_eq!(RequestOutcome::Success(Body::Empty).error_text(), None);
    }

    #[test]
    fn decode_reports_shape_mismatch() {
        let outcome = RequestOutcome::Success(Body::Json(json!({"id": "x"})));
        let err = outcome.decode::<Vec<u32>>().unwrap_err();
        assert!(matches!(err, Error::Deserialization { .. }));
    }

    #[test]
    fn into_body_maps_http_error() {
        let err = http(404, "Customer not found").into_unit().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: Customer not found");
    }
}
