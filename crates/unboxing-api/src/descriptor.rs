// Static endpoint configuration
//
// A `ResourceDescriptor` says everything the client needs to address and
// encode a call: where it lives, which payload fields it carries, how the
// body goes over the wire, whether the bearer credential rides along, and
// what a successful response body looks like. Descriptors are `const` and
// never negotiated at runtime.

use strum::{Display, EnumString};

/// JSON object sent as a request payload.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// HTTP verbs the back-office API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Request body encoding, fixed per descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `Content-Type: application/json`
    Json,
    /// `Content-Type: application/x-www-form-urlencoded`
    FormUrlEncoded,
}

/// What a 2xx response body is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBody {
    /// A JSON document. Malformed JSON is a transport failure; an empty
    /// body is tolerated.
    Json,
    /// Whatever the server sends. Parsed as JSON when possible, otherwise
    /// kept as text. Never fails.
    Opaque,
}

/// How a form value is coerced into the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
}

/// One payload field: the form input it is read from and the key it is
/// sent under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Form input name.
    pub input: &'static str,
    /// Key in the request payload.
    pub key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            input: name,
            key: name,
            kind: FieldKind::Text,
            required: true,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            kind: FieldKind::Integer,
            ..Self::text(name)
        }
    }

    pub const fn float(name: &'static str) -> Self {
        Self {
            kind: FieldKind::Float,
            ..Self::text(name)
        }
    }

    /// Send this field under a different payload key than its form name.
    pub const fn sent_as(self, key: &'static str) -> Self {
        Self { key, ..self }
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

/// Static configuration for one resource endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Human-readable resource name, used in logs and messages.
    pub name: &'static str,
    /// Path relative to the API base URL, e.g. `/v1/customer`.
    pub base_path: &'static str,
    pub fields: &'static [FieldSpec],
    pub encoding: Encoding,
    /// Attach `Authorization: Bearer <credential>` when a credential exists.
    pub requires_auth: bool,
    pub response: ResponseBody,
}

impl ResourceDescriptor {
    /// A JSON, authenticated descriptor with no payload fields.
    pub const fn new(name: &'static str, base_path: &'static str) -> Self {
        Self {
            name,
            base_path,
            fields: &[],
            encoding: Encoding::Json,
            requires_auth: true,
            response: ResponseBody::Json,
        }
    }

    pub const fn fields(self, fields: &'static [FieldSpec]) -> Self {
        Self { fields, ..self }
    }

    pub const fn form_encoded(self) -> Self {
        Self {
            encoding: Encoding::FormUrlEncoded,
            ..self
        }
    }

    /// Never attach the credential.
    pub const fn public(self) -> Self {
        Self {
            requires_auth: false,
            ..self
        }
    }

    pub const fn opaque(self) -> Self {
        Self {
            response: ResponseBody::Opaque,
            ..self
        }
    }

    /// Look up a field by its form input name.
    pub fn field(&self, input: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.input == input)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!(Method::from_str("patch").ok(), Some(Method::Patch));
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn builder_keeps_other_settings() {
        const FIELDS: &[FieldSpec] = &[FieldSpec::text("phone").sent_as("info").optional()];
        const D: ResourceDescriptor = ResourceDescriptor::new("customer", "/v1/customer")
            .fields(FIELDS)
            .form_encoded()
            .public();

        assert_eq!(D.encoding, Encoding::FormUrlEncoded);
        assert!(!D.requires_auth);
        assert_eq!(D.response, ResponseBody::Json);

        let phone = D.field("phone").copied();
        assert_eq!(phone.map(|f| f.key), Some("info"));
        assert_eq!(phone.map(|f| f.required), Some(false));
        assert!(D.field("info").is_none());
    }
}
