// Generic resource client
//
// Wraps `reqwest::Client` with descriptor-driven URL construction, body
// encoding and bearer attachment. Every endpoint goes through `perform`;
// the typed wrappers in `resources/` are implemented as inherent methods
// in separate files to keep this module focused on transport mechanics.

use secrecy::ExposeSecret;
use tracing::{debug, warn};
use url::Url;

use crate::descriptor::{Encoding, Method, Payload, ResourceDescriptor, ResponseBody};
use crate::error::Error;
use crate::outcome::{Body, FailureKind, RequestOutcome};
use crate::session::Session;
use crate::transport::TransportConfig;

/// When the bearer credential is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Follow each descriptor's `requires_auth` flag.
    #[default]
    Descriptor,
    /// Attach the credential to every call whenever the session has one.
    Always,
}

/// Async client for the back-office REST API.
pub struct ResourceClient {
    http: reqwest::Client,
    base_url: Url,
    policy: CredentialPolicy,
}

impl ResourceClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL (e.g. `http://localhost:4000`) and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let mut base_url = Url::parse(base_url)?;
        let path = base_url.path().trim_end_matches('/').to_owned();
        base_url.set_path(&path);
        Ok(Self {
            http,
            base_url,
            policy: CredentialPolicy::default(),
        })
    }

    pub fn with_credential_policy(mut self, policy: CredentialPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credential_policy(&self) -> CredentialPolicy {
        self.policy
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// `{base}{descriptor.base_path}[/{suffix}]`, with the suffix
    /// percent-encoded as a single path segment.
    fn url(&self, descriptor: &ResourceDescriptor, suffix: Option<&str>) -> Result<Url, String> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", descriptor.base_path))
            .map_err(|e| format!("invalid URL for {}: {e}", descriptor.name))?;

        if let Some(suffix) = suffix {
            url.path_segments_mut()
                .map_err(|()| format!("{} cannot take a path suffix", descriptor.base_path))?
                .pop_if_empty()
                .push(suffix);
        }
        Ok(url)
    }

    fn attaches_credential(&self, descriptor: &ResourceDescriptor) -> bool {
        match self.policy {
            CredentialPolicy::Descriptor => descriptor.requires_auth,
            CredentialPolicy::Always => true,
        }
    }

    // ── Request execution ────────────────────────────────────────────

    /// Issue one call and classify what came back.
    ///
    /// Never fails: every problem is folded into the returned outcome.
    pub async fn perform(
        &self,
        session: &Session,
        descriptor: &ResourceDescriptor,
        method: Method,
        suffix: Option<&str>,
        payload: Option<&Payload>,
    ) -> RequestOutcome {
        let url = match self.url(descriptor, suffix) {
            Ok(url) => url,
            Err(reason) => {
                warn!(resource = descriptor.name, %reason, "request not sent");
                return RequestOutcome::TransportError {
                    kind: FailureKind::Request,
                    reason,
                };
            }
        };
        debug!("{method} {url}");

        let mut builder = self.http.request(method.into(), url);

        if self.attaches_credential(descriptor) {
            if let Some(token) = session.credential() {
                builder = builder.bearer_auth(token.expose_secret());
            }
        }

        if let Some(payload) = payload {
            builder = match descriptor.encoding {
                Encoding::Json => builder.json(payload),
                Encoding::FormUrlEncoded => builder.form(&form_pairs(payload)),
            };
        }

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(resource = descriptor.name, error = %e, "request failed");
                return transport_failure(&e);
            }
        };

        let status = resp.status();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(resource = descriptor.name, error = %e, "response body unreadable");
                return RequestOutcome::TransportError {
                    kind: FailureKind::Decode,
                    reason: format!("failed to read response body: {e}"),
                };
            }
        };

        if !status.is_success() {
            debug!(status = status.as_u16(), "{} rejected", descriptor.name);
            return RequestOutcome::HttpError {
                status: status.as_u16(),
                body: text,
            };
        }

        classify_success(descriptor, text)
    }
}

fn classify_success(descriptor: &ResourceDescriptor, text: String) -> RequestOutcome {
    if text.trim().is_empty() {
        return RequestOutcome::Success(Body::Empty);
    }

    match (descriptor.response, serde_json::from_str(&text)) {
        (_, Ok(value)) => RequestOutcome::Success(Body::Json(value)),
        (ResponseBody::Opaque, Err(_)) => RequestOutcome::Success(Body::Text(text)),
        (ResponseBody::Json, Err(e)) => {
            let preview: String = text.chars().take(200).collect();
            warn!(resource = descriptor.name, "malformed JSON in success response");
            RequestOutcome::TransportError {
                kind: FailureKind::Decode,
                reason: format!("{e} (body preview: {preview:?})"),
            }
        }
    }
}

fn transport_failure(err: &reqwest::Error) -> RequestOutcome {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_connect() {
        FailureKind::Connect
    } else if err.is_builder() {
        FailureKind::Request
    } else {
        FailureKind::Connect
    };
    RequestOutcome::TransportError {
        kind,
        reason: err.to_string(),
    }
}

/// Flatten a payload into `key=value` pairs for form encoding.
///
/// Numbers and booleans are written in their JSON form, strings verbatim;
/// nulls are dropped.
fn form_pairs(payload: &Payload) -> Vec<(&str, String)> {
    payload
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.as_str(), rendered))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog;

    fn client(base: &str) -> ResourceClient {
        ResourceClient::from_reqwest(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn url_joins_base_path_and_suffix() {
        let c = client("http://localhost:4000/");
        let url = c.url(&catalog::CUSTOMER_DELETE, Some("7")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/v1/customer/7");
    }

    #[test]
    fn url_keeps_a_base_prefix() {
        let c = client("http://gateway.local/api/");
        let url = c.url(&catalog::BILLING_LIST, None).unwrap();
        assert_eq!(url.as_str(), "http://gateway.local/api/v1/billing");
    }

    #[test]
    fn url_encodes_suffix_as_one_segment() {
        let c = client("http://localhost:4000");
        let url = c.url(&catalog::USER_DETAIL, Some("a/b c")).unwrap();
        assert_eq!(url.path(), "/v1/user/a%2Fb%20c");
    }

    #[test]
    fn form_pairs_render_scalars_and_drop_nulls() {
        let payload = json!({"email": "a@b.c", "age": 3, "amount": 49.5, "gone": null});
        let payload = payload.as_object().unwrap();
        let mut pairs = form_pairs(payload);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("age", "3".to_owned()),
                ("amount", "49.5".to_owned()),
                ("email", "a@b.c".to_owned()),
            ]
        );
    }

    #[test]
    fn opaque_success_keeps_non_json_text() {
        let outcome = classify_success(&catalog::CUSTOMER_DELETE, "Customer deleted successfully".into());
        assert_eq!(
            outcome,
            RequestOutcome::Success(Body::Text("Customer deleted successfully".into()))
        );
    }

    #[test]
    fn json_success_rejects_malformed_body() {
        let outcome = classify_success(&catalog::CUSTOMER_LIST, "[{\"id\":1}".into());
        assert!(matches!(
            outcome,
            RequestOutcome::TransportError {
                kind: FailureKind::Decode,
                ..
            }
        ));
    }

    #[test]
    fn policy_always_overrides_descriptor() {
        let c = client("http://localhost:4000").with_credential_policy(CredentialPolicy::Always);
        assert!(c.attaches_credential(&catalog::BILLING_CREATE));
        let c = client("http://localhost:4000");
        assert!(!c.attaches_credential(&catalog::BILLING_CREATE));
    }
}
