// Service status

use tracing::debug;

use crate::catalog;
use crate::client::ResourceClient;
use crate::descriptor::Method;
use crate::error::Error;
use crate::models::HealthStatus;
use crate::outcome::Body;
use crate::session::Session;

impl ResourceClient {
    /// `GET /healthcheck`
    ///
    /// The endpoint answers with `key: value` text lines.
    pub async fn healthcheck(&self) -> Result<HealthStatus, Error> {
        debug!("checking service health");
        let body = self
            .perform(
                &Session::anonymous(),
                &catalog::HEALTHCHECK,
                Method::Get,
                None,
                None,
            )
            .await
            .into_body()?;
        Ok(match body {
            Body::Text(text) => HealthStatus::parse(&text),
            Body::Json(value) => serde_json::from_value(value).unwrap_or_default(),
            Body::Empty => HealthStatus::default(),
        })
    }
}
