//! API health check. Needs no credential, so no keyring access.

use unboxing_api::{HealthStatus, ResourceClient};

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;
use crate::output;

fn detail(health: &HealthStatus) -> String {
    output::render_fields([
        ("Status", health.status.as_str()),
        ("Environment", health.environment.as_str()),
        ("Version", health.version.as_str()),
    ])
}

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config()?;
    let resolved = config::resolve(global, &cfg)?;
    let api_url = resolved.base_url.as_str();

    let client = ResourceClient::new(api_url, &resolved.transport)?;
    let health = client
        .healthcheck()
        .await
        .map_err(|e| CliError::from(e).at_url(api_url))?;

    let out = output::render_single(global.output, &health, detail, |h| h.status.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}
