use crate::models::config::GatewayConfig;

/// Checks the submitted credentials against the account configured for
/// the gateway.
#[must_use]
pub fn verify_credentials(config: &GatewayConfig, username: &str, password: &str) -> bool {
    username == config.auth_username && password == config.auth_password
}
