use serde::Deserialize;

#[derive(Debug, Deserialize)]
/// Credentials submitted by the gateway login form.
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
