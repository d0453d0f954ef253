// Session management
//
// One `user.login` call per run. The returned token is opaque, has no
// tracked expiry, and is attached to every subsequent call by the RPC
// client. There is no logout; the session dies with the process.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::rpc::RpcClient;

impl RpcClient {
    /// Authenticate with username/password and store the session token.
    ///
    /// Credentials travel in cleartext in the request body — that is a
    /// property of the wrapped protocol, so the transport must provide
    /// confidentiality (HTTPS). A fault here is an authentication
    /// failure and fatal to the run.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        debug!(username, "logging in");

        let params = json!({
            "user": username,
            "password": password.expose_secret(),
        });

        let token: String = self.call("user.login", params).await.map_err(|e| match e {
            Error::Fault { code, message, data } => Error::Authentication {
                message: format!(
                    "{message} (code {code}){}",
                    data.map(|d| format!(": {d}")).unwrap_or_default()
                ),
            },
            other => other,
        })?;

        if token.is_empty() {
            return Err(Error::Authentication {
                message: "server returned an empty session token".into(),
            });
        }

        self.set_token(token);
        debug!("login successful");
        Ok(())
    }
}
