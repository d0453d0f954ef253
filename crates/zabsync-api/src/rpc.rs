// JSON-RPC HTTP client
//
// Wraps `reqwest::Client` with envelope construction, call-id assignment,
// token attachment, and response classification. Method wrappers
// (groups, hosts, session) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::RpcEnvelope;
use crate::transport::TransportConfig;

/// Where the session token is attached on authenticated calls.
///
/// Both encodings are accepted by the API; which one works depends on
/// the server version, so it is configuration rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPlacement {
    /// `Authorization: Bearer <token>` request header.
    #[default]
    Header,
    /// Top-level `auth` member of the request body.
    Body,
}

/// Raw client for the inventory system's JSON-RPC endpoint.
///
/// Holds the session token for the lifetime of the run (no re-login, no
/// logout) and assigns a monotonically increasing id to every call. The
/// id carries no meaning here, but the server must echo it for the
/// response to count as well-formed.
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: Url,
    auth_placement: AuthPlacement,
    token: RwLock<Option<String>>,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a new client for a server base URL.
    ///
    /// The JSON-RPC endpoint path (`api_jsonrpc.php`) is appended here,
    /// so `base_url` should be the frontend root, e.g.
    /// `https://zabbix.example.com/`.
    pub fn new(
        base_url: &Url,
        auth_placement: AuthPlacement,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let endpoint = base_url.join("api_jsonrpc.php").map_err(Error::InvalidUrl)?;
        Ok(Self {
            http,
            endpoint,
            auth_placement,
            token: RwLock::new(None),
            next_id: AtomicU64::new(1),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// The URL is used as the endpoint verbatim. Used by tests that point
    /// at a mock server.
    pub fn with_client(
        http: reqwest::Client,
        endpoint: Url,
        auth_placement: AuthPlacement,
    ) -> Self {
        Self {
            http,
            endpoint,
            auth_placement,
            token: RwLock::new(None),
            next_id: AtomicU64::new(1),
        }
    }

    /// The JSON-RPC endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether a session token is currently held.
    pub fn has_session(&self) -> bool {
        self.token.read().is_ok_and(|t| t.is_some())
    }

    pub(crate) fn set_token(&self, token: String) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token);
        }
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    // ── Call machinery ───────────────────────────────────────────────

    /// Issue one JSON-RPC call and decode the `result` payload into `T`.
    ///
    /// The session token (if any) is attached according to the
    /// configured [`AuthPlacement`]. Transport failures are never
    /// retried; retry policy belongs to the caller.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(method, id, "rpc call");

        let mut body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": id,
        });

        let token = self.current_token();
        let mut request = self.http.post(self.endpoint.clone());

        match (self.auth_placement, token) {
            (AuthPlacement::Header, Some(token)) => {
                request = request.bearer_auth(token);
            }
            (AuthPlacement::Body, Some(token)) => {
                if let Some(obj) = body.as_object_mut() {
                    obj.insert("auth".into(), json!(token));
                }
            }
            (_, None) => {}
        }

        let resp = request.json(&body).send().await.map_err(Error::Transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;

        let envelope: RpcEnvelope = serde_json::from_str(&text).map_err(|e| Error::Protocol {
            message: format!("malformed response envelope (HTTP {status}): {e}"),
            body: text.clone(),
        })?;

        if let Some(fault) = envelope.error {
            return Err(Error::Fault {
                code: fault.code,
                message: fault.message,
                data: fault.data,
            });
        }

        if envelope.id.is_none() {
            return Err(Error::Protocol {
                message: "response did not echo the request id".into(),
                body: text,
            });
        }

        let Some(result) = envelope.result else {
            return Err(Error::Protocol {
                message: "response carried neither result nor error".into(),
                body: text,
            });
        };

        serde_json::from_value(result).map_err(|e| Error::Decode {
            message: format!("unexpected result shape for {method}: {e}"),
        })
    }
}
