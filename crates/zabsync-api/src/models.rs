// Wire types for the JSON-RPC inventory API.
//
// Every response is the fixed envelope `{ jsonrpc, result | error, id }`.
// Read models use `#[serde(default)]` liberally because the API returns
// scalars as strings and omits fields depending on server version and
// the requested `output` columns.

use serde::{Deserialize, Serialize};

// ── Response envelope ────────────────────────────────────────────────

/// JSON-RPC 2.0 response envelope.
///
/// Exactly one of `result` / `error` is populated on a well-formed
/// response; the request `id` is echoed back. Anything else is a
/// protocol error, classified by the RPC client.
#[derive(Debug, Deserialize)]
pub struct RpcEnvelope {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcFault>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// Application-level rejection from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcFault {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

// ── Host group ───────────────────────────────────────────────────────

/// One host group from `hostgroup.get`.
#[derive(Debug, Clone, Deserialize)]
pub struct HostGroup {
    pub groupid: String,
    #[serde(default)]
    pub name: String,
}

// ── Host record ──────────────────────────────────────────────────────

/// One inventory host from `host.get`.
///
/// `host` is the technical name (usually the DNS name the host was
/// registered under); `name` is the visible display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostRecord {
    pub hostid: String,
    pub host: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interfaces: Vec<HostInterface>,
}

/// Network interface attached to a host record.
///
/// The API encodes the numeric fields as strings on reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInterface {
    #[serde(default)]
    pub interfaceid: Option<String>,
    #[serde(default, rename = "type")]
    pub interface_type: String,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub useip: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub dns: String,
    #[serde(default)]
    pub port: String,
}

// ── Mutation payloads ────────────────────────────────────────────────

/// `host.create` request payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewHost {
    pub host: String,
    pub name: String,
    pub interfaces: Vec<NewInterface>,
    pub groups: Vec<GroupRef>,
}

/// Interface entry for a `host.create` call. Numeric fields are sent as
/// numbers; the server accepts either encoding on writes.
#[derive(Debug, Clone, Serialize)]
pub struct NewInterface {
    #[serde(rename = "type")]
    pub interface_type: i32,
    pub main: i32,
    pub useip: i32,
    pub ip: String,
    pub dns: String,
    pub port: String,
}

/// Group attachment for a `host.create` call.
#[derive(Debug, Clone, Serialize)]
pub struct GroupRef {
    pub groupids: Vec<String>,
}

/// `host.create` / `host.update` result payload.
#[derive(Debug, Deserialize)]
pub struct HostIds {
    #[serde(default)]
    pub hostids: Vec<String>,
}
