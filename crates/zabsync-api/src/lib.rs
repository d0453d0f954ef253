// zabsync-api: Async Rust client for Zabbix-style JSON-RPC inventory APIs

pub mod error;
pub mod groups;
pub mod hosts;
pub mod models;
pub mod rpc;
pub mod session;
pub mod transport;

pub use error::Error;
pub use models::{
    GroupRef, HostGroup, HostInterface, HostRecord, NewHost, NewInterface, RpcFault,
};
pub use rpc::{AuthPlacement, RpcClient};
pub use transport::{TlsMode, TransportConfig};
