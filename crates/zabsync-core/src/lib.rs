//! Business logic for the zabsync workspace.
//!
//! This crate sits between `zabsync-api` (the raw JSON-RPC client) and the
//! CLI binary:
//!
//! - **[`SyncRunner`]** — batch driver facade. [`connect()`](SyncRunner::connect)
//!   logs in and resolves the target host group exactly once, then the three
//!   flows ([`run_rename`](SyncRunner::run_rename),
//!   [`run_add`](SyncRunner::run_add), [`run_sync_ip`](SyncRunner::run_sync_ip))
//!   process members sequentially with per-item failure isolation.
//!
//! - **Reconciliation planning** ([`reconcile`]) — pure functions computing
//!   the minimal mutation from a host snapshot plus a freshly observed fact
//!   (a DNS resolution); no I/O, fully unit-testable.
//!
//! - **[`Resolver`]** — DNS seam. [`SystemResolver`] asks the OS resolver;
//!   tests substitute a fixed map.
//!
//! - **[`RunReport`]** — ordered per-item outcomes (applied / skipped /
//!   failed) accumulated by the driver and rendered by the CLI.

pub mod config;
pub mod error;
pub mod reconcile;
pub mod report;
pub mod resolve;
pub mod sync;
pub mod worklist;

pub use config::{SyncConfig, TlsVerification, TokenPlacement};
pub use error::CoreError;
pub use reconcile::{InterfaceUpdate, new_host, plan_interface_update, plan_rename};
pub use report::{Outcome, ReportEntry, RunReport};
pub use resolve::{ResolveError, Resolver, SystemResolver};
pub use sync::SyncRunner;
pub use worklist::read_work_list;
