// Batch driver
//
// One login, one group resolution, then a sequential per-item loop.
// Setup failures abort with no report; per-item failures are recorded
// and the loop keeps going. The only mid-loop abort is a rejected
// session token, because nothing re-authenticates.

use tracing::{debug, info, warn};

use zabsync_api::{AuthPlacement, RpcClient, TlsMode, TransportConfig};

use crate::config::{SyncConfig, TlsVerification, TokenPlacement};
use crate::error::CoreError;
use crate::reconcile::{new_host, plan_interface_update, plan_rename};
use crate::report::RunReport;
use crate::resolve::Resolver;

/// Batch driver facade over one authenticated session.
///
/// Constructed by [`connect`](Self::connect), which performs the
/// one-time setup chain (login, group resolution). The session token
/// and the resolved group id are read-only for the rest of the run.
pub struct SyncRunner {
    client: RpcClient,
    group_name: String,
    group_id: String,
}

impl SyncRunner {
    /// Log in and resolve the target group. Failure here is fatal to
    /// the run — there is nothing to enumerate without a group and no
    /// calls to make without a session.
    pub async fn connect(config: &SyncConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: match &config.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: config.timeout,
        };
        let placement = match config.token_placement {
            TokenPlacement::Header => AuthPlacement::Header,
            TokenPlacement::Body => AuthPlacement::Body,
        };

        let client = RpcClient::new(&config.url, placement, &transport)?;

        client.login(&config.username, &config.password).await?;
        info!(url = %config.url, user = %config.username, "logged in");

        let group_id = client.get_group_id(&config.group).await?;
        info!(group = %config.group, %group_id, "resolved host group");

        Ok(Self {
            client,
            group_name: config.group.clone(),
            group_id,
        })
    }

    /// Wrap an already-authenticated client (tests).
    pub fn with_client(
        client: RpcClient,
        group_name: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            group_name: group_name.into(),
            group_id: group_id.into(),
        }
    }

    /// The resolved internal id of the target group.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    // ── Flows ────────────────────────────────────────────────────────

    /// Rename every member's display name by appending `suffix`.
    ///
    /// Members already carrying the suffix are skipped, so the flow
    /// converges on repeated runs.
    pub async fn run_rename(&self, suffix: &str) -> Result<RunReport, CoreError> {
        let hosts = self.client.list_hosts(&self.group_id).await?;
        info!(
            count = hosts.len(),
            group = %self.group_name,
            suffix,
            "renaming group members"
        );

        let mut report = RunReport::new();
        for host in hosts {
            let Some(new_name) = plan_rename(&host.name, suffix) else {
                debug!(host = %host.host, "display name already carries suffix");
                report.skipped(&host.host, "name already current");
                continue;
            };

            match self.client.rename_host(&host.hostid, &new_name).await {
                Ok(()) => {
                    info!(host = %host.host, name = %new_name, "renamed");
                    report.applied(&host.host, format!("renamed to {new_name}"));
                }
                Err(e) => self.record_failure(&mut report, &host.host, "rename", e)?,
            }
        }
        Ok(report)
    }

    /// Register each work-list item as a new host: resolve its name to
    /// an IPv4 address and create a record with one agent interface on
    /// `port`, attached to the target group.
    pub async fn run_add<R: Resolver>(
        &self,
        items: &[String],
        resolver: &R,
        port: &str,
    ) -> Result<RunReport, CoreError> {
        info!(
            count = items.len(),
            group = %self.group_name,
            "registering hosts"
        );

        let mut report = RunReport::new();
        for dns in items {
            let ip = match resolver.resolve_ipv4(dns).await {
                Ok(ip) => ip,
                Err(e) => {
                    warn!(host = %dns, error = %e, "dns resolution failed");
                    report.failed(dns, format!("dns-resolution: {e}"));
                    continue;
                }
            };
            debug!(host = %dns, ip = %ip, "resolved");

            let host = new_host(dns, ip, &self.group_id, port);
            match self.client.create_host(&host).await {
                Ok(id) => {
                    info!(host = %dns, hostid = %id, "created");
                    report.applied(dns, format!("created with id {id}"));
                }
                Err(e) => self.record_failure(&mut report, dns, "create", e)?,
            }
        }
        Ok(report)
    }

    /// Reconcile each member's interface address against a fresh DNS
    /// resolution of its technical name. Members whose interfaces
    /// already carry the resolved address are skipped.
    ///
    /// With `filter` set, only members named in the list are processed;
    /// the rest of the group is left untouched.
    pub async fn run_sync_ip<R: Resolver>(
        &self,
        resolver: &R,
        filter: Option<&[String]>,
    ) -> Result<RunReport, CoreError> {
        let hosts = self.client.list_hosts(&self.group_id).await?;
        info!(
            count = hosts.len(),
            group = %self.group_name,
            "reconciling interface addresses"
        );

        let mut report = RunReport::new();
        for host in hosts {
            if let Some(names) = filter {
                if !names.iter().any(|n| n == &host.host) {
                    continue;
                }
            }

            if host.host.is_empty() {
                report.skipped(&host.name, "no dns name on record");
                continue;
            }

            let ip = match resolver.resolve_ipv4(&host.host).await {
                Ok(ip) => ip,
                Err(e) => {
                    warn!(host = %host.host, error = %e, "dns resolution failed");
                    report.failed(&host.host, format!("dns-resolution: {e}"));
                    continue;
                }
            };

            let Some(update) = plan_interface_update(&host, ip) else {
                debug!(host = %host.host, ip = %ip, "interface already current");
                report.skipped(&host.host, format!("ip already {ip}"));
                continue;
            };

            match self
                .client
                .update_host_interface(&host.hostid, &update.ip.to_string(), &update.dns)
                .await
            {
                Ok(()) => {
                    info!(host = %host.host, ip = %update.ip, "interface updated");
                    report.applied(&host.host, format!("ip updated to {}", update.ip));
                }
                Err(e) => self.record_failure(&mut report, &host.host, "update", e)?,
            }
        }
        Ok(report)
    }

    // ── Failure handling ─────────────────────────────────────────────

    /// Record a per-item API failure, or abort the batch when the
    /// session token was rejected — every later call would fail the
    /// same way.
    fn record_failure(
        &self,
        report: &mut RunReport,
        item: &str,
        operation: &str,
        err: zabsync_api::Error,
    ) -> Result<(), CoreError> {
        if err.is_auth_expired() {
            return Err(CoreError::SessionExpired {
                message: err.to_string(),
            });
        }
        warn!(host = %item, error = %err, "{operation} failed");
        report.failed(item, err.to_string());
        Ok(())
    }
}
