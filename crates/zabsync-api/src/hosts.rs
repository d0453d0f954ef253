// Host endpoints
//
// Enumeration via host.get, creation via host.create, and the two
// update shapes (display name, interface address) via host.update.

use serde_json::json;
use tracing::{debug, warn};

use crate::error::Error;
use crate::models::{HostIds, HostRecord, NewHost};
use crate::rpc::RpcClient;

impl RpcClient {
    /// List all hosts in a group, with identifiers, display names, and
    /// interfaces.
    ///
    /// An empty group yields an empty vec, not an error. Individual
    /// records that fail to decode are logged and skipped — one corrupt
    /// record must not block the rest of the group.
    pub async fn list_hosts(&self, group_id: &str) -> Result<Vec<HostRecord>, Error> {
        debug!(group_id, "listing hosts");

        let params = json!({
            "output": ["hostid", "host", "name"],
            "selectInterfaces": "extend",
            "groupids": [group_id],
        });

        let raw: Vec<serde_json::Value> = self.call("host.get", params).await?;

        let mut hosts = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<HostRecord>(value) {
                Ok(host) => hosts.push(host),
                Err(e) => warn!(error = %e, "skipping malformed host record"),
            }
        }
        Ok(hosts)
    }

    /// Register a new host and return its assigned id.
    pub async fn create_host(&self, host: &NewHost) -> Result<String, Error> {
        debug!(host = %host.host, "creating host");

        let params = serde_json::to_value(host).map_err(|e| Error::Decode {
            message: format!("failed to serialize host.create params: {e}"),
        })?;

        let ids: HostIds = self.call("host.create", params).await?;
        ids.hostids.into_iter().next().ok_or_else(|| Error::Decode {
            message: "host.create returned no host ids".into(),
        })
    }

    /// Change a host's visible display name.
    pub async fn rename_host(&self, host_id: &str, name: &str) -> Result<(), Error> {
        debug!(host_id, name, "renaming host");

        let params = json!({
            "hostid": host_id,
            "name": name,
        });

        let _ids: HostIds = self.call("host.update", params).await?;
        Ok(())
    }

    /// Repoint a host's interface at a freshly resolved address.
    pub async fn update_host_interface(
        &self,
        host_id: &str,
        ip: &str,
        dns: &str,
    ) -> Result<(), Error> {
        debug!(host_id, ip, dns, "updating host interface");

        let params = json!({
            "hostid": host_id,
            "interfaces": [{ "ip": ip, "dns": dns }],
        });

        let _ids: HostIds = self.call("host.update", params).await?;
        Ok(())
    }
}
