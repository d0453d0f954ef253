// Host group resolution
//
// A group name is resolved to its internal id exactly once per run and
// reused for every member operation.

use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::models::HostGroup;
use crate::rpc::RpcClient;

impl RpcClient {
    /// Resolve a group name to its internal id via `hostgroup.get`.
    ///
    /// The filter is an exact-name match. An empty result is
    /// [`Error::GroupNotFound`]; if several groups match, the first one
    /// wins.
    pub async fn get_group_id(&self, name: &str) -> Result<String, Error> {
        debug!(group = name, "resolving host group");

        let params = json!({
            "filter": { "name": name },
        });

        let groups: Vec<HostGroup> = self.call("hostgroup.get", params).await?;

        groups
            .into_iter()
            .next()
            .map(|g| g.groupid)
            .ok_or_else(|| Error::GroupNotFound { name: name.into() })
    }
}
