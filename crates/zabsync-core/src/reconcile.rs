// Reconciliation planning
//
// Pure functions that compare a host snapshot against a freshly observed
// fact and compute the minimal mutation, or none when the observed state
// already matches. All I/O stays in the driver; these are the testable
// decision points.

use std::net::Ipv4Addr;

use zabsync_api::{GroupRef, HostRecord, NewHost, NewInterface};

/// Agent interface type for created hosts.
const INTERFACE_TYPE_AGENT: i32 = 1;

/// Compute the renamed display name, or `None` when the name already
/// carries the suffix.
///
/// The check makes repeated runs converge instead of re-appending the
/// suffix each time (`web-1.isb.isb`); see DESIGN.md for the deliberate
/// departure from the at-least-once behavior of the original tooling.
pub fn plan_rename(current: &str, suffix: &str) -> Option<String> {
    if suffix.is_empty() || current.ends_with(suffix) {
        return None;
    }
    Some(format!("{current}{suffix}"))
}

/// Interface mutation computed by [`plan_interface_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceUpdate {
    pub ip: Ipv4Addr,
    pub dns: String,
}

/// Compare a resolved address against every stored interface.
///
/// Returns `None` when any interface already carries the resolved IP
/// (the no-op case), otherwise the update repointing the host at the
/// resolved address, keeping its DNS name alongside.
pub fn plan_interface_update(host: &HostRecord, resolved: Ipv4Addr) -> Option<InterfaceUpdate> {
    let resolved_text = resolved.to_string();
    if host.interfaces.iter().any(|i| i.ip == resolved_text) {
        return None;
    }
    Some(InterfaceUpdate {
        ip: resolved,
        dns: host.host.clone(),
    })
}

/// Synthesize a new host record from a DNS name and its resolved address.
///
/// One primary agent interface, addressed by IP (the DNS field is left
/// empty when `useip` is set), attached to the already-resolved group.
pub fn new_host(dns: &str, ip: Ipv4Addr, group_id: &str, port: &str) -> NewHost {
    NewHost {
        host: dns.to_owned(),
        name: dns.to_owned(),
        interfaces: vec![NewInterface {
            interface_type: INTERFACE_TYPE_AGENT,
            main: 1,
            useip: 1,
            ip: ip.to_string(),
            dns: String::new(),
            port: port.to_owned(),
        }],
        groups: vec![GroupRef {
            groupids: vec![group_id.to_owned()],
        }],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::net::Ipv4Addr;

    use pretty_assertions::assert_eq;
    use zabsync_api::{HostInterface, HostRecord};

    use super::{new_host, plan_interface_update, plan_rename};

    fn host_with_ips(ips: &[&str]) -> HostRecord {
        HostRecord {
            hostid: "1001".into(),
            host: "a.example.com".into(),
            name: "a".into(),
            interfaces: ips
                .iter()
                .map(|ip| HostInterface {
                    interfaceid: Some("1".into()),
                    interface_type: "1".into(),
                    main: "1".into(),
                    useip: "1".into(),
                    ip: (*ip).to_owned(),
                    dns: "a.example.com".into(),
                    port: "10050".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn rename_appends_suffix() {
        assert_eq!(plan_rename("web-1", ".isb"), Some("web-1.isb".into()));
    }

    #[test]
    fn rename_is_idempotent() {
        assert_eq!(plan_rename("web-1.isb", ".isb"), None);
        assert_eq!(plan_rename("", ""), None);
    }

    #[test]
    fn interface_update_skips_matching_ip() {
        let host = host_with_ips(&["10.0.0.5"]);
        assert_eq!(
            plan_interface_update(&host, Ipv4Addr::new(10, 0, 0, 5)),
            None
        );
    }

    #[test]
    fn interface_update_matches_any_interface() {
        let host = host_with_ips(&["10.0.0.1", "10.0.0.9"]);
        assert_eq!(
            plan_interface_update(&host, Ipv4Addr::new(10, 0, 0, 9)),
            None
        );
    }

    #[test]
    fn interface_update_emitted_on_mismatch() {
        let host = host_with_ips(&["10.0.0.1"]);
        let update = plan_interface_update(&host, Ipv4Addr::new(10, 0, 0, 9)).unwrap();
        assert_eq!(update.ip, Ipv4Addr::new(10, 0, 0, 9));
        assert_eq!(update.dns, "a.example.com");
    }

    #[test]
    fn interface_update_applies_to_host_without_interfaces() {
        let host = host_with_ips(&[]);
        assert!(plan_interface_update(&host, Ipv4Addr::new(10, 0, 0, 9)).is_some());
    }

    #[test]
    fn new_host_shape() {
        let host = new_host(
            "new.example.com",
            Ipv4Addr::new(192, 0, 2, 7),
            "42",
            "10050",
        );
        assert_eq!(host.host, "new.example.com");
        assert_eq!(host.name, "new.example.com");
        assert_eq!(host.interfaces.len(), 1);
        assert_eq!(host.interfaces[0].ip, "192.0.2.7");
        assert_eq!(host.interfaces[0].useip, 1);
        assert_eq!(host.interfaces[0].dns, "");
        assert_eq!(host.groups[0].groupids, vec!["42".to_owned()]);
    }
}
