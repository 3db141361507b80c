//! Flatten a volume's authorizations into access list entries

use super::models::{AccessEntry, AllowedDevice, AllowedHost, AllowedSubnet, NetworkStorage};

const VIRTUAL: &str = "VIRTUAL";
const HARDWARE: &str = "HARDWARE";
const SUBNET: &str = "SUBNET";
const IP: &str = "IP";
const IN_ACL: &str = "In ACL";

/// Display name with an optional note in parentheses
fn with_note(name: String, note: Option<&str>) -> String {
    match note.filter(|n| !n.is_empty()) {
        Some(note) => format!("{}({})", name, note),
        None => name,
    }
}

fn subnet_name(subnet: &AllowedSubnet) -> String {
    let cidr = subnet.cidr.map(|c| c.to_string()).unwrap_or_default();
    with_note(
        format!(
            "{}/{}",
            subnet.network_identifier.as_deref().unwrap_or_default(),
            cidr
        ),
        subnet.note.as_deref(),
    )
}

/// Copy initiator details from the allowed host onto an entry
fn apply_host(entry: &mut AccessEntry, host: Option<&AllowedHost>) {
    let Some(host) = host else {
        return;
    };
    entry.source_subnet = host.source_subnet.clone();
    entry.host_iqn = host.name.clone();
    entry.allowed_host_id = host.id;
    if let Some(credential) = &host.credential {
        entry.username = credential.username.clone();
        entry.password = credential.password.clone();
    }
}

fn device_entry(device: &AllowedDevice, kind: &str) -> AccessEntry {
    let mut entry = AccessEntry {
        id: device.id,
        name: Some(format!(
            "{}.{}",
            device.hostname.as_deref().unwrap_or_default(),
            device.domain.as_deref().unwrap_or_default()
        )),
        kind: kind.to_string(),
        private_ip_address: device.primary_backend_ip_address.clone(),
        ..Default::default()
    };
    apply_host(&mut entry, device.allowed_host.as_ref());
    entry
}

fn subnet_entry(subnet: &AllowedSubnet, kind: &str, host: Option<&AllowedHost>) -> AccessEntry {
    let mut entry = AccessEntry {
        id: subnet.id,
        name: Some(subnet_name(subnet)),
        kind: kind.to_string(),
        private_ip_address: subnet
            .end_point_ip_address
            .as_ref()
            .and_then(|ip| ip.ip_address.clone()),
        ..Default::default()
    };
    apply_host(&mut entry, host);
    entry
}

/// Subnets listed in a host's ACL, each under the host's credentials
fn acl_entries(host: Option<&AllowedHost>) -> Vec<AccessEntry> {
    let Some(host) = host else {
        return Vec::new();
    };
    host.subnets_in_acl
        .iter()
        .flatten()
        .map(|subnet| subnet_entry(subnet, IN_ACL, Some(host)))
        .collect()
}

/// Build the access list in API order: virtual servers, hardware, subnets,
/// then IP addresses
pub fn access_entries(volume: &NetworkStorage) -> Vec<AccessEntry> {
    let mut entries = Vec::new();

    for guest in volume.allowed_virtual_guests.iter().flatten() {
        entries.push(device_entry(guest, VIRTUAL));
    }

    for hardware in volume.allowed_hardware.iter().flatten() {
        entries.push(device_entry(hardware, HARDWARE));
        entries.extend(acl_entries(hardware.allowed_host.as_ref()));
    }

    for subnet in volume.allowed_subnets.iter().flatten() {
        entries.push(subnet_entry(subnet, SUBNET, subnet.allowed_host.as_ref()));
    }

    for ip in volume.allowed_ip_addresses.iter().flatten() {
        let mut entry = AccessEntry {
            id: ip.id,
            name: Some(with_note(
                ip.ip_address.clone().unwrap_or_default(),
                ip.note.as_deref(),
            )),
            kind: IP.to_string(),
            private_ip_address: ip.ip_address.clone(),
            ..Default::default()
        };
        apply_host(&mut entry, ip.allowed_host.as_ref());
        entries.extend(acl_entries(ip.allowed_host.as_ref()));
        entries.push(entry);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn volume(value: serde_json::Value) -> NetworkStorage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_virtual_guest_entry() {
        let v = volume(json!({
            "allowedVirtualGuests": [{
                "id": 11,
                "hostname": "vs1",
                "domain": "example.com",
                "primaryBackendIpAddress": "10.0.0.5",
                "allowedHost": {
                    "id": 501,
                    "name": "iqn.2020-01.com.ibm:vs1",
                    "sourceSubnet": "10.0.0.0/24",
                    "credential": {"username": "u1", "password": "p1"}
                }
            }]
        }));
        let entries = access_entries(&v);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.id, Some(11));
        assert_eq!(e.name.as_deref(), Some("vs1.example.com"));
        assert_eq!(e.kind, "VIRTUAL");
        assert_eq!(e.private_ip_address.as_deref(), Some("10.0.0.5"));
        assert_eq!(e.host_iqn.as_deref(), Some("iqn.2020-01.com.ibm:vs1"));
        assert_eq!(e.username.as_deref(), Some("u1"));
        assert_eq!(e.allowed_host_id, Some(501));
    }

    #[test]
    fn test_subnet_and_ip_names_carry_notes() {
        let v = volume(json!({
            "allowedSubnets": [
                {"id": 1, "networkIdentifier": "10.1.0.0", "cidr": 26, "note": "db"},
                {"id": 2, "networkIdentifier": "10.2.0.0", "cidr": 24}
            ],
            "allowedIpAddresses": [
                {"id": 3, "ipAddress": "10.3.0.1", "note": "backup"}
            ]
        }));
        let names: Vec<_> = access_entries(&v)
            .into_iter()
            .map(|e| (e.kind, e.name.unwrap_or_default()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("SUBNET".to_string(), "10.1.0.0/26(db)".to_string()),
                ("SUBNET".to_string(), "10.2.0.0/24".to_string()),
                ("IP".to_string(), "10.3.0.1(backup)".to_string()),
            ]
        );
    }

    #[test]
    fn test_acl_subnets_follow_hardware_and_precede_ip() {
        let v = volume(json!({
            "allowedHardware": [{
                "id": 7,
                "hostname": "bm",
                "domain": "lab",
                "allowedHost": {
                    "id": 70,
                    "subnetsInAcl": [{"id": 71, "networkIdentifier": "10.9.0.0", "cidr": 28}]
                }
            }],
            "allowedIpAddresses": [{
                "id": 8,
                "ipAddress": "10.8.0.1",
                "allowedHost": {
                    "id": 80,
                    "subnetsInAcl": [{"id": 81, "networkIdentifier": "10.8.0.0", "cidr": 30}]
                }
            }]
        }));
        let kinds: Vec<_> = access_entries(&v).into_iter().map(|e| (e.kind, e.id)).collect();
        assert_eq!(
            kinds,
            vec![
                ("HARDWARE".to_string(), Some(7)),
                ("In ACL".to_string(), Some(71)),
                ("In ACL".to_string(), Some(81)),
                ("IP".to_string(), Some(8)),
            ]
        );
    }

    #[test]
    fn test_acl_entries_inherit_host_id() {
        let v = volume(json!({
            "allowedHardware": [{
                "id": 7,
                "allowedHost": {"id": 70, "subnetsInAcl": [{"id": 71}]}
            }]
        }));
        let entries = access_entries(&v);
        assert_eq!(entries[1].allowed_host_id, Some(70));
        assert_eq!(entries[1].private_ip_address, None);
    }

    #[test]
    fn test_empty_volume_has_no_entries() {
        assert!(access_entries(&NetworkStorage::default()).is_empty());
    }
}
