use std::net::{IpAddr, Ipv4Addr};

/// Replaces the last octet of a dotted-decimal address.
///
/// Anything that does not split into exactly four parts is returned unchanged.
pub fn derive_address(ip: &str, last_octet: &str) -> String {
    let mut parts: Vec<&str> = ip.split('.').collect();

    if parts.len() == 4 {
        parts[3] = last_octet;
        parts.join(".")
    } else {
        ip.to_owned()
    }
}

pub fn first_ipv4(addrs: &[IpAddr]) -> Option<Ipv4Addr> {
    addrs.iter().find_map(|addr| match addr {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(_) => None,
    })
}
