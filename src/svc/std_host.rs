use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

use anyhow::{anyhow, ensure, Context};

use crate::hal::host::Host;
use crate::svc::address::first_ipv4;

pub struct StdHost;

impl Host for StdHost {
    fn local_ipv4(&self) -> Option<Ipv4Addr> {
        match host_name().and_then(|name| resolve(&name)) {
            Ok(addrs) => {
                log::debug!("host addresses: {:?}", addrs);
                first_ipv4(&addrs)
            }
            Err(e) => {
                log::warn!("Cannot resolve local address: {e:#}");
                None
            }
        }
    }
}

fn host_name() -> anyhow::Result<String> {
    let name = gethostname::gethostname()
        .into_string()
        .map_err(|name| anyhow!("Host name {name:?} is not valid UTF-8"))?;
    ensure!(!name.is_empty(), "Host name is empty");
    Ok(name)
}

fn resolve(name: &str) -> anyhow::Result<Vec<IpAddr>> {
    let addrs = (name, 0)
        .to_socket_addrs()
        .with_context(|| format!("Cannot resolve {name}"))?;
    Ok(addrs.map(|addr| addr.ip()).collect())
}
