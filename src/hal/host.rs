use std::net::Ipv4Addr;

pub trait Host {
    /// First IPv4 address the local host name resolves to, if any.
    fn local_ipv4(&self) -> Option<Ipv4Addr>;
}
