use crate::app::prompt;
use crate::svc::address::derive_address;

const SET_IP: &str = "set_ip";
const INTERFACE: &str = "wlan0";

const DEFAULT_DHCP: &str = "n";
const DEFAULT_NETMASK: &str = "255.255.255.0";
const ROUTER_OCTET: &str = "1";
const STATIC_IP_OCTET: &str = "130";

/// The `set_ip` command understood by the Karotz.
///
/// With `dhcp` set, the static fields stay empty.
#[derive(Debug, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NetworkConfig {
    cmd: String,
    pub dhcp: bool,
    interface: String,
    pub nameserver: String,
    pub gateway: String,
    pub netmask: String,
    pub ip: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            cmd: SET_IP.to_owned(),
            dhcp: false,
            interface: INTERFACE.to_owned(),
            nameserver: String::new(),
            gateway: String::new(),
            netmask: String::new(),
            ip: String::new(),
        }
    }
}

impl NetworkConfig {
    pub fn interface(&self) -> &str {
        &self.interface
    }
}

pub fn build_network_config<F>(local_ip: &str, mut ask: F) -> NetworkConfig
where
    F: FnMut(&str, &str) -> String,
{
    let mut network = NetworkConfig {
        dhcp: ask(prompt::DHCP, DEFAULT_DHCP).to_lowercase().starts_with('y'),
        ..Default::default()
    };

    if !network.dhcp {
        let router = derive_address(local_ip, ROUTER_OCTET);
        network.nameserver = ask(prompt::NAMESERVER, &router);
        network.gateway = ask(prompt::GATEWAY, &router);
        network.netmask = ask(prompt::NETMASK, DEFAULT_NETMASK);
        network.ip = ask(prompt::STATIC_IP, &derive_address(local_ip, STATIC_IP_OCTET));
    }

    network
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        answers: Vec<&'static str>,
        asked: Vec<(String, String)>,
    }

    impl Recorder {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().rev().copied().collect(),
                asked: Vec::new(),
            }
        }

        fn ask(&mut self, question: &str, default: &str) -> String {
            self.asked.push((question.to_owned(), default.to_owned()));
            match self.answers.pop() {
                Some(answer) if !answer.trim().is_empty() => answer.to_owned(),
                _ => default.to_owned(),
            }
        }
    }

    #[test]
    fn test_network_config_default() {
        let network = NetworkConfig::default();
        assert_eq!(network.cmd, "set_ip");
        assert_eq!(network.interface(), "wlan0");
        assert!(!network.dhcp);
        assert_eq!(network.ip, "");
    }

    #[test]
    fn test_static_fields_are_stored_verbatim() {
        let mut recorder = Recorder::new(&["n", "8.8.8.8", "192.168.0.254", "255.0.0.0", "192.168.0.77"]);

        let network = build_network_config("192.168.0.10", |q, d| recorder.ask(q, d));

        assert!(!network.dhcp);
        assert_eq!(network.nameserver, "8.8.8.8");
        assert_eq!(network.gateway, "192.168.0.254");
        assert_eq!(network.netmask, "255.0.0.0");
        assert_eq!(network.ip, "192.168.0.77");
        assert_eq!(recorder.asked.len(), 5);
    }

    #[test]
    fn test_defaults_are_derived_from_local_ip() {
        let mut recorder = Recorder::new(&[]);

        let network = build_network_config("10.0.0.5", |q, d| recorder.ask(q, d));

        assert_eq!(
            recorder.asked,
            vec![
                (prompt::DHCP.to_owned(), "n".to_owned()),
                (prompt::NAMESERVER.to_owned(), "10.0.0.1".to_owned()),
                (prompt::GATEWAY.to_owned(), "10.0.0.1".to_owned()),
                (prompt::NETMASK.to_owned(), "255.255.255.0".to_owned()),
                (prompt::STATIC_IP.to_owned(), "10.0.0.130".to_owned()),
            ]
        );
        assert_eq!(network.ip, "10.0.0.130");
        assert_eq!(network.netmask, "255.255.255.0");
    }

    #[test]
    fn test_dhcp_skips_static_fields() {
        for answer in ["yes", "Y", "y", "Yup"] {
            let mut recorder = Recorder::new(&[answer]);

            let network = build_network_config("10.0.0.5", |q, d| recorder.ask(q, d));

            assert!(network.dhcp, "{answer}");
            assert_eq!(recorder.asked.len(), 1);
            assert_eq!(network.nameserver, "");
            assert_eq!(network.gateway, "");
            assert_eq!(network.netmask, "");
            assert_eq!(network.ip, "");
        }
    }

    #[test]
    fn test_anything_else_means_no_dhcp() {
        for answer in ["n", "no", "N", "maybe", " y"] {
            let mut recorder = Recorder::new(&[answer]);
            let network = build_network_config("10.0.0.5", |q, d| recorder.ask(q, d));
            assert!(!network.dhcp, "{answer}");
        }
    }

    #[test]
    fn test_malformed_local_ip_is_offered_unchanged() {
        let mut recorder = Recorder::new(&[]);

        let network = build_network_config("localhost", |q, d| recorder.ask(q, d));

        assert_eq!(network.gateway, "localhost");
        assert_eq!(network.ip, "localhost");
    }
}
