use std::net::Ipv4Addr;
use std::path::PathBuf;

const OUTPUT_FILE_NAME: &str = "network.conf";

/// Used when the host has no resolvable IPv4 address.
const FALLBACK_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);

pub struct Config {
    pub output_path: PathBuf,
    pub fallback_address: Ipv4Addr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
            fallback_address: FALLBACK_ADDRESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_path, PathBuf::from("network.conf"));
        assert_eq!(config.fallback_address.to_string(), "192.168.1.1");
    }
}
