use crate::app::prompt;

const SET_WIFI: &str = "set_wifi";
const KEY_MGMT: &str = "WPA-PSK";

const DEFAULT_SSID: &str = "MYSSID";
const DEFAULT_PASSWORD: &str = "password";
const DEFAULT_ENCRYPTION: &str = "wpa2";

/// The `set_wifi` command understood by the Karotz.
#[derive(Debug, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WirelessConfig {
    cmd: String,
    encryption: String,
    ssid: String,
    key: String,
    settings: WirelessSupplicantConfig,
}

/// Same values as the outer record, in wpa_supplicant notation: quoted strings, upper case proto.
#[derive(Debug, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WirelessSupplicantConfig {
    ssid: String,
    scan_ssid: u8,
    proto: String,
    key_mgmt: String,
    psk: String,
}

impl Default for WirelessConfig {
    fn default() -> Self {
        Self {
            cmd: SET_WIFI.to_owned(),
            encryption: String::new(),
            ssid: String::new(),
            key: String::new(),
            settings: WirelessSupplicantConfig::default(),
        }
    }
}

impl Default for WirelessSupplicantConfig {
    fn default() -> Self {
        Self {
            ssid: String::new(),
            scan_ssid: 1,
            proto: String::new(),
            key_mgmt: KEY_MGMT.to_owned(),
            psk: String::new(),
        }
    }
}

impl WirelessConfig {
    pub fn set_ssid(&mut self, ssid: &str) {
        self.ssid = ssid.to_owned();
        self.settings.ssid = quoted(ssid);
    }

    pub fn set_key(&mut self, key: &str) {
        self.key = key.to_owned();
        self.settings.psk = quoted(key);
    }

    pub fn set_encryption(&mut self, encryption: &str) {
        self.encryption = encryption.to_lowercase();
        self.settings.proto = encryption.to_uppercase();
    }

    pub fn encryption(&self) -> &str {
        &self.encryption
    }

    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn settings(&self) -> &WirelessSupplicantConfig {
        &self.settings
    }
}

impl WirelessSupplicantConfig {
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn proto(&self) -> &str {
        &self.proto
    }

    pub fn key_mgmt(&self) -> &str {
        &self.key_mgmt
    }

    pub fn psk(&self) -> &str {
        &self.psk
    }
}

fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

pub fn build_wireless_config<F>(mut ask: F) -> WirelessConfig
where
    F: FnMut(&str, &str) -> String,
{
    let mut wifi = WirelessConfig::default();
    wifi.set_ssid(&ask(prompt::SSID, DEFAULT_SSID));
    wifi.set_key(&ask(prompt::PASSWORD, DEFAULT_PASSWORD));
    wifi.set_encryption(&ask(prompt::ENCRYPTION, DEFAULT_ENCRYPTION));
    wifi
}
