use crate::hal::console::Console;

pub const SSID: &str = "SSID, your WIFI network name";
pub const PASSWORD: &str = "Password, your WIFI password";
pub const ENCRYPTION: &str = "WIFI Encryption ('open', 'wep', 'wpa' or 'wpa2')";
pub const DHCP: &str = "DHCP (y or n)";
pub const NAMESERVER: &str = "DNS (nameserver) often your Router-IP";
pub const GATEWAY: &str = "Gateway, often your Router-IP";
pub const NETMASK: &str = "Netmask";
pub const STATIC_IP: &str = "Static IP, the fixed IP-address for your Karotz";

pub fn prompt_text(question: &str, default: &str) -> String {
    if is_blank(default) {
        format!("{question}: ")
    } else {
        format!("{question} [Enter = {default}]: ")
    }
}

/// Asks a question on the console. A blank answer, or one that cannot be read, yields `default`.
pub fn ask(console: &dyn Console, question: &str, default: &str) -> String {
    console.write(&prompt_text(question, default));

    let answer = console.read_line().unwrap_or_else(|e| {
        log::warn!("Cannot read answer to {question:?}: {e:#}");
        String::new()
    });

    answer_or_default(answer, default)
}

fn answer_or_default(answer: String, default: &str) -> String {
    if is_blank(&answer) {
        default.to_owned()
    } else {
        answer
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
