use crate::app::network::build_network_config;
use crate::app::prompt::ask;
use crate::app::wifi::build_wireless_config;
use crate::config::Config;
use crate::hal::console::Console;
use crate::hal::Platform;

pub mod document;
pub mod network;
pub mod prompt;
pub mod wifi;

const BANNER_WIDTH: usize = 78;

pub struct App<'a> {
    platform: &'a dyn Platform,
    config: &'a Config,
}

impl<'a> App<'a> {
    pub fn new(platform: &'a dyn Platform, config: &'a Config) -> Self {
        Self { platform, config }
    }

    /// Runs the whole questionnaire once and returns the document that was written.
    ///
    /// A failed write is reported on the console and does not abort the run.
    pub fn run(&self) -> anyhow::Result<String> {
        let console = self.platform.console();
        let answer = |question: &str, default: &str| ask(console, question, default);

        message(
            console,
            "This program will create 'network.conf' for your Karotz.\nPlease enter information needed to connect to WIFI.",
        );
        let wifi = build_wireless_config(answer);

        message(
            console,
            "Please enter information needed to create network configuration.",
        );
        let local_ip = self.local_ip();
        log::info!("Local address is {local_ip}");
        let network = build_network_config(&local_ip, answer);

        let document = document::compose(&wifi, &network)?;
        message(console, &format!("Your configuration:\n{document}"));

        if let Err(e) = self.platform.storage().persist(&document) {
            log::error!("{e:#}");
            console.write(&format!("{e:#}\n"));
        }

        message(console, "Configuration is saved. Press a key to exit");
        if let Err(e) = console.read_line() {
            log::warn!("{e:#}");
        }

        Ok(document)
    }

    fn local_ip(&self) -> String {
        self.platform
            .host()
            .local_ipv4()
            .unwrap_or(self.config.fallback_address)
            .to_string()
    }
}

fn message(console: &dyn Console, text: &str) {
    let line = "-".repeat(BANNER_WIDTH);
    console.write(&format!("{line}\n{text}\n{line}\n"));
}
