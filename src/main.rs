use karotz_netconf::app::App;
use karotz_netconf::config::Config;
use karotz_netconf::svc::StdPlatform;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::default();

    log::info!("Create platform");
    let platform = StdPlatform::new(&config);

    log::info!("Create app");
    let app = App::new(&platform, &config);

    let document = app.run()?;
    log::debug!("document is {} bytes", document.len());

    Ok(())
}
