#![windows_subsystem = "windows"]

use anyhow::Context;
use atelier_desktop::DesktopApp;
use atelier_kernel::config::load_config;
use atelier_kernel::domain::config::AppConfig;
use atelier_logger::Logger;
use atelier_size_guide::SizeGuidePage;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cfg: AppConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.log)?;

    info!(
        motion = cfg.motion.enabled,
        duration_ms = cfg.motion.duration_ms,
        stagger_ms = cfg.motion.stagger_ms,
        "Configuration loaded"
    );

    DesktopApp::from_config(&cfg).launch(SizeGuidePage);

    Ok(())
}
