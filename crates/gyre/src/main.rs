use gyre::gui::app::AppModel;
use gyre::sys::runtime;
use gyre_core::config;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_default()?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.gyre.ring");

    app.run::<AppModel>((config, rx));
    Ok(())
}
