use anyhow::{Context, Result};
use log::info;

use circle_collision::{config::Config, gui, logging};

fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!("config: {:?}", config);

    gui::run(&config)
}
