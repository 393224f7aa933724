#![deny(warnings)]

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use clockface::{
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    args.apply_to(&mut config);

    // Validate before touching the terminal so a bad margin draws nothing
    let geometry = config.face_geometry()?;
    log::info!(
        "Mounting clock: diameter {}, margin {}, mode {}",
        geometry.diameter(),
        geometry.hand_margin_width(),
        config.clock.counter_mode
    );

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.frame_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new_with_config(&config, tui)?;
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
