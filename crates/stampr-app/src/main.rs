use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use stampr_types::{AppEvent, DeliveryMode};

mod controller;
mod logging;
mod profile;
mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Read the text stamp burned into the bottom edge of a photo.
#[derive(Parser, Debug)]
#[command(name = "stampr", version)]
struct Cli {
    /// Photo to read.
    #[arg(required_unless_present = "dump_config")]
    image: Option<PathBuf>,

    /// JSON config profile; environment variables are used when absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the crop's distance from the bottom edge, in pixels.
    #[arg(long)]
    bottom_margin: Option<u32>,

    /// Delivery contract(s) to run: callback, observable or both.
    #[arg(long, default_value = "both")]
    mode: DeliveryMode,

    /// Write the cropped region to this file.
    #[arg(long)]
    save_crop: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    dump_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref(), cli.bottom_margin)?;

    if cli.dump_config {
        println!("{}", profile::render_config(&config)?);
        return Ok(());
    }

    let image_path = cli.image.context("No image given")?;
    let source = image::open(&image_path)
        .with_context(|| format!("Failed to open image {}", image_path.display()))?;

    let state = Arc::new(AppState::new(config)?);
    let controller = AppController::new(state);

    if let Some(path) = &cli.save_crop {
        controller.save_crop(&source, path)?;
    }

    let outcomes = controller.run(&source, cli.mode).await?;
    if outcomes.is_empty() {
        anyhow::bail!("No crop possible for {}", image_path.display());
    }

    for outcome in outcomes {
        match outcome {
            AppEvent::CallbackText { text, .. } | AppEvent::ObservedText { text, .. } => {
                println!("{text}");
            }
            AppEvent::ObservedError { .. } | AppEvent::StreamsClosed { .. } => {}
        }
    }

    Ok(())
}
