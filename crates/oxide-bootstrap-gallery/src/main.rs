//! Renders a pattern library page showing every Bootstrap helper.

mod page;

use std::path::PathBuf;

use clap::Parser;
use oxide_bootstrap::BootstrapConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::page::{render_gallery, GalleryContext};

#[derive(Parser)]
#[command(name = "oxide-bootstrap-gallery")]
#[command(about = "Render a pattern library page for the Bootstrap helpers")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, env = "BOOTSTRAP_CONFIG")]
    config: Option<PathBuf>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Current page of the pagination demo
    #[arg(long, default_value_t = 3)]
    page: usize,

    /// Total pages of the pagination demo
    #[arg(long, default_value_t = 10)]
    total_pages: usize,

    /// Render the sample form with validation errors
    #[arg(long)]
    show_errors: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => BootstrapConfig::from_path(path)?,
        None => BootstrapConfig::default(),
    };

    let html = render_gallery(&GalleryContext {
        config,
        page: cli.page,
        total_pages: cli.total_pages,
        show_errors: cli.show_errors,
    });

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &html)?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}
