//! imgadapter CLI
//!
//! Uploads images by URL and renders delivery references through the
//! configured main provider.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use imgadapter_core::ImageAdapter;
use imgadapter_shared::{AppConfig, LogSettings};

#[derive(Debug, Parser)]
#[command(name = "imgadapter", version, about = "Upload and fetch images through a storage provider")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ingest the image at a remote URL and print its reference.
    Upload {
        /// Target bucket (folder on the CDN).
        #[arg(long)]
        bucket: String,
        /// File name to store the image under.
        #[arg(long)]
        file_name: String,
        /// Where the provider fetches the image from.
        #[arg(long)]
        url: String,
    },
    /// Print the delivery URL for a stored image.
    Get {
        /// Bucket the image is stored in.
        #[arg(long)]
        bucket: String,
        /// Stored file name.
        #[arg(long)]
        file_name: String,
        /// Named transformation to apply. Disables URL signing.
        #[arg(long)]
        transformation: Option<String>,
    },
}

fn init_tracing(log: &LogSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log);

    if config.cloudinary.is_none() {
        bail!("no main provider configured: set CLOUDINARY_URL or IMGADAPTER__CLOUDINARY__URL");
    }

    // Binding failures are fatal at startup.
    let adapter = ImageAdapter::from_config(&config)
        .await
        .context("failed to bind storage providers")?;
    info!(main = ?adapter.main_provider(), "adapter ready");

    let reference = match cli.command {
        Command::Upload {
            bucket,
            file_name,
            url,
        } => adapter.upload(&bucket, &file_name, &url).await?,
        Command::Get {
            bucket,
            file_name,
            transformation,
        } => adapter.get(&bucket, &file_name, transformation.as_deref())?,
    };

    println!("{reference}");
    Ok(())
}
