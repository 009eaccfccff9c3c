//! CLI entry point for fstudio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fstudio")]
#[command(version)]
#[command(about = "Photography studio site with a local content store", long_about = None)]
struct Cli {
    /// Set the studio directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new studio directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Start the public page server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to studio.yml)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to studio.yml)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Open an interactive content editing session
    Admin,

    /// List site content
    List {
        /// Kind of content to list (services, reviews, posts, portfolio)
        #[arg(default_value = "services")]
        kind: String,
    },

    /// Reset the content document to the defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "fstudio=debug,info"
    } else {
        "fstudio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine studio directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing studio in {:?}", target_dir);
            fstudio::commands::init::init_studio(&target_dir)?;
            println!("Initialized studio directory in {:?}", target_dir);
        }

        Commands::Serve { port, ip } => {
            let studio = fstudio::Studio::new(&base_dir)?;
            let port = port.unwrap_or(studio.config.port);
            let ip = ip.unwrap_or_else(|| studio.config.host.clone());

            tracing::info!("Starting server at http://{}:{}", ip, port);
            fstudio::server::start(&studio, &ip, port).await?;
        }

        Commands::Admin => {
            let studio = fstudio::Studio::new(&base_dir)?;
            fstudio::commands::admin::run(&studio)?;
        }

        Commands::List { kind } => {
            let studio = fstudio::Studio::new(&base_dir)?;
            fstudio::commands::list::run(&studio, &kind)?;
        }

        Commands::Reset { yes } => {
            let studio = fstudio::Studio::new(&base_dir)?;
            fstudio::commands::reset::run(&studio, yes)?;
        }

        Commands::Version => {
            println!("fstudio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
