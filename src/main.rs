//! CLI entry point for feedsmith

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "feedsmith")]
#[command(version)]
#[command(about = "Feed and sitemap generator for markdown blogs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// Generate the feeds and sitemap
    #[command(alias = "b")]
    Build,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// File name to use instead of the slugified title
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Remove generated feeds and sitemap
    Clean,

    /// List posts
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "feedsmith=debug,info"
    } else {
        "feedsmith=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Build => {
            let blog = feedsmith::Blog::new(&base_dir)?;
            tracing::info!("Building feeds and sitemap...");
            blog.build().await?;
            println!("Generated successfully!");
        }

        Commands::New { title, path } => {
            let blog = feedsmith::Blog::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            feedsmith::commands::new::run(&blog, &title, path.as_deref())?;
        }

        Commands::Clean => {
            let blog = feedsmith::Blog::new(&base_dir)?;
            tracing::info!("Cleaning generated artifacts...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let blog = feedsmith::Blog::new(&base_dir)?;
            feedsmith::commands::list::run(&blog).await?;
        }

        Commands::Version => {
            println!("feedsmith version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
