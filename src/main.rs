//! CLI entry point for lessons-rs

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lessons-rs")]
#[command(version)]
#[command(about = "A small static site generator for markdown lesson sites", long_about = None)]
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
    /// Initialize a new lesson site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new lesson
    New {
        /// Title of the new lesson
        title: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// List all lessons
    List,

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "lessons_rs=debug,info"
    } else {
        "lessons_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

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
            tracing::info!("Initializing lesson site in {:?}", target_dir);
            lessons_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized empty lesson site in {:?}", target_dir);
        }

        Commands::New { title } => {
            let site = lessons_rs::Site::new(&base_dir)?;
            tracing::info!("Creating new lesson: {}", title);
            lessons_rs::commands::new::create_lesson(&site, &title)?;
        }

        Commands::Generate { watch } => {
            let site = lessons_rs::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");

            lessons_rs::commands::generate::run(&site)?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                lessons_rs::commands::generate::watch(&site).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = lessons_rs::Site::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            lessons_rs::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::List => {
            let site = lessons_rs::Site::new(&base_dir)?;
            lessons_rs::commands::list::run(&site)?;
        }

        Commands::Clean => {
            let site = lessons_rs::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("lessons-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
