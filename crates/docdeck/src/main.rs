use anyhow::Result;
use clap::{Parser, Subcommand};
use docdeck_common::{logger, AppConfig};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "docdeck")]
#[command(about = "DocDeck - document summaries, Q&A and slide drafts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides SERVER_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Directory for transient uploads (overrides UPLOAD_DIR)
        #[arg(long)]
        upload_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;

    if let Some(Commands::Serve {
        host,
        port,
        upload_dir,
    }) = cli.command
    {
        if let Some(host) = host {
            config.server_host = host;
        }
        if let Some(port) = port {
            config.server_port = port;
        }
        if let Some(dir) = upload_dir {
            config.upload_dir = dir;
        }
    }

    if config.file_logging_enabled() {
        logger::setup_logging(&config.log_dir, &config.log_level)?;
    } else {
        logger::setup_console_logging(&config.log_level)?;
    }

    tracing::info!("DocDeck starting...");
    tracing::info!("  Bind address: {}", config.server_bind_address());
    tracing::info!("  Upload directory: {}", config.upload_dir.display());

    println!("Server listening on http://{}", config.server_bind_address());

    docdeck_server::start_server(config).await?;

    Ok(())
}
