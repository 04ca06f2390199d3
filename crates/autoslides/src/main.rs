use anyhow::{Context, Result};
use autoslides_common::{logger, AppConfig};
use autoslides_llm::{GeminiClient, Generator, SlideOptions, Source, DEFAULT_SLIDE_COUNT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Find the nearest ancestor directory holding a .env file
fn find_dotenv() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        let candidate = current_dir.join(".env");
        if candidate.exists() {
            return Some(candidate);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

#[derive(Parser)]
#[command(name = "autoslides")]
#[command(about = "AutoSlides - AI-powered slide generation", long_about = None)]
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

        /// Port to bind to (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate slides from a text file once and print the JSON result
    Generate {
        /// File whose contents become the single text source
        content_file: PathBuf,

        /// Number of slides to ask for
        #[arg(default_value_t = DEFAULT_SLIDE_COUNT)]
        slide_count: u32,

        /// Slide template style
        #[arg(default_value = "default")]
        template: String,

        /// Output language
        #[arg(long, default_value = "english")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = find_dotenv() {
        dotenv::from_path(&path).ok();
    }

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(host, port).await,
        Some(Commands::Generate {
            content_file,
            slide_count,
            template,
            language,
        }) => {
            let options = SlideOptions {
                slide_count,
                template,
                language,
                ..SlideOptions::default()
            };
            generate(content_file, options).await
        }
        None => serve(None, None).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    config.validate()?;

    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("AutoSlides starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Model: {}", config.llm_model);

    println!("Server listening on http://{}", config.server_bind_address());

    autoslides_server::start_server(config).await?;
    Ok(())
}

async fn generate(content_file: PathBuf, options: SlideOptions) -> Result<()> {
    let config = AppConfig::from_env()?;
    logger::setup_console_logging(&config.log_level)?;

    let content = std::fs::read_to_string(&content_file)
        .with_context(|| format!("Failed to read {}", content_file.display()))?;

    let client = GeminiClient::from_config(&config)?;
    let generator = Generator::new(Arc::new(client)).with_title_word_limit(config.title_word_limit);

    let outcome = generator.generate_slides(&[Source::text(content)], &options).await;
    if let Some(failure) = outcome.failure() {
        tracing::warn!("Returning placeholder deck: {}", failure);
    }

    println!("{}", serde_json::to_string_pretty(outcome.result())?);
    Ok(())
}
