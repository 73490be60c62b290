use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use groundswell::config::Config;
use groundswell::feeds::collect::collect_documents;
use groundswell::feeds::source::HttpFeedSource;
use groundswell::trends::analyzer::EnglishAnalyzer;
use groundswell::trends::TrendDetector;
use groundswell::web::{run_server, AppState};

/// Groundswell: trending-phrase detection for syndicated feeds.
///
/// Collects the configured feeds, ranks the most salient phrases, and serves
/// them over HTTP or prints them to the terminal.
#[derive(Parser)]
#[command(name = "groundswell", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Fetch the configured feeds once and print the trending phrases
    Trends {
        /// How many phrases to select (defaults to GROUNDSWELL_TREND_COUNT)
        #[arg(long)]
        count: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("groundswell=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_feeds()?;

            let state = AppState {
                config: Arc::new(config),
                source: Arc::new(HttpFeedSource::new()?),
                analyzer: Arc::new(EnglishAnalyzer::new()?),
            };

            run_server(state, port, &bind).await?;
        }

        Commands::Trends { count } => {
            let config = Config::load()?;
            config.require_feeds()?;

            let source = HttpFeedSource::new()?;
            let analyzer = EnglishAnalyzer::new()?;

            println!("Collecting {} feeds...", config.feed_urls.len());
            let documents = collect_documents(&source, &config.feed_urls).await;

            let detector = TrendDetector {
                max_order: config.ngram_max,
                include_descriptions: config.include_descriptions,
            };
            let report = detector.detect(&analyzer, &documents, count.unwrap_or(config.trend_count));

            report.display(documents.len());
        }
    }

    Ok(())
}
