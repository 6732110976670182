use std::path::PathBuf;
use std::sync::Arc;
use clap::Parser;
use teloxide::types::ChatId;
use tracing::info;

use fd_bot::commands::NOTHING_NEW;
use fd_core::{Config, Error, Result};
use fd_digest::DigestService;
use fd_feeds::FeedManager;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML config file; built-in defaults apply when absent
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seen-link store backend. Available: file (default), memory
    #[arg(long, default_value = "file")]
    store: String,
    /// Path of the seen-link file
    #[arg(long, default_value = "seen_links.json")]
    store_path: PathBuf,
    /// Classifier backend. Available: huggingface (default), keyword
    #[arg(long, default_value = "huggingface")]
    classifier: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the Telegram bot with the daily schedule
    Bot,
    /// Build one digest now
    Digest {
        /// Deliver to the configured chat instead of printing to stdout
        #[arg(long)]
        send: bool,
    },
    /// List configured feeds
    Feeds,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    info!(
        "📰 {} feed(s), {} label(s) configured",
        config.feeds.len(),
        config.labels.len()
    );

    let store = fd_storage::create_store(&cli.store, &cli.store_path)?;
    info!("💾 Seen-link store ready ({} link(s) on record)", store.count().await?);

    let classifier = fd_classify::create_classifier(
        &cli.classifier,
        fd_classify::Config {
            api_token: std::env::var("HF_API_TOKEN").ok(),
            model_name: None,
        },
    )?;
    info!("🧠 Classifier ready (using {})", classifier.name());

    let feeds = FeedManager::new(&config)?;
    let service = Arc::new(DigestService::new(
        Arc::new(feeds),
        classifier,
        store,
        config.labels.clone(),
        config.message_limit,
    ));

    match cli.command {
        Commands::Bot => {
            let token = require_env("TELEGRAM_API_TOKEN")?;
            let chat_id = chat_id_env()?;
            info!("🤖 Bot starting, daily digest at {:02}:{:02} UTC", config.digest_hour, config.digest_minute);
            let app = fd_bot::BotApp::new(
                &token,
                chat_id,
                service,
                config.digest_hour,
                config.digest_minute,
            );
            app.run().await?;
        }
        Commands::Digest { send } => {
            if send {
                let token = require_env("TELEGRAM_API_TOKEN")?;
                let chat_id = chat_id_env()?;
                let bot = teloxide::Bot::new(token);
                fd_bot::send_digest(&bot, ChatId(chat_id), &service).await?;
                info!("✨ Digest delivered");
            } else {
                let digest = service.build().await?;
                if digest.is_empty() {
                    println!("{}", NOTHING_NEW);
                } else {
                    for chunk in &digest.chunks {
                        println!("{}", chunk);
                    }
                    service.commit(&digest.articles).await?;
                }
            }
        }
        Commands::Feeds => {
            for feed in &config.feeds {
                println!("  - {} ({})", feed.name, feed.url);
            }
        }
    }

    Ok(())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| Error::Config(format!("{} is not set", key)))
}

fn chat_id_env() -> Result<i64> {
    let raw = require_env("CHAT_ID")?;
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("CHAT_ID must be a numeric chat id, got {:?}", raw)))
}
