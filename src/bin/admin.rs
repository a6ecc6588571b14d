//! CLI administration tool for link-shortener.
//!
//! Creates and resolves short links and runs database diagnostics without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://www.rust-lang.org/learn
//!
//! # Shorten with a custom suffix
//! cargo run --bin admin -- shorten https://example.com --suffix promo
//!
//! # Look up a key
//! cargo run --bin admin -- resolve 213de6
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Uses the same configuration as the server (`DATABASE_URL`, `STORAGE_BACKEND`,
//! `BASE_URL`, `SHORTEN_MAX_ATTEMPTS`). The `db` commands require PostgreSQL.

use link_shortener::application::services::LinkService;
use link_shortener::config::{self, Config, StorageBackend};
use link_shortener::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create (or fetch) the short key for a URL
    Shorten {
        /// URL to shorten
        url: Option<String>,

        /// Suffix appended to the URL before hashing
        #[arg(short, long)]
        suffix: Option<String>,
    },

    /// Look up the long URL for a short key
    Resolve {
        /// Short key (e.g. "c984d0")
        key: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Shorten { url, suffix } => handle_shorten(&config, url, suffix).await?,
        Commands::Resolve { key } => handle_resolve(&config, &key).await?,
        Commands::Stats => handle_stats(&config).await?,
        Commands::Db { action } => handle_db_action(&config, action).await?,
    }

    Ok(())
}

async fn build_service(config: &Config) -> Result<LinkService> {
    let store = server::build_store(config).await?;
    Ok(server::build_service(config, store))
}

/// Shortens a URL, prompting for it when not given on the command line.
async fn handle_shorten(config: &Config, url: Option<String>, suffix: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };

    let service = build_service(config).await?;
    let record = service
        .shorten(&long_url, suffix.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    let short_url = service.get_short_url(&config.base_url, &record.short_key);

    println!("  Key:       {}", record.short_key.bright_yellow().bold());
    println!("  Short URL: {}", short_url.cyan());
    println!("  Long URL:  {}", record.long_url.bright_white());
    println!(
        "  Created:   {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    if config.storage_backend == StorageBackend::Memory {
        println!(
            "{}",
            "⚠️  In-memory storage: this link is discarded on exit".yellow()
        );
    }

    Ok(())
}

/// Prints the long URL for a key, or a not-found notice.
async fn handle_resolve(config: &Config, key: &str) -> Result<()> {
    let service = build_service(config).await?;

    let long_url = service
        .resolve(key)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match long_url {
        Some(url) => {
            println!("{} {} {}", key.bright_yellow(), "→".bright_black(), url.cyan());
        }
        None => {
            println!("{}", format!("❌ No link for key '{}'", key).red());
        }
    }

    Ok(())
}

/// Displays the number of stored links.
async fn handle_stats(config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = build_service(config).await?;
    let links_count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(config: &Config, action: DbAction) -> Result<()> {
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("Database commands require STORAGE_BACKEND=postgres");
    }

    let pool = server::connect_pool(config)
        .await
        .context("Failed to connect to database")?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(&pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links_count.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
