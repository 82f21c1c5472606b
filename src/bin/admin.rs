//! CLI administration tool for slug-redirect.
//!
//! Operates on the same PostgreSQL store as the server, through the same
//! service and validation rules as the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Create a link (slug optional)
//! cargo run --bin admin -- link create https://example.com --slug docs
//!
//! # Show where a slug points
//! cargo run --bin admin -- link show docs
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `slug_redirect::config`.

use slug_redirect::application::services::LinkService;
use slug_redirect::config;
use slug_redirect::infrastructure::persistence::Store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing slug-redirect.
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
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new link
    Create {
        /// Destination URL
        url: String,

        /// Custom slug (generated if omitted)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Show the URL a slug redirects to
    Show {
        /// Slug to resolve
        slug: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    if config.uses_memory_store() {
        anyhow::bail!(
            "admin needs a PostgreSQL DATABASE_URL; the memory store lives only inside the server process"
        );
    }

    let store = Store::connect(&config).await?;

    let result = match cli.command {
        Commands::Link { action } => handle_link_action(action, &store).await,
        Commands::Db { action } => handle_db_action(action, &store).await,
    };

    store.close().await;
    result
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, store: &Store) -> Result<()> {
    let service = LinkService::new(store.link_repository());

    match action {
        LinkAction::Create { url, slug } => {
            println!("{}", "🔗 Create Link".bright_blue().bold());
            println!();

            let link = service
                .create_link(slug, Some(url))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

            println!("{}", "✅ Link created".green().bold());
            println!("  ID:   {}", link.id.to_string().bright_black());
            println!("  Slug: {}", link.slug.cyan());
            println!("  URL:  {}", link.url.bright_white());
            println!();
        }
        LinkAction::Show { slug } => {
            let link = service
                .get_link_by_slug(&slug)
                .await
                .map_err(|e| anyhow::anyhow!("{}: {}", slug, e))?;

            println!("  {} → {}", link.slug.cyan(), link.url.bright_white());
        }
    }

    Ok(())
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, store: &Store) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            store
                .link_repository()
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            store.migrate().await?;

            println!("{}", "✅ Migrations up to date".green().bold());
        }
    }

    Ok(())
}
