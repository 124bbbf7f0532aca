//! CLI administration tool for link-shortener.
//!
//! Runs the same service operations as the HTTP API directly against the
//! database, for operators without API access.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- links create https://example.com/page --expire-days 7
//!
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show statistics for one link
//! cargo run --bin admin -- links stats o6nh7Zc0
//!
//! # Soft-delete a link
//! cargo run --bin admin -- links delete o6nh7Zc0
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `SHORTENER_BASE_URL` (optional): prefix of printed short links

use link_shortener::application::context::RequestContext;
use link_shortener::application::services::{CreateLink, ShortenerService};
use link_shortener::domain::entities::Link;
use link_shortener::domain::errors::ShortenerError;
use link_shortener::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prefix of printed short links
    #[arg(long, env = "SHORTENER_BASE_URL", default_value = "https://example.com")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// URL to shorten
        url: String,

        /// Lifetime in days (default applies when omitted)
        #[arg(short, long, default_value_t = 0)]
        expire_days: i64,
    },

    /// List all links, newest first
    List,

    /// Show statistics for a link
    Stats {
        /// Short code
        code: String,
    },

    /// Soft-delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool, &cli.base_url).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, base_url: &str) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = ShortenerService::new(repo, base_url);
    let ctx = RequestContext::new();

    match action {
        LinkAction::Create { url, expire_days } => {
            create_link(&service, &ctx, url, expire_days).await?
        }
        LinkAction::List => list_links(&service, &ctx).await?,
        LinkAction::Stats { code } => show_stats(&service, &ctx, &code).await?,
        LinkAction::Delete { code, yes } => delete_link(&service, &ctx, &code, yes).await?,
    }

    Ok(())
}

async fn create_link(
    service: &ShortenerService,
    ctx: &RequestContext,
    url: String,
    expire_days: i64,
) -> Result<()> {
    let link = service
        .create_short_link(ctx, CreateLink { url, expire_days })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "Short link created".green().bold());
    println!();
    println!("  Short link: {}", link.short_code.bright_yellow().bold());
    println!("  Target:     {}", link.target_url.cyan());
    println!(
        "  Expires:    {}",
        link.expire_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Lists all links with status indicators.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Code       Target                                   Created           Hits     Status
///   ──────────────────────────────────────────────────────────────────────────────────────
///   o6nh7Zc0   https://example.com/page                 2025-01-15 10:30  12       ACTIVE
///   s_dRgL2d   https://example.org/                     2025-01-14 09:12  0        DELETED
/// ```
async fn list_links(service: &ShortenerService, ctx: &RequestContext) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .get_links(ctx)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<40} {:<17} {:<8} {:<8}",
        "Code".bright_white().bold(),
        "Target".bright_white().bold(),
        "Created".bright_white().bold(),
        "Hits".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(86).bright_black());

    for link in &links {
        println!(
            "  {:<10} {:<40} {:<17} {:<8} {}",
            bare_code(link).cyan(),
            truncate(&link.target_url, 40),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.access_count,
            status_label(link)
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_stats(service: &ShortenerService, ctx: &RequestContext, code: &str) -> Result<()> {
    let link = service
        .get_link_statistics(ctx, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get link: {}", e))?;

    println!("{}", "Link statistics".bright_blue().bold());
    println!();
    println!("  Short link:  {}", link.short_code.bright_yellow());
    println!("  Target:      {}", link.target_url.cyan());
    println!(
        "  Hits:        {}",
        link.access_count.to_string().bright_green().bold()
    );
    println!(
        "  Last access: {}",
        link.last_access
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string())
    );
    println!("  Created:     {}", link.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Expires:     {}", link.expire_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Status:      {}", status_label(&link));
    println!();

    Ok(())
}

/// Soft-deletes a link after confirmation (default: No).
async fn delete_link(
    service: &ShortenerService,
    ctx: &RequestContext,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Delete link".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link {code}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    match service.delete_link(ctx, code).await {
        Ok(()) => println!("{}", "Link deleted".green().bold()),
        Err(ShortenerError::LinkDeleted) => {
            println!("{}", "This link is already deleted".yellow())
        }
        Err(ShortenerError::NotFound) => anyhow::bail!("Link not found: {code}"),
        Err(e) => anyhow::bail!("Failed to delete link: {e}"),
    }

    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;
            let deleted: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE deleted_at IS NOT NULL")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!("  Deleted:    {}", deleted.to_string().bright_black());
            println!();
        }
    }

    Ok(())
}

fn status_label(link: &Link) -> ColoredString {
    if link.is_deleted() {
        "DELETED".red()
    } else if link.is_expired() {
        "EXPIRED".yellow()
    } else {
        "ACTIVE".green()
    }
}

/// Short code without the base URL prefix added by the service.
fn bare_code(link: &Link) -> &str {
    link.short_code
        .rsplit('/')
        .next()
        .unwrap_or(&link.short_code)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    }
}
