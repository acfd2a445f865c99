//! CLI administration tool for usuarios-api.
//!
//! Provides commands for inspecting and removing usuarios, printing the
//! OpenAPI document, and checking the database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all usuarios
//! cargo run --bin admin -- usuario list
//!
//! # Delete a usuario (asks for confirmation)
//! cargo run --bin admin -- usuario delete 6723eae9bbe2865d327b979d
//!
//! # Print the OpenAPI document
//! cargo run --bin admin -- openapi --server-url https://api.example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required except for `openapi`): PostgreSQL connection string

use usuarios_api::api::openapi;
use usuarios_api::application::services::UsuarioService;
use usuarios_api::infrastructure::persistence::PgUsuarioRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing usuarios-api.
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
    /// Manage usuarios
    Usuario {
        #[command(subcommand)]
        action: UsuarioAction,
    },

    /// Print the OpenAPI document as JSON
    Openapi {
        /// Server URL advertised in the document
        #[arg(long, default_value = "http://localhost:3000")]
        server_url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Usuario subcommands.
#[derive(Subcommand)]
enum UsuarioAction {
    /// List all usuarios
    List,

    /// Delete a usuario by id
    Delete {
        /// Usuario id
        id: String,

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

    match cli.command {
        Commands::Openapi { server_url } => print_openapi(&server_url)?,
        Commands::Usuario { action } => {
            let pool = connect().await?;
            handle_usuario_action(action, &pool).await?;
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn print_openapi(server_url: &str) -> Result<()> {
    let document = openapi::generate(&openapi::Info::for_server(server_url));
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Dispatches usuario commands.
async fn handle_usuario_action(action: UsuarioAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUsuarioRepository::new(Arc::new(pool.clone())));
    let service = UsuarioService::new(repo);

    match action {
        UsuarioAction::List => list_usuarios(&service).await?,
        UsuarioAction::Delete { id, yes } => delete_usuario(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all usuarios.
///
/// # Output Format
///
/// ```text
/// Usuarios
///
///   ID                         Nombre               Apellido             Registrado
///   ────────────────────────────────────────────────────────────────────────────────
///   6723eae9bbe2865d327b979d   David                Clavijo              2024-10-31 20:39
/// ```
async fn list_usuarios(service: &UsuarioService) -> Result<()> {
    println!("{}", "Usuarios".bright_blue().bold());
    println!();

    let usuarios = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list usuarios: {}", e))?;

    if usuarios.is_empty() {
        println!("{}", "  No usuarios found".yellow());
        return Ok(());
    }

    println!(
        "  {:<26} {:<20} {:<20} {:<16}",
        "ID".bright_white().bold(),
        "Nombre".bright_white().bold(),
        "Apellido".bright_white().bold(),
        "Registrado".bright_white().bold()
    );
    println!("  {}", "─".repeat(84).bright_black());

    for usuario in &usuarios {
        println!(
            "  {:<26} {:<20} {:<20} {}",
            usuario.id.bright_black(),
            usuario.nombre.cyan(),
            usuario.apellido.cyan(),
            usuario
                .fecha_registro
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        usuarios.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a usuario after confirmation (default: No).
async fn delete_usuario(service: &UsuarioService, id: String, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete usuario {id}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let deleted = service
        .delete(Some(id))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete usuario: {}", e))?;

    println!(
        "{} {} {} ({})",
        "Deleted".green().bold(),
        deleted.nombre.cyan(),
        deleted.apellido.cyan(),
        deleted.id.bright_black()
    );

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

            let usuarios_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Usuarios:   {}",
                usuarios_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}
