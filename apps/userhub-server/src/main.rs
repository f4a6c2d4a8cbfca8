use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use runtime::config::CliArgs;
use runtime::AppConfig;
use sea_orm_migration::MigratorTrait;
use users_api::infra::storage::migrations::Migrator;
use users_api::Service;

/// Userhub Server - users CRUD service over a relational store
#[derive(Parser)]
#[command(name = "userhub-server")]
#[command(about = "Userhub Server - users CRUD service over a relational store")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration profile (development, testing, production); overrides APP_ENV
    #[arg(short, long)]
    env: Option<String>,

    /// Port for HTTP server (overrides BIND_ADDR)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        env: cli.env.clone(),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Resolve configuration; --env takes precedence over APP_ENV.
    let mut config = match args.env.clone() {
        Some(name) => AppConfig::resolve(|key| {
            if key == "APP_ENV" {
                Some(name.clone())
            } else {
                std::env::var(key).ok()
            }
        }),
        None => AppConfig::from_env(),
    };
    config.apply_cli_overrides(&args);

    // Initialize logging
    runtime::logging::init_logging(args.verbose, config.debug);
    tracing::info!(
        profile = config.profile.as_str(),
        database_host = %config.database.host,
        bind_addr = %config.server.bind_addr,
        "Userhub Server starting"
    );

    // Print config and exit if requested
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // Execute command
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Connecting to database");
    let db = sea_orm::Database::connect(config.database_url.as_str())
        .await
        .context("connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("prepare users table")?;

    let service = Arc::new(Service::new(db));
    let app = axum::Router::new()
        .nest("/api", users_api::api::rest::routes::router(service))
        .fallback(users_api::api::rest::handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .context("parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind tcp listener")?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server shutdown")?;

    Ok(())
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    config
        .server
        .bind_addr
        .parse::<SocketAddr>()
        .context("invalid bind address")?;

    println!("Configuration check passed");
    println!("Profile: {}", config.profile.as_str());
    println!(
        "Database: {}@{}:{}/{}",
        config.database.user, config.database.host, config.database.port, config.database.name
    );
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
