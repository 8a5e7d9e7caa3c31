use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod board;
mod cli;
mod config;
mod db;
mod shutdown;

use crate::api::applications::{ApplicationService, handlers::applications_config};
use crate::api::error::json_config;
use crate::api::health::health_config;
use crate::api::jobs::{JobService, handlers::jobs_config};
use crate::api::root::root_config;
use crate::db::storage::{PgStorage, Storage};
use crate::shutdown::ShutdownCoordinator;

fn main() {
    let cli = cli::Cli::parse();

    match cli.command {
        Some(cli::Commands::Board(args)) => {
            if let Err(err) = board::tui::run(&args.api_url) {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
        Some(cli::Commands::Serve) | None => {
            if let Err(err) = serve() {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}

#[actix_web::main]
async fn serve() -> std::io::Result<()> {
    // Load configuration from environment
    let config::Config {
        database_url,
        port,
        max_db_connections,
        log_dir,
    } = config::Config::from_env().expect("Failed to load configuration");

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&log_dir).expect("Failed to create logs directory");

    // Initialize file-based logging with daily rotation and level separation
    // Log files will be created as: logs/info.2024-12-22.log, logs/error.2024-12-22.log, etc.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(&log_dir, "info.log");
    let warn_file = tracing_appender::rolling::daily(&log_dir, "warn.log");
    let error_file = tracing_appender::rolling::daily(&log_dir, "error.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let warn_layer = tracing_subscriber::fmt::layer()
        .with_writer(warn_file)
        .with_ansi(false)
        .with_filter(LevelFilter::WARN);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(warn_layer)
        .with(error_layer)
        .init();

    info!("Starting job-board application");
    info!("Configuration loaded successfully:");
    info!("  - Port: {}", port);
    info!("  - Max database connections: {}", max_db_connections);

    // Get database connection pool
    let pool = db::connection::get_connection(&database_url, max_db_connections)
        .await
        .expect("Failed to connect to database");

    // Run migrations on startup (auto-migrate when starting server)
    db::migrations::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // One storage instance shared by every handler; tests swap in a fake
    let storage: Arc<dyn Storage> = Arc::new(PgStorage::new(pool.clone()));

    let server = HttpServer::new(move || {
        let job_service = web::Data::new(JobService::new(storage.clone()));
        let application_service = web::Data::new(ApplicationService::new(storage.clone()));

        App::new()
            .app_data(web::Data::from(storage.clone()))
            .app_data(job_service)
            .app_data(application_service)
            .app_data(json_config())
            .configure(root_config)
            .configure(health_config)
            .configure(jobs_config)
            .configure(applications_config)
    });

    // Bind and start the server
    let server = server.bind(("0.0.0.0", port))?.run();
    info!("Server is running on port {}", port);

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn server in background
    let server_task = tokio::spawn(server);

    // Create shutdown coordinator and wait for shutdown signal
    let coordinator = ShutdownCoordinator::new(server_handle, server_task, pool);

    coordinator.wait_for_shutdown().await
}
