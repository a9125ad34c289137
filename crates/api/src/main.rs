use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use gatherly_api::config::ServerConfig;
use gatherly_api::router::build_app_router;
use gatherly_api::state::AppState;
use gatherly_db::PgStore;
use gatherly_mail::{build_mailer, MailConfig, Mailer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    init_tracing();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid server configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool =
        match gatherly_db::create_pool(&config.database_url, config.database_max_connections).await
        {
            Ok(pool) => pool,
            Err(e) => {
                tracing::error!(error = %e, "Failed to connect to database");
                return ExitCode::FAILURE;
            }
        };
    tracing::info!("Database connection pool created");

    if let Err(e) = gatherly_db::health_check(&pool).await {
        tracing::error!(error = %e, "Database health check failed");
        return ExitCode::FAILURE;
    }
    tracing::info!("Database health check passed");

    if let Err(e) = gatherly_db::run_migrations(&pool).await {
        tracing::error!(error = %e, "Failed to run database migrations");
        return ExitCode::FAILURE;
    }
    tracing::info!("Database migrations applied");

    // --- Mail ---
    let mailer = init_mailer();

    // --- App state ---
    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        mailer,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = match config.host.parse() {
        Ok(ip) => SocketAddr::new(ip, config.port),
        Err(e) => {
            tracing::error!(host = %config.host, error = %e, "Invalid HOST address");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(%addr, "Starting server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Graceful shutdown complete");
    ExitCode::SUCCESS
}

/// Install the global subscriber. `LOG_FORMAT=json` selects JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gatherly_api=debug,tower_http=debug".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Build the invite transport, or leave it unset so `/send-invite` answers
/// "Email service not configured".
fn init_mailer() -> Option<Arc<dyn Mailer>> {
    let Some(mail_config) = MailConfig::from_env() else {
        tracing::warn!("Mail credentials not configured; invitations disabled");
        return None;
    };

    let transport = mail_config.transport_name();
    match build_mailer(mail_config) {
        Ok(mailer) => {
            tracing::info!(transport, "Mail transport configured");
            Some(mailer)
        }
        Err(e) => {
            tracing::error!(transport, error = %e, "Failed to build mail transport");
            None
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
