use std::net::SocketAddr;
use std::sync::Arc;

use auth::PasswordHasher;
use sqlx::postgres::PgPoolOptions;
use sso_service::auth::service::AuthService;
use sso_service::config::Config;
use sso_service::config::Env;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::PostgresStorage;
use sso_service::proto::auth_server::AuthServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    init_tracing(config.env);

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        env = ?config.env,
        "Service starting"
    );

    tracing::info!(
        grpc_port = config.grpc.port,
        grpc_timeout_ms = config.grpc.timeout_ms,
        token_ttl_seconds = config.token.ttl_seconds,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let storage = Arc::new(PostgresStorage::new(pg_pool.clone()));
    let password_hasher = PasswordHasher::new(config.password)?;

    let auth_service = Arc::new(AuthService::new(
        tracing::info_span!("auth_service"),
        Arc::clone(&storage),
        Arc::clone(&storage),
        Arc::clone(&storage),
        password_hasher,
        config.token.ttl(),
    ));

    let grpc_address: SocketAddr = format!("0.0.0.0:{}", config.grpc.port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service, config.grpc.timeout());
    tracing::info!(
        address = %grpc_address,
        port = config.grpc.port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(AuthServer::new(grpc_service))
        .serve_with_shutdown(grpc_address, shutdown_signal())
        .await?;

    pg_pool.close().await;
    tracing::info!("application stopped");

    Ok(())
}

fn default_filter(env: Env) -> &'static str {
    match env {
        Env::Local | Env::Dev => "sso_service=debug,auth=debug",
        Env::Prod => "sso_service=info,auth=info",
    }
}

fn init_tracing(env: Env) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(env).into());

    match env {
        Env::Local => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init(),
        Env::Dev | Env::Prod => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for SIGINT");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping gRpc server");
}
