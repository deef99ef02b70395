use anyhow::{Context, Result};
use showroom_cms::application::{
    ports::{
        html::HtmlSanitizer, security::AdminAuthenticator, storage::ObjectStorage, time::Clock,
        util::SlugGenerator,
    },
    services::{Adapters, ApplicationServices, Repositories},
};
use showroom_cms::config::AppConfig;
use showroom_cms::infrastructure::{
    database,
    html::AmmoniaSanitizer,
    repositories::{
        PostgresAboutPageRepository, PostgresArticleReadRepository,
        PostgresArticleWriteRepository, PostgresCarModelReadRepository,
        PostgresCarModelWriteRepository, PostgresContactRepository, PostgresHomepageRepository,
    },
    security::StaticTokenAuthenticator,
    storage::S3ObjectStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use showroom_cms::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        car_model_write: Arc::new(PostgresCarModelWriteRepository::new(pool.clone())),
        car_model_read: Arc::new(PostgresCarModelReadRepository::new(pool.clone())),
        homepage: Arc::new(PostgresHomepageRepository::new(pool.clone())),
        about: Arc::new(PostgresAboutPageRepository::new(pool.clone())),
        contact: Arc::new(PostgresContactRepository::new(pool)),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let html_sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaSanitizer::default());
    let storage: Arc<dyn ObjectStorage> = Arc::new(
        S3ObjectStorage::new(config.storage().clone(), Arc::clone(&clock))
            .context("object storage setup")?,
    );
    let tokens = StaticTokenAuthenticator::parse(config.admin_api_tokens())
        .map_err(anyhow::Error::msg)
        .context("ADMIN_API_TOKENS")?;
    tracing::info!(admins = tokens.len(), "admin tokens loaded");
    let authenticator: Arc<dyn AdminAuthenticator> = Arc::new(tokens);

    let adapters = Adapters {
        clock,
        slugger,
        html_sanitizer,
        storage,
        authenticator,
    };
    let services = Arc::new(ApplicationServices::new(
        repos,
        adapters,
        config.sanitize_failure_policy(),
    ));
    tracing::info!(
        sanitize_failure_policy = %config.sanitize_failure_policy(),
        "application services ready"
    );

    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        contact_rate_limit: config.contact_rate_limit(),
    };
    let app = build_router(HttpState::new(services), options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
