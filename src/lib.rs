pub mod config;
pub mod db;
pub mod greeting;
pub mod middleware;
pub mod movies;
pub mod server;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use config::{Config, MovieSourceKind};
use movies::{MovieService, MovieSource, PersistedMovies, StaticMovies};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),
    #[error("Server error: {0}")]
    Server(String),
}

/// Builds the movie source selected in the config. For sqlite this opens
/// the database and seeds it when empty.
pub async fn build_movie_source(config: &Config) -> Result<Arc<dyn MovieSource>, ServerError> {
    match config.movies.source {
        MovieSourceKind::Static => {
            info!("Serving popular movies from the static list");
            Ok(Arc::new(StaticMovies))
        }
        MovieSourceKind::Sqlite => {
            let db_path = config
                .get_database_path()
                .ok_or(config::ConfigError::MissingDatabase)?;

            info!("Opening database at {}", db_path);
            let db = Arc::new(db::SqliteRepository::new(&db_path).await?);
            db.seed_if_empty(&config.movies.seed).await?;

            Ok(Arc::new(PersistedMovies::new(db)))
        }
    }
}

pub async fn run(config_path: &str, debug_logs: bool) -> Result<(), ServerError> {
    let config = Config::from_file(config_path)?;

    info!("Using config file: {}", config_path);
    if debug_logs {
        info!("Debug logging enabled");
    }

    let source = build_movie_source(&config).await?;
    let movies = Arc::new(MovieService::new(source));

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let tls_paths = match (&config.listen.tlscert, &config.listen.tlskey) {
        (Some(cert), Some(key)) => Some((cert.clone(), key.clone())),
        _ => None,
    };

    let state = server::AppState::new(movies);
    let app = server::build_router(state);

    if let Some((cert_path, key_path)) = tls_paths {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}
