use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use quorum_api::auth::{self, AppState, AppStateInner};
use quorum_api::health;
use quorum_api::likes;
use quorum_api::middleware::require_auth;
use quorum_db::{Database, LikeRepository, UserRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quorum=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret =
        std::env::var("QUORUM_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
    let db_path = std::env::var("QUORUM_DB_PATH").unwrap_or_else(|_| "quorum.db".into());
    let host = std::env::var("QUORUM_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("QUORUM_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init database; repositories bootstrap their tables on construction.
    let db = Arc::new(Database::open(&PathBuf::from(&db_path))?);
    let users = UserRepository::new(db.clone())?;
    let likes = LikeRepository::new(db.clone())?;

    let state: AppState = Arc::new(AppStateInner {
        db,
        users,
        likes,
        jwt_secret,
    });

    // Routes
    let public_routes = Router::new()
        .route("/health", get(health::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/users/{id}", get(auth::get_user))
        .route("/questions/{question_id}/likes", get(likes::list_likes))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/likes", post(likes::create_like))
        .route("/likes/{id}", delete(likes::delete_like))
        .layer(middleware::from_fn(require_auth))
        .with_state(state);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Quorum server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
