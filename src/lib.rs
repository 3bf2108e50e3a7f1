//! # SnackyNerds
//!
//! Demo snack storefront: a CRUD backend for the snack catalog plus the
//! single-user session core powering the frontend — Snacky Coin wallet,
//! cart, checkout, and the daily Snack Hunt.
//!
//!
//!
//! # Architecture
//!
//! - The backend serves the snack records over a small REST surface
//!   (`/api/snacks`, `/api/health`) from an in-memory store seeded with the
//!   house catalog. No real money, no accounts.
//! - The session core ([`session::Session`]) is the frontend's state: it
//!   fetches the catalog once at boot, restores the wallet and hunt record
//!   from key-value storage, and owns every mutation on one logical thread.
//! - The Snack Hunt ([`hunt`]) derives today's hidden snack purely from the
//!   catalog order and the calendar date, so the pick needs no server
//!   round-trip. Holding the pointer on the right card for 1.5s wins the
//!   daily coin reward — once per day, enforced by the persisted record.
//!
//! The hidden-item selection stays client-side on purpose: the coins are
//! play money, so replaying the date hash buys nothing real.
//!
//!
//!
//! # Running
//!
//! ```sh
//! SNACKY_PORT=4000 cargo run
//! ```

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get, post, put},
    Router,
};

use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod dwell;
pub mod error;
pub mod hunt;
pub mod routes;
pub mod session;
pub mod snacks;
pub mod state;
pub mod storage;
pub mod wallet;

use routes::{
    create_snack_handler, delete_snack_handler, get_snack_handler, health_handler,
    list_snacks_handler, root_handler, update_snack_handler,
};
use state::State;

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/api/snacks", get(list_snacks_handler))
        .route("/api/snacks", post(create_snack_handler))
        .route("/api/snacks/{id}", get(get_snack_handler))
        .route("/api/snacks/{id}", put(update_snack_handler))
        .route("/api/snacks/{id}", delete(delete_snack_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
