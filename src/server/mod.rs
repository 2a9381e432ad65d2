//! HTTP bootstrap layer
//!
//! Thin transport around the resolver set: binds a port, deserializes the
//! operation envelope, serializes the response envelope. No catalog logic
//! lives here.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::resolver::Resolvers;
use crate::storage::BookStore;

pub mod routes;

/// Server state
pub struct AppState {
    pub resolvers: Resolvers<BookStore>,
}

pub async fn start_server(port: u16, store: BookStore) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        resolvers: Resolvers::new(Arc::new(store)),
    });

    let app = Router::new()
        .route("/", post(routes::handle_operation))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
