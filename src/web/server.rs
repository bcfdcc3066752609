//! HTTP surface for the gateway
//!
//! Two POST endpoints: `/query` takes a raw text body and always uses the
//! full ontology description; `/query2` takes a JSON body and lets the
//! caller choose the schema mode per request.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::error::GatewayError;
use crate::pipeline::QueryPipeline;

/// Shared application state
pub type AppState = Arc<QueryPipeline>;

/// Start the web server
pub async fn start_server(
    pipeline: QueryPipeline,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let state: AppState = Arc::new(pipeline);

    let app = Router::new()
        .route("/query", post(handle_query))
        .route("/query2", post(handle_structured_query))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("ontology SQL gateway listening on http://localhost:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Raw text body, always with the full ontology description
async fn handle_query(
    State(pipeline): State<AppState>,
    body: String,
) -> Result<String, StatusCode> {
    pipeline.process(&body, true).await.map_err(internal_error)
}

#[derive(Deserialize)]
struct StructuredQueryRequest {
    query: String,
    #[serde(rename = "includeOntology")]
    include_ontology: bool,
}

/// Structured body, schema mode chosen by the caller
async fn handle_structured_query(
    State(pipeline): State<AppState>,
    Json(request): Json<StructuredQueryRequest>,
) -> Result<String, StatusCode> {
    pipeline
        .process(&request.query, request.include_ontology)
        .await
        .map_err(internal_error)
}

async fn health_check() -> &'static str {
    "OK"
}

fn internal_error(err: GatewayError) -> StatusCode {
    error!("request failed: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}
