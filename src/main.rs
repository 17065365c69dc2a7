/// API сервер вокруг пайплайна предобработки

use axum::{
    extract::State,
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use nba2k_ml::{
    dataset::LocalFileSource,
    pipeline::{run_pipeline, PipelineReport},
    types::PipelineConfig,
};

#[derive(Clone)]
struct AppState {
    config: PipelineConfig,
}

#[derive(Debug, Deserialize)]
struct PreprocessRequest {
    data_path: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логирования
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let state = AppState {
        config: PipelineConfig::default(),
    };

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/preprocess", post(preprocess))
        .layer(cors)
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 8000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://0.0.0.0:8000");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "NBA2k ML API (Rust)",
        "version": "0.1.0"
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn preprocess(
    State(state): State<AppState>,
    Json(req): Json<PreprocessRequest>,
) -> Result<Json<PipelineReport>, String> {
    tracing::info!("Preprocess request: {}", req.data_path);

    let source = LocalFileSource::new(&req.data_path);
    match run_pipeline(&source, &state.config) {
        Ok(output) => Ok(Json(output.report())),
        Err(e) => Err(format!("Pipeline error: {}", e)),
    }
}
