//! HTTP binding for the validation function.

use crate::app::handler::{self, FunctionResponse, ResponseBody};
use crate::core::checker::CpfChecker;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const FUNCTION_ROUTE: &str = "/api/fnvalidacpf";

pub fn create_router(checker: Arc<CpfChecker>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(FUNCTION_ROUTE, post(validate_cpf))
        .layer(TraceLayer::new_for_http())
        .with_state(checker)
}

pub async fn serve(checker: Arc<CpfChecker>, addr: SocketAddr) -> std::io::Result<()> {
    let app = create_router(checker);

    tracing::info!("🚀 Listening on http://{}{}", addr, FUNCTION_ROUTE);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn validate_cpf(State(checker): State<Arc<CpfChecker>>, body: Bytes) -> Response {
    handler::handle(&checker, &body).await.into_response()
}

impl IntoResponse for FunctionResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body {
            ResponseBody::Json(result) => (status, Json(result)).into_response(),
            ResponseBody::Text(message) => (status, message).into_response(),
        }
    }
}
