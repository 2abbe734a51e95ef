use std::net::SocketAddr;

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode, Uri},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{CalculateResponse, HealthResponse, OperationsResponse},
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
};
use tracing::info;

mod config;

use config::load_settings;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let app = build_router();

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "calculator API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router() -> Router {
    Router::new()
        .route("/api/calculate", post(http_calculate))
        .route("/api/health", get(http_health))
        .route("/api/operations", get(http_operations))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// The body is read raw so that malformed JSON and an empty body each get
/// the documented treatment: a 400 payload and an empty object respectively.
async fn http_calculate(
    body: Bytes,
) -> Result<Json<CalculateResponse>, (StatusCode, Json<ApiError>)> {
    let value: serde_json::Value = if body.is_empty() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(&body).map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new(
                    ErrorCode::MalformedRequestBody,
                    "JSON malformado",
                    "El cuerpo de la petición contiene un JSON inválido",
                )),
            )
        })?
    };

    let response = server_api::calculate(&value)
        .map_err(|err| (StatusCode::BAD_REQUEST, Json(err)))?;
    Ok(Json(response))
}

async fn http_health() -> Json<HealthResponse> {
    Json(server_api::health())
}

async fn http_operations() -> Json<OperationsResponse> {
    Json(server_api::operations())
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            "Endpoint no encontrado",
            format!("La ruta {} no existe", uri.path()),
        )),
    )
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response<Body> {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("panic");
    tracing::error!(detail, "handler panicked");

    let payload = ApiError::new(
        ErrorCode::Internal,
        "Error interno del servidor",
        "Ocurrió un error al procesar la operación",
    );
    let body = serde_json::to_string(&payload)
        .unwrap_or_else(|_| "{\"error\":\"Error interno del servidor\"}".to_string());

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
