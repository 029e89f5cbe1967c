//! HTTP transport for the lookup service.

use crate::app::lookup::{parse_body, Endpoint, LookupResponse, LookupService, ResponseBody};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, Method},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use std::any::Any as PanicPayload;
use std::collections::HashMap;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

impl IntoResponse for LookupResponse {
    fn into_response(self) -> Response {
        match self.body {
            ResponseBody::Json(value) => (self.status, Json(value)).into_response(),
            body @ ResponseBody::Text(_) => {
                let content_type = body.content_type();
                (
                    self.status,
                    [(header::CONTENT_TYPE, content_type)],
                    body.into_string(),
                )
                    .into_response()
            }
        }
    }
}

pub fn create_router(service: LookupService) -> Router {
    let routes = Router::new()
        .route("/barcode", any(barcode))
        .route("/barcodemulti", any(barcode_multi))
        .route("/help", any(help))
        .with_state(service);

    with_middleware(routes)
}

/// Request tracing, open CORS (preflight included) and panic → 503 JSON.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods([
                Method::GET,
                Method::POST,
            ]))
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

async fn barcode(
    State(service): State<LookupService>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> LookupResponse {
    dispatch(&service, Endpoint::Single, &method, &query, &headers, &body)
}

async fn barcode_multi(
    State(service): State<LookupService>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> LookupResponse {
    dispatch(&service, Endpoint::Batch, &method, &query, &headers, &body)
}

async fn help(State(service): State<LookupService>) -> LookupResponse {
    service.help()
}

fn dispatch(
    service: &LookupService,
    endpoint: Endpoint,
    method: &Method,
    query: &HashMap<String, String>,
    headers: &HeaderMap,
    body: &Bytes,
) -> LookupResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let body = parse_body(content_type, body);
    service.handle(endpoint, method.as_str(), query, body.as_ref())
}

fn handle_panic(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    LookupResponse::internal_error().into_response()
}

/// Binds to the configured address and serves until Ctrl-C or SIGTERM.
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let service = LookupService::from_config(config);
    let app = create_router(service);

    let addr = format!("{}:{}", config.host(), config.port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Serving barcode lookups on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
