use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use pharmaguard_core::models::explanation::ExplanationProvider;

/// Response header carrying the per-request audit id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Audit logging middleware.
///
/// Tags every request with a fresh id, echoed in [`REQUEST_ID_HEADER`], and
/// logs one `api_request` event. Handlers that produce an explanation put its
/// [`ExplanationProvider`] in the response extensions so the event records
/// whether the reply came from the model or a template. Request bodies carry
/// patient genotype data and are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = next.run(req).await;

    let provider = response
        .extensions()
        .get::<ExplanationProvider>()
        .map(|p| p.as_str())
        .unwrap_or("none");

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        provider,
        "api_request"
    );

    response
}
