use axum::{
    extract::{Path, RawQuery},
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tracing::debug;

/// Body served by `GET /lines`.
pub const MULTI_LINE_BODY: &str = "line1\nline2\r\nline3\n";

/// Placeholder used by `/headers` for a header that was not sent.
pub const ABSENT: &str = "-";

pub fn app() -> Router {
    Router::new()
        .route("/echo", get(echo_query).post(echo_body))
        .route("/headers", any(echo_headers))
        .route("/method", any(echo_method))
        .route("/lines", get(lines))
        .route("/status/{code}", any(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo_query(RawQuery(query): RawQuery) -> String {
    debug!(?query, "echo query");
    query.unwrap_or_default()
}

async fn echo_body(body: String) -> String {
    debug!(len = body.len(), "echo body");
    body
}

/// Reports the `Charset` and `Content-Type` request headers as
/// `charset=<value>;content-type=<value>`.
async fn echo_headers(headers: HeaderMap) -> String {
    let value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(ABSENT)
            .to_string()
    };
    format!(
        "charset={};content-type={}",
        value("charset"),
        value(header::CONTENT_TYPE.as_str())
    )
}

async fn echo_method(method: Method) -> String {
    method.to_string()
}

async fn lines() -> &'static str {
    MULTI_LINE_BODY
}

async fn status(Path(code): Path<u16>) -> (StatusCode, String) {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, format!("status {code}")),
        Err(_) => (StatusCode::BAD_REQUEST, format!("invalid status {code}")),
    }
}
