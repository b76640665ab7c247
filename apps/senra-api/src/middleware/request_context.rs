use axum::{
    body::Body,
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use senra_telemetry::request_ids_from;
use std::time::Instant;
use tracing::{Instrument, info_span};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// 请求上下文中间件
///
/// - 沿用上游 `x-request-id`（无效时重新生成），trace_id 每次新生成
/// - handler 在 `request` span 内执行，存储错误日志因此带上 request_id
/// - 请求结束时按状态码记录一条完成日志（5xx 为 error，4xx 为 warn）
/// - 两个标识写回响应头
pub async fn request_context(req: Request<Body>, next: Next) -> Response {
    let inbound = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok());
    let ids = request_ids_from(inbound);

    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %req.method(),
        path = %req.uri().path()
    );

    let started = Instant::now();
    let mut response = async move {
        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = started.elapsed().as_millis() as u64;
        if response.status().is_server_error() {
            tracing::error!(status, latency_ms, "request failed");
        } else if response.status().is_client_error() {
            tracing::warn!(status, latency_ms, "request rejected");
        } else {
            tracing::info!(status, latency_ms, "request completed");
        }
        response
    }
    .instrument(span)
    .await;

    set_header(response.headers_mut(), REQUEST_ID_HEADER, &ids.request_id);
    set_header(response.headers_mut(), TRACE_ID_HEADER, &ids.trace_id);
    response
}

fn set_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}
