//! 追踪与请求 ID 生成。

use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 初始化 tracing（默认 info，可由 RUST_LOG 覆盖）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 上游传入的 request_id 最大长度。
pub const MAX_INBOUND_REQUEST_ID_LEN: usize = 128;

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 沿用上游传入的 request_id（网关/代理透传），trace_id 总是新生成。
///
/// 空值、超长或含不可见字符的 request_id 被丢弃并重新生成。
pub fn request_ids_from(inbound: Option<&str>) -> RequestIds {
    let mut ids = new_request_ids();
    if let Some(request_id) = inbound.map(str::trim).filter(|value| is_usable_request_id(value)) {
        ids.request_id = request_id.to_string();
    }
    ids
}

fn is_usable_request_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_INBOUND_REQUEST_ID_LEN
        && value.bytes().all(|b| b.is_ascii_graphic())
}
