//! 中间件
//!
//! - request_context：请求上下文中间件（request_id/trace_id、完成日志、响应头）

pub mod request_context;

pub use request_context::*;
