//! 工具模块
//!
//! - response：统一错误响应
//! - validation：请求体解析

pub mod response;
pub mod validation;

pub use response::*;
pub use validation::*;
