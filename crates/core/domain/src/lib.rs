//! SenRa 消息领域模型与字段类型转换。

pub mod coerce;
pub mod message;

pub use coerce::{Coerce, CoerceError};
pub use message::{Message, MessageFields, MessageId};
