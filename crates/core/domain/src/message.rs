//! SenRa 网关上报消息模型
//!
//! - `MessageId`：存储层生成的唯一标识（UUID v4），创建后不可变
//! - `Message`：已持久化的消息记录，所有业务字段均可为空
//! - `MessageFields`：创建/更新时的部分字段输入（三态：未提供 / null / 值）

use crate::coerce;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 消息标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// 生成新的随机标识。
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MessageId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for MessageId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// 消息记录。
///
/// 未设置的字段在 JSON 输出中省略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: MessageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_eui: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub channel: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub datarate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_eui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dup: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub est_lat: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub est_lng: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub freq: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw_eui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw_rx_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ism_band: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub join_id: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub max_payload: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdu: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub port: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub rssi: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub seqno: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "coerce::serialize_number"
    )]
    pub snr: Option<f64>,
    // 字段名沿用网关上报格式（全小写）
    #[serde(default, rename = "txtime", skip_serializing_if = "Option::is_none")]
    pub txtime: Option<DateTime<Utc>>,
}

/// 创建/更新输入。
///
/// 每个字段为三态：
/// - `None`：未提供，更新时保持原值
/// - `Some(None)`：显式 `null`，更新时清空
/// - `Some(Some(v))`：设置为 `v`
///
/// 反序列化时按字段类型做宽松转换（见 [`crate::coerce`]），未知字段忽略。
/// 序列化结果只包含已提供的字段，可直接作为文档合并补丁使用。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFields {
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub ack: Option<Option<bool>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub app_eui: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub channel: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub datarate: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub dev_class: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub dev_eui: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub dev_profile: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub dev_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub dup: Option<Option<bool>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub est_lat: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub est_lng: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub freq: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub gw_eui: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub gw_rx_time: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub ism_band: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub join_id: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub max_payload: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub pdu: Option<Option<String>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub port: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub rssi: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub seqno: Option<Option<f64>>,
    #[serde(default, deserialize_with = "coerce::field", skip_serializing_if = "Option::is_none")]
    pub snr: Option<Option<f64>>,
    #[serde(
        default,
        rename = "txtime",
        deserialize_with = "coerce::field",
        skip_serializing_if = "Option::is_none"
    )]
    pub txtime: Option<Option<DateTime<Utc>>>,
}

impl MessageFields {
    /// 是否未提供任何字段。
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Message {
    /// 以给定标识和输入字段构造新记录（显式 null 视同未提供）。
    pub fn create(id: MessageId, fields: MessageFields) -> Self {
        let mut message = Self::empty(id);
        message.apply(fields);
        message
    }

    /// 仅含标识的空记录。
    pub fn empty(id: MessageId) -> Self {
        Self {
            id,
            ack: None,
            app_eui: None,
            channel: None,
            datarate: None,
            dev_class: None,
            dev_eui: None,
            dev_profile: None,
            dev_type: None,
            dup: None,
            est_lat: None,
            est_lng: None,
            freq: None,
            gw_eui: None,
            gw_rx_time: None,
            ism_band: None,
            join_id: None,
            max_payload: None,
            pdu: None,
            port: None,
            rssi: None,
            seqno: None,
            snr: None,
            txtime: None,
        }
    }

    /// 按输入替换已提供的字段，未提供的字段保持不变；标识不受影响。
    pub fn apply(&mut self, fields: MessageFields) {
        macro_rules! assign {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = fields.$field {
                        self.$field = value;
                    }
                )*
            };
        }
        assign!(
            ack,
            app_eui,
            channel,
            datarate,
            dev_class,
            dev_eui,
            dev_profile,
            dev_type,
            dup,
            est_lat,
            est_lng,
            freq,
            gw_eui,
            gw_rx_time,
            ism_band,
            join_id,
            max_payload,
            pdu,
            port,
            rssi,
            seqno,
            snr,
            txtime,
        );
    }
}
