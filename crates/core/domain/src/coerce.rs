//! 字段类型转换规则
//!
//! 请求体中的字段在进入存储层之前，按字段声明的类型做宽松转换：
//! - 数值：JSON number，或可解析为有限数值的字符串（空串视为 null）
//! - 布尔：JSON bool；"true"/"false"、"yes"/"no"、"1"/"0"（忽略大小写）；数值 1/0
//! - 字符串：JSON string；数值与布尔转为文本
//! - 时间：RFC 3339 字符串；毫秒时间戳（数值或数字字符串）；
//!   不带时区的 `%Y-%m-%d %H:%M:%S`、`%Y-%m-%dT%H:%M:%S%.f`、`%Y-%m-%d`（按 UTC 解释）
//!
//! 数组与对象一律拒绝。转换失败返回 `CoerceError`。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// 字段类型转换失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoerceError {
    expected: &'static str,
    found: String,
}

impl CoerceError {
    fn new(expected: &'static str, found: &Value) -> Self {
        Self {
            expected,
            found: found.to_string(),
        }
    }
}

impl std::fmt::Display for CoerceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cast to {} failed for value {}", self.expected, self.found)
    }
}

impl std::error::Error for CoerceError {}

/// 可由任意 JSON 值转换得到的字段类型。
///
/// 返回 `Ok(None)` 表示转换结果为空值（例如数值字段收到空字符串）。
pub trait Coerce: Sized {
    fn coerce(value: &Value) -> Result<Option<Self>, CoerceError>;
}

impl Coerce for f64 {
    fn coerce(value: &Value) -> Result<Option<Self>, CoerceError> {
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| CoerceError::new("Number", value)),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(Some(n)),
                    _ => Err(CoerceError::new("Number", value)),
                }
            }
            Value::Bool(b) => Ok(Some(if *b { 1.0 } else { 0.0 })),
            _ => Err(CoerceError::new("Number", value)),
        }
    }
}

impl Coerce for bool {
    fn coerce(value: &Value) -> Result<Option<Self>, CoerceError> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            Value::Number(n) => match n.as_f64() {
                Some(x) if x == 1.0 => Ok(Some(true)),
                Some(x) if x == 0.0 => Ok(Some(false)),
                _ => Err(CoerceError::new("Boolean", value)),
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Some(true)),
                "false" | "no" | "0" => Ok(Some(false)),
                _ => Err(CoerceError::new("Boolean", value)),
            },
            _ => Err(CoerceError::new("Boolean", value)),
        }
    }
}

impl Coerce for String {
    fn coerce(value: &Value) -> Result<Option<Self>, CoerceError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            _ => Err(CoerceError::new("String", value)),
        }
    }
}

impl Coerce for DateTime<Utc> {
    fn coerce(value: &Value) -> Result<Option<Self>, CoerceError> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                parse_timestamp(trimmed)
                    .map(Some)
                    .ok_or_else(|| CoerceError::new("Date", value))
            }
            Value::Number(n) => {
                let millis = n
                    .as_i64()
                    .or_else(|| n.as_f64().filter(|x| x.is_finite()).map(|x| x as i64));
                millis
                    .and_then(DateTime::<Utc>::from_timestamp_millis)
                    .map(Some)
                    .ok_or_else(|| CoerceError::new("Date", value))
            }
            _ => Err(CoerceError::new("Date", value)),
        }
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// 按顺序尝试：RFC 3339、毫秒时间戳字符串、不带时区的日期时间、纯日期。
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(millis) = text.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp_millis(millis);
    }
    if let Ok(millis) = text.parse::<f64>() {
        return millis
            .is_finite()
            .then(|| DateTime::<Utc>::from_timestamp_millis(millis as i64))
            .flatten();
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// 三态字段反序列化：缺省 → `None`，`null` → `Some(None)`，值 → `Some(Some(v))`。
///
/// 需配合 `#[serde(default)]` 使用，否则缺省字段不会落到 `None`。
pub fn field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Coerce,
{
    let raw = Value::deserialize(deserializer)?;
    T::coerce(&raw).map(Some).map_err(serde::de::Error::custom)
}

/// 整数值的数值字段按整数输出（-42.0 → -42）。
pub fn serialize_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
            serializer.serialize_i64(*n as i64)
        }
        Some(n) => serializer.serialize_f64(*n),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_accepts_numeric_strings() {
        assert_eq!(f64::coerce(&json!("-42")).unwrap(), Some(-42.0));
        assert_eq!(f64::coerce(&json!(" 7.5 ")).unwrap(), Some(7.5));
        assert_eq!(f64::coerce(&json!("")).unwrap(), None);
        assert!(f64::coerce(&json!("abc")).is_err());
        assert!(f64::coerce(&json!("NaN")).is_err());
        assert!(f64::coerce(&json!([1])).is_err());
    }

    #[test]
    fn bool_accepts_common_spellings() {
        assert_eq!(bool::coerce(&json!("TRUE")).unwrap(), Some(true));
        assert_eq!(bool::coerce(&json!("no")).unwrap(), Some(false));
        assert_eq!(bool::coerce(&json!(1)).unwrap(), Some(true));
        assert!(bool::coerce(&json!(2)).is_err());
        assert!(bool::coerce(&json!("maybe")).is_err());
    }

    #[test]
    fn string_stringifies_scalars() {
        assert_eq!(String::coerce(&json!(42)).unwrap().as_deref(), Some("42"));
        assert_eq!(String::coerce(&json!(false)).unwrap().as_deref(), Some("false"));
        assert!(String::coerce(&json!({"a": 1})).is_err());
    }

    #[test]
    fn timestamp_accepts_rfc3339_and_millis() {
        let from_text = DateTime::<Utc>::coerce(&json!("2024-05-01T12:00:00Z"))
            .unwrap()
            .unwrap();
        let from_millis = DateTime::<Utc>::coerce(&json!(1_714_564_800_000_i64))
            .unwrap()
            .unwrap();
        assert_eq!(from_text, from_millis);

        for input in [
            "1714564800000",
            "2024-05-01 12:00:00",
            "2024-05-01T12:00:00",
            "2024-05-01T12:00:00.000",
            "2024-05-01T14:00:00+02:00",
        ] {
            let parsed = DateTime::<Utc>::coerce(&json!(input)).unwrap();
            assert_eq!(parsed, Some(from_text), "input {input}");
        }

        let date_only = DateTime::<Utc>::coerce(&json!("2024-05-01")).unwrap().unwrap();
        assert_eq!(date_only.to_rfc3339(), "2024-05-01T00:00:00+00:00");

        assert_eq!(DateTime::<Utc>::coerce(&json!("  ")).unwrap(), None);
        assert!(DateTime::<Utc>::coerce(&json!("yesterday")).is_err());
        assert!(DateTime::<Utc>::coerce(&json!("2024-13-01")).is_err());
        assert!(DateTime::<Utc>::coerce(&json!("NaN")).is_err());
    }

    #[test]
    fn error_message_names_target_type() {
        let err = f64::coerce(&json!("abc")).unwrap_err();
        assert_eq!(err.to_string(), "cast to Number failed for value \"abc\"");
    }
}
