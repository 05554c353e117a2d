//! FromFieldValue trait 及其实现
//!
//! 把已按声明类型转换好的 `FieldValue` 取出为结构体成员的具体类型。
//! 取不出时返回 `None`，字段保持原值

use crate::model::field_types::FieldValue;
use crate::types::{DataValue, DateValue};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// 从字段值提取具体类型
pub trait FromFieldValue: Sized {
    fn from_field_value(value: FieldValue) -> Option<Self>;
}

impl FromFieldValue for String {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(s) => Some(s),
            FieldValue::Date(DateValue::Text(s)) => Some(s),
            FieldValue::Date(DateValue::DateTime(dt)) => Some(dt.to_rfc3339()),
            FieldValue::Raw(DataValue::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl FromFieldValue for i64 {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(i) => Some(i),
            FieldValue::Date(DateValue::Timestamp(ts)) => Some(ts.trunc() as i64),
            FieldValue::Raw(DataValue::Int(i)) => Some(i),
            _ => None,
        }
    }
}

impl FromFieldValue for i32 {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        i64::from_field_value(value).and_then(|i| i32::try_from(i).ok())
    }
}

impl FromFieldValue for f64 {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(f) => Some(f),
            FieldValue::Integer(i) => Some(i as f64),
            FieldValue::Date(DateValue::Timestamp(ts)) => Some(ts),
            FieldValue::Date(DateValue::Text(s)) => s.trim().parse().ok(),
            FieldValue::Raw(DataValue::Float(f)) => Some(f),
            FieldValue::Raw(DataValue::Int(i)) => Some(i as f64),
            _ => None,
        }
    }
}

impl FromFieldValue for f32 {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        f64::from_field_value(value).map(|f| f as f32)
    }
}

impl FromFieldValue for bool {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Boolean(b) => Some(b),
            FieldValue::Raw(DataValue::Bool(b)) => Some(b),
            _ => None,
        }
    }
}

impl FromFieldValue for DateValue {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Date(d) => Some(d),
            _ => None,
        }
    }
}

impl FromFieldValue for DateTime<Utc> {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Date(d) => d.to_datetime(),
            _ => None,
        }
    }
}

impl FromFieldValue for DataValue {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(s) => Some(DataValue::String(s)),
            FieldValue::Integer(i) => Some(DataValue::Int(i)),
            FieldValue::Float(f) => Some(DataValue::Float(f)),
            FieldValue::Boolean(b) => Some(DataValue::Bool(b)),
            FieldValue::Date(d) => Some(crate::model::conversion::ToDataValue::to_data_value(&d)),
            FieldValue::Raw(v) => Some(v),
            FieldValue::Array(items) => Some(DataValue::Array(
                items.into_iter().filter_map(DataValue::from_field_value).collect(),
            )),
            FieldValue::Object(_) => None,
        }
    }
}

impl FromFieldValue for serde_json::Value {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        DataValue::from_field_value(value).map(|v| v.to_json_value())
    }
}

impl FromFieldValue for HashMap<String, DataValue> {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Raw(DataValue::Object(map)) => Some(map),
            _ => None,
        }
    }
}

impl<T: FromFieldValue> FromFieldValue for Option<T> {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        T::from_field_value(value).map(Some)
    }
}

// 自引用模型需要 Box 包装
impl<T: FromFieldValue> FromFieldValue for Box<T> {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        T::from_field_value(value).map(Box::new)
    }
}

// 无法取出的元素直接丢弃；非空数组一个都取不出时视为类型不匹配
impl<T: FromFieldValue> FromFieldValue for Vec<T> {
    fn from_field_value(value: FieldValue) -> Option<Self> {
        let (total, values): (usize, Vec<T>) = match value {
            FieldValue::Array(items) => (
                items.len(),
                items.into_iter().filter_map(T::from_field_value).collect(),
            ),
            FieldValue::Raw(DataValue::Array(items)) => (
                items.len(),
                items
                    .into_iter()
                    .filter_map(|item| T::from_field_value(FieldValue::Raw(item)))
                    .collect(),
            ),
            _ => return None,
        };

        if total > 0 && values.is_empty() {
            return None;
        }
        Some(values)
    }
}
