//! 基础类型的 ToDataValue 实现
//!
//! 为 String、数值类型、布尔类型、日期类型等基础类型实现 ToDataValue

use crate::model::conversion::ToDataValue;
use crate::types::{DataValue, DateValue};
use chrono::{DateTime, SecondsFormat, Utc};

// 字符串类型实现
impl ToDataValue for String {
    fn to_data_value(&self) -> DataValue {
        DataValue::String(self.clone())
    }
}

impl ToDataValue for &str {
    fn to_data_value(&self) -> DataValue {
        DataValue::String(self.to_string())
    }
}

// 整数类型实现
impl ToDataValue for i32 {
    fn to_data_value(&self) -> DataValue {
        DataValue::Int(*self as i64)
    }
}

impl ToDataValue for i64 {
    fn to_data_value(&self) -> DataValue {
        DataValue::Int(*self)
    }
}

// 浮点类型实现
impl ToDataValue for f32 {
    fn to_data_value(&self) -> DataValue {
        DataValue::Float(*self as f64)
    }
}

impl ToDataValue for f64 {
    fn to_data_value(&self) -> DataValue {
        DataValue::Float(*self)
    }
}

// 布尔类型实现
impl ToDataValue for bool {
    fn to_data_value(&self) -> DataValue {
        DataValue::Bool(*self)
    }
}

// DateTime 编码为 RFC3339 文本，毫秒精度
impl ToDataValue for DateTime<Utc> {
    fn to_data_value(&self) -> DataValue {
        DataValue::String(self.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl ToDataValue for DateValue {
    fn to_data_value(&self) -> DataValue {
        match self {
            DateValue::Text(text) => DataValue::String(text.clone()),
            DateValue::DateTime(dt) => dt.to_data_value(),
            DateValue::Timestamp(ts) => DataValue::Float(*ts),
        }
    }
}

// JsonValue类型实现
impl ToDataValue for serde_json::Value {
    fn to_data_value(&self) -> DataValue {
        crate::types::json_value_to_data_value(self.clone())
    }
}

impl ToDataValue for DataValue {
    fn to_data_value(&self) -> DataValue {
        self.clone()
    }
}
