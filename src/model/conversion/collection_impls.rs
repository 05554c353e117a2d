//! 集合类型的 ToDataValue 实现
//!
//! 为 Vec、Option、HashMap 等容器类型实现 ToDataValue

use crate::model::conversion::ToDataValue;
use crate::types::DataValue;
use std::collections::HashMap;

// Vec<T> 实现：逐个元素转换
impl<T: ToDataValue> ToDataValue for Vec<T> {
    fn to_data_value(&self) -> DataValue {
        DataValue::Array(self.iter().map(|item| item.to_data_value()).collect())
    }
}

// HashMap<String, DataValue> 实现
impl ToDataValue for HashMap<String, DataValue> {
    fn to_data_value(&self) -> DataValue {
        DataValue::Object(self.clone())
    }
}

// Option<T> 实现：None 编码为 Null
impl<T: ToDataValue> ToDataValue for Option<T> {
    fn to_data_value(&self) -> DataValue {
        match self {
            Some(value) => value.to_data_value(),
            None => DataValue::Null,
        }
    }
}

impl<T: ToDataValue> ToDataValue for Box<T> {
    fn to_data_value(&self) -> DataValue {
        self.as_ref().to_data_value()
    }
}
