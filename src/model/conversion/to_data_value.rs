//! ToDataValue trait 定义
//!
//! 定义了将模型字段值转换回 DataValue 的统一接口

use crate::types::DataValue;

/// 支持直接转换为 DataValue 的 trait
pub trait ToDataValue {
    fn to_data_value(&self) -> DataValue;
}
