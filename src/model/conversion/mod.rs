//! 数据转换模块
//!
//! - `ToDataValue`：模型字段值 -> DataValue（归档编码用）
//! - `FromFieldValue`：转换后的字段值 -> 具体Rust类型（字段赋值用）
//! - `coercion`：按字段声明类型把原始值转换为字段值
//! - `datetime_conversion`：多种输入格式的日期解析与输出形式渲染

pub mod coercion;
pub mod collection_impls;
pub mod datetime_conversion;
pub mod from_field_value;
pub mod primitive_impls;
pub mod to_data_value;

// 重新导出核心 trait
pub use from_field_value::FromFieldValue;
pub use to_data_value::ToDataValue;
