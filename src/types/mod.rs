//! 通用数据类型定义
//!
//! 定义动态数据值、日期选项和键映射表

pub mod data_value;
pub mod date_options;
pub mod key_mapping;

// 重新导出所有公共类型
pub use data_value::{DataValue, json_value_to_data_value};
pub use date_options::{DateConversionOption, DateInputFormat, DateFormatter, DateValue, PatternFormatter};
pub use key_mapping::{KeyMapping, KeyMappingTable};
