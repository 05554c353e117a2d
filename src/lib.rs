//! rat_quickmodel - 松散类型数据到强类型模型的转换引擎
//!
//! 将网络响应解析出的键值映射（JSON/XML等）按字段声明填充到模型实例，
//! 支持键名规范化、显式键映射表、嵌套模型、日期多格式转换和按键自定义钩子

// 导出所有公共模块
pub mod error;
pub mod types;
pub mod model;
pub mod config;
pub mod utils;
pub mod i18n;

// 重新导出常用类型和函数
pub use error::{QuickModelError, QuickModelResult};
pub use types::*;
pub use model::{
    Model, ModelMeta, ModelType, FieldType, FieldDefinition, FieldValue, FromFieldValue,
    ToDataValue, SerializeContext, SerializeOutcome,
    string_field, integer_field, float_field, boolean_field, date_field, json_field,
    array_field, object_field,
};
pub use model::archive;
pub use config::{MapOptions, MapOptionsBuilder, MappingProfile};

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        // 在 release 模式下不输出调试信息
    };
}

/// 初始化rat_quickmodel库
///
/// 这个函数会初始化多语言错误消息系统
///
/// 注意：日志系统由调用者自行初始化，本库不会自动初始化日志
pub fn init() {
    // 初始化多语言错误消息系统
    i18n::ErrorMessageI18n::init();
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
