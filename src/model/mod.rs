//! 模型定义系统模块
//!
//! 通过 `define_model!` 声明模型的字段和类型，
//! 由对象映射器把松散类型的键值映射填充到模型实例

pub mod archive;
pub mod convenience;
pub mod conversion;
pub mod field_types;
pub mod key_normalizer;
pub mod macros;
pub mod mapper;
pub mod registry;
pub mod traits;

// 重新导出核心类型
pub use convenience::*;
pub use conversion::{FromFieldValue, ToDataValue};
pub use field_types::{FieldDefinition, FieldType, FieldValue, ModelMeta, ModelType};
pub use mapper::MapContext;
pub use traits::{Model, SerializeContext, SerializeOutcome};
