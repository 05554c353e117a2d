//! 模型便捷函数模块
//!
//! 提供创建各种字段类型的便捷函数

use crate::model::field_types::{FieldDefinition, FieldType, ModelType};
use crate::model::traits::Model;

/// 便捷函数：创建文本字段
pub fn string_field() -> FieldDefinition {
    FieldDefinition::new(FieldType::Text)
}

/// 便捷函数：创建整数字段
pub fn integer_field() -> FieldDefinition {
    FieldDefinition::new(FieldType::Integer)
}

/// 便捷函数：创建浮点数字段
pub fn float_field() -> FieldDefinition {
    FieldDefinition::new(FieldType::Float)
}

/// 便捷函数：创建布尔字段
pub fn boolean_field() -> FieldDefinition {
    FieldDefinition::new(FieldType::Boolean)
}

/// 便捷函数：创建日期字段
///
/// 写入的形式（文本/日期时间/时间戳）由 `DateConversionOption` 决定
pub fn date_field() -> FieldDefinition {
    FieldDefinition::new(FieldType::Date)
}

/// 便捷函数：创建不透明对象字段，原始值原样保留
pub fn json_field() -> FieldDefinition {
    FieldDefinition::new(FieldType::Json)
}

/// 便捷函数：创建数组字段
///
/// `item_type` 为 `None` 时元素原样保留；嵌套模型数组需要在键映射表中声明元素类型
pub fn array_field(item_type: Option<FieldType>) -> FieldDefinition {
    FieldDefinition::new(FieldType::Array {
        item_type: item_type.map(Box::new),
    })
}

/// 便捷函数：创建嵌套模型字段
pub fn object_field<M: Model>() -> FieldDefinition {
    FieldDefinition::new(FieldType::Object(ModelType::of::<M>()))
}
