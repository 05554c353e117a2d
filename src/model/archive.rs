//! 归档适配
//!
//! 模型与键值映射/JSON文本之间的互转，只处理声明过的字段

use crate::config::MapOptions;
use crate::error::QuickModelResult;
use crate::model::registry;
use crate::model::traits::Model;
use crate::types::DataValue;
use std::collections::HashMap;

/// 把模型的声明字段编码为键值映射
pub fn encode<M: Model>(model: &M) -> HashMap<String, DataValue> {
    let meta = registry::meta_of::<M>();
    meta.fields
        .iter()
        .filter_map(|field| {
            model
                .field_value(&field.name)
                .map(|value| (field.name.clone(), value))
        })
        .collect()
}

/// 从键值映射解码
pub fn decode<M: Model>(
    data: &HashMap<String, DataValue>,
    options: &MapOptions,
) -> QuickModelResult<M> {
    M::init_with_options(data, options)
}

/// 编码为JSON文本
pub fn to_json_string<M: Model>(model: &M) -> QuickModelResult<String> {
    DataValue::Object(encode(model)).to_json_string()
}

/// 从JSON文本解码
pub fn from_json_string<M: Model>(json: &str, options: &MapOptions) -> QuickModelResult<M> {
    M::from_json_str(json, options)
}

/// 归档涉及的字段名（声明顺序）
pub fn archived_fields<M: Model>() -> Vec<String> {
    registry::meta_of::<M>()
        .fields
        .iter()
        .map(|field| field.name.clone())
        .collect()
}
