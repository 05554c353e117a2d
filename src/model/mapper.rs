//! 对象映射器
//!
//! 遍历模型声明的字段，为每个字段找到输入键，交给钩子或值转换器处理后写入

use crate::config::MapOptions;
use crate::debug_log;
use crate::error::QuickModelResult;
use crate::model::conversion::coercion;
use crate::model::field_types::{FieldDefinition, ModelType};
use crate::model::key_normalizer;
use crate::model::registry;
use crate::model::traits::{Model, SerializeContext, SerializeOutcome};
use crate::types::{DataValue, KeyMapping, KeyMappingTable};
use rat_logger::warn;
use std::collections::HashMap;

/// 一次映射调用的上下文
#[derive(Debug, Clone, Copy)]
pub struct MapContext<'a> {
    pub options: &'a MapOptions,
    pub table: &'a KeyMappingTable,
    /// 根对象使用的表，其子表对任意深度的嵌套类型生效
    pub root_table: &'a KeyMappingTable,
    /// 嵌套深度，根对象为0
    pub depth: usize,
}

impl<'a> MapContext<'a> {
    /// 根对象上下文
    pub fn root(options: &'a MapOptions) -> Self {
        Self {
            options,
            table: &options.key_mapping,
            root_table: &options.key_mapping,
            depth: 0,
        }
    }

    /// 进入嵌套模型
    pub fn nested(&self, model_type: &ModelType) -> MapContext<'a> {
        MapContext {
            options: self.options,
            table: self.table.for_nested(self.root_table, model_type),
            root_table: self.root_table,
            depth: self.depth + 1,
        }
    }
}

/// 用输入映射填充目标实例
pub fn map_into<M: Model>(
    target: &mut M,
    input: &HashMap<String, DataValue>,
    ctx: &MapContext<'_>,
) -> QuickModelResult<()> {
    let meta = registry::meta_of::<M>();

    if ctx.depth > ctx.options.max_depth {
        warn!(
            "嵌套深度超过限制: {} (深度 {}, 上限 {})",
            meta.type_name, ctx.depth, ctx.options.max_depth
        );
        return Err(crate::quick_error!(recursion, meta.type_name, ctx.depth));
    }

    for field in &meta.fields {
        let mapping = ctx.table.get(&field.name);
        let Some((key, value)) = resolve_value(field, mapping, input) else {
            debug_log!("字段 {}.{} 未找到输入键，保持不变", meta.type_name, field.name);
            continue;
        };

        if value.is_absent() {
            debug_log!("字段 {}.{} 的值为空，保持不变", meta.type_name, field.name);
            continue;
        }

        let hook_ctx = SerializeContext {
            field,
            key,
            value,
            input,
            mapping,
            map_ctx: ctx,
        };
        if target.serialize_value(key, value, &hook_ctx)? == SerializeOutcome::Handled {
            debug_log!("字段 {}.{} 已由钩子处理 (键: {})", meta.type_name, field.name, key);
            continue;
        }

        apply_default(target, field, value, mapping, ctx)?;
    }

    Ok(())
}

/// 默认转换并写入字段，返回是否写入
pub(crate) fn apply_default<M: Model>(
    target: &mut M,
    field: &FieldDefinition,
    value: &DataValue,
    mapping: Option<&KeyMapping>,
    ctx: &MapContext<'_>,
) -> QuickModelResult<bool> {
    let Some(coerced) = coercion::coerce(value, field, mapping.and_then(|m| m.element()), ctx)? else {
        return Ok(false);
    };

    let kind = coerced.kind();
    let assigned = target.assign_field(&field.name, coerced);
    if !assigned {
        debug_log!("字段 {} 不接受 {} 类型的值，保持不变", field.name, kind);
    }
    Ok(assigned)
}

// 映射表条目存在时只查该条目的键
fn resolve_value<'i>(
    field: &FieldDefinition,
    mapping: Option<&KeyMapping>,
    input: &'i HashMap<String, DataValue>,
) -> Option<(&'i str, &'i DataValue)> {
    match mapping {
        Some(mapping) => input
            .get_key_value(mapping.input_key())
            .map(|(k, v)| (k.as_str(), v)),
        None => key_normalizer::candidate_keys(&field.name)
            .iter()
            .find_map(|candidate| input.get_key_value(candidate.as_str()))
            .map(|(k, v)| (k.as_str(), v)),
    }
}
