//! 键映射表
//!
//! 调用方显式指定字段对应的输入键，或声明某个数组字段的元素为嵌套模型

use crate::model::{Model, ModelType};
use std::any::TypeId;
use std::collections::HashMap;

/// 单个字段的键映射
#[derive(Debug, Clone, PartialEq)]
pub enum KeyMapping {
    /// 使用另一个输入键名
    Rename(String),
    /// 输入键下的数组按 `element` 类型逐个解码为嵌套模型
    Nested { element: ModelType, key: String },
}

impl KeyMapping {
    /// 输入映射中要查找的键
    pub fn input_key(&self) -> &str {
        match self {
            KeyMapping::Rename(key) => key,
            KeyMapping::Nested { key, .. } => key,
        }
    }

    /// 嵌套元素类型（仅 Nested）
    pub fn element(&self) -> Option<&ModelType> {
        match self {
            KeyMapping::Rename(_) => None,
            KeyMapping::Nested { element, .. } => Some(element),
        }
    }
}

/// 键映射表：字段名 -> 键映射
///
/// 可以为嵌套模型类型挂载单独的子表，递归进入该类型时优先使用子表，
/// 没有子表时沿用父表
#[derive(Debug, Clone, Default)]
pub struct KeyMappingTable {
    entries: HashMap<String, KeyMapping>,
    scoped: HashMap<TypeId, KeyMappingTable>,
}

impl KeyMappingTable {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// 字段改用另一个输入键
    pub fn rename(mut self, field: &str, input_key: &str) -> Self {
        self.insert(field, KeyMapping::Rename(input_key.to_string()));
        self
    }

    /// 声明数组字段的元素类型
    pub fn nested<M: Model>(mut self, field: &str, input_key: &str) -> Self {
        self.insert(
            field,
            KeyMapping::Nested {
                element: ModelType::of::<M>(),
                key: input_key.to_string(),
            },
        );
        self
    }

    /// 为嵌套模型类型挂载子表
    pub fn scope<M: Model>(mut self, table: KeyMappingTable) -> Self {
        self.scoped.insert(TypeId::of::<M>(), table);
        self
    }

    /// 插入或覆盖一条映射
    pub fn insert(&mut self, field: &str, mapping: KeyMapping) {
        self.entries.insert(field.to_string(), mapping);
    }

    /// 查找字段的映射
    pub fn get(&self, field: &str) -> Option<&KeyMapping> {
        self.entries.get(field)
    }

    /// 为 `model_type` 挂载的子表
    pub fn scoped_table(&self, model_type: &ModelType) -> Option<&KeyMappingTable> {
        self.scoped.get(&model_type.type_id())
    }

    /// 递归进入 `model_type` 时应使用的表
    ///
    /// 先查当前表的子表，再查根表的子表，都没有时沿用当前表
    pub fn for_nested<'a>(
        &'a self,
        root: &'a KeyMappingTable,
        model_type: &ModelType,
    ) -> &'a KeyMappingTable {
        self.scoped_table(model_type)
            .or_else(|| root.scoped_table(model_type))
            .unwrap_or(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.scoped.is_empty()
    }
}

impl From<HashMap<String, String>> for KeyMappingTable {
    fn from(renames: HashMap<String, String>) -> Self {
        let entries = renames
            .into_iter()
            .map(|(field, key)| (field, KeyMapping::Rename(key)))
            .collect();
        Self {
            entries,
            scoped: HashMap::new(),
        }
    }
}
