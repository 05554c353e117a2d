//! Model trait 定义模块
//!
//! 定义模型的核心接口：字段声明、字段赋值、按键自定义钩子，
//! 以及从松散类型映射构造/更新模型的入口

use crate::config::MapOptions;
use crate::debug_log;
use crate::error::QuickModelResult;
use crate::model::field_types::{FieldDefinition, FieldValue, ModelMeta};
use crate::model::mapper::{self, MapContext};
use crate::types::{DataValue, KeyMapping};
use std::collections::HashMap;

/// 自定义钩子的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializeOutcome {
    /// 钩子已处理该键，跳过默认转换
    Handled,
    /// 钩子未处理，继续默认转换
    Unhandled,
}

/// 传给自定义钩子的上下文
pub struct SerializeContext<'a> {
    pub(crate) field: &'a FieldDefinition,
    pub(crate) key: &'a str,
    pub(crate) value: &'a DataValue,
    pub(crate) input: &'a HashMap<String, DataValue>,
    pub(crate) mapping: Option<&'a KeyMapping>,
    pub(crate) map_ctx: &'a MapContext<'a>,
}

impl<'a> SerializeContext<'a> {
    /// 当前字段的声明
    pub fn field(&self) -> &FieldDefinition {
        self.field
    }

    /// 命中的输入键
    pub fn key(&self) -> &str {
        self.key
    }

    /// 整个输入映射
    pub fn input(&self) -> &HashMap<String, DataValue> {
        self.input
    }

    /// 本次转换的选项
    pub fn options(&self) -> &MapOptions {
        self.map_ctx.options
    }

    /// 当前嵌套深度（根对象为0）
    pub fn depth(&self) -> usize {
        self.map_ctx.depth
    }

    /// 对当前值执行默认转换并写入字段
    ///
    /// 返回是否成功写入；钩子只想预处理部分键时可以回落到这里
    pub fn apply_default<M: Model>(&self, target: &mut M) -> QuickModelResult<bool> {
        mapper::apply_default(target, self.field, self.value, self.mapping, self.map_ctx)
    }
}

/// 模型特征
///
/// 通常由 `define_model!` 生成实现
pub trait Model: Default + Send + 'static {
    /// 获取模型元数据
    fn meta() -> ModelMeta;

    /// 写入一个已转换的字段值，类型不匹配时返回 false 且不修改字段
    fn assign_field(&mut self, field: &str, value: FieldValue) -> bool;

    /// 读取字段当前值
    fn field_value(&self, field: &str) -> Option<DataValue>;

    /// 按键自定义钩子，在默认转换之前调用
    fn serialize_value(
        &mut self,
        _key: &str,
        _value: &DataValue,
        _ctx: &SerializeContext<'_>,
    ) -> QuickModelResult<SerializeOutcome> {
        Ok(SerializeOutcome::Unhandled)
    }

    /// 用默认选项从映射构造新实例
    fn init_with(input: &HashMap<String, DataValue>) -> QuickModelResult<Self> {
        Self::init_with_options(input, &MapOptions::default())
    }

    /// 从映射构造新实例
    fn init_with_options(
        input: &HashMap<String, DataValue>,
        options: &MapOptions,
    ) -> QuickModelResult<Self> {
        let mut target = Self::default();
        target.update_with_options(input, options)?;
        Ok(target)
    }

    /// 用默认选项构造；输入为空时返回全默认值实例
    fn object_with(input: Option<&HashMap<String, DataValue>>) -> QuickModelResult<Self> {
        Self::object_with_options(input, &MapOptions::default())
    }

    /// 构造新实例；输入为空时返回全默认值实例
    fn object_with_options(
        input: Option<&HashMap<String, DataValue>>,
        options: &MapOptions,
    ) -> QuickModelResult<Self> {
        match input {
            Some(map) => Self::init_with_options(map, options),
            None => {
                debug_log!("输入为空，返回默认实例: {}", Self::meta().type_name);
                Ok(Self::default())
            }
        }
    }

    /// 用默认选项更新已有实例，输入中缺失的字段保持不变
    fn update_with(&mut self, input: &HashMap<String, DataValue>) -> QuickModelResult<&mut Self> {
        self.update_with_options(input, &MapOptions::default())
    }

    /// 更新已有实例，输入中缺失的字段保持不变
    fn update_with_options(
        &mut self,
        input: &HashMap<String, DataValue>,
        options: &MapOptions,
    ) -> QuickModelResult<&mut Self> {
        let ctx = MapContext::root(options);
        mapper::map_into(self, input, &ctx)?;
        Ok(self)
    }

    /// 从JSON文本构造；顶层不是对象时返回默认实例
    fn from_json_str(json: &str, options: &MapOptions) -> QuickModelResult<Self> {
        match DataValue::from_json_string(json)? {
            DataValue::Object(map) => Self::init_with_options(&map, options),
            other => {
                debug_log!("JSON顶层不是对象({})，返回默认实例", other.type_name());
                Ok(Self::default())
            }
        }
    }
}
