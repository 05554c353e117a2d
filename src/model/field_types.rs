//! 字段类型定义模块
//!
//! 定义模型字段的声明类型、元数据，以及转换后交给模型赋值的字段值

use crate::error::QuickModelResult;
use crate::model::mapper::{self, MapContext};
use crate::model::traits::Model;
use crate::types::{DataValue, DateValue};
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// 嵌套模型的类型擦除构造函数
pub type BuildFn =
    fn(&HashMap<String, DataValue>, &MapContext<'_>) -> QuickModelResult<Box<dyn Any + Send>>;

/// 嵌套模型类型句柄
///
/// 携带类型标识和构造函数，用于在字段声明和键映射表中引用另一个模型类型
#[derive(Clone, Copy)]
pub struct ModelType {
    type_id: TypeId,
    name: &'static str,
    build: BuildFn,
}

impl ModelType {
    /// 获取模型类型句柄
    pub fn of<M: Model>() -> Self {
        Self {
            type_id: TypeId::of::<M>(),
            name: short_type_name(std::any::type_name::<M>()),
            build: build_erased::<M>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 用输入映射构造一个该类型的新实例
    pub fn build(
        &self,
        input: &HashMap<String, DataValue>,
        ctx: &MapContext<'_>,
    ) -> QuickModelResult<Box<dyn Any + Send>> {
        (self.build)(input, ctx)
    }
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl std::fmt::Debug for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelType({})", self.name)
    }
}

fn build_erased<M: Model>(
    input: &HashMap<String, DataValue>,
    ctx: &MapContext<'_>,
) -> QuickModelResult<Box<dyn Any + Send>> {
    let mut target = M::default();
    mapper::map_into(&mut target, input, ctx)?;
    Ok(Box::new(target))
}

fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

/// 字段类型枚举
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// 文本
    Text,
    /// 整数
    Integer,
    /// 浮点数
    Float,
    /// 布尔
    Boolean,
    /// 日期，输出形式由 `DateConversionOption` 决定
    Date,
    /// 不透明对象，原样保留
    Json,
    /// 序列；`item_type` 为空时元素原样保留
    Array { item_type: Option<Box<FieldType>> },
    /// 嵌套模型
    Object(ModelType),
}

impl FieldType {
    /// 类型名称，用于日志
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Json => "json",
            FieldType::Array { .. } => "array",
            FieldType::Object(_) => "object",
        }
    }
}

/// 字段定义
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// 字段名（即结构体成员名）
    pub name: String,
    /// 字段类型
    pub field_type: FieldType,
}

impl FieldDefinition {
    /// 创建新的字段定义，字段名由 `define_model!` 通过 `named` 填入
    pub fn new(field_type: FieldType) -> Self {
        Self {
            name: String::new(),
            field_type,
        }
    }

    /// 设置字段名
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

/// 模型元数据
#[derive(Debug, Clone)]
pub struct ModelMeta {
    /// 模型类型名
    pub type_name: String,
    /// 字段定义（按声明顺序）
    pub fields: Vec<FieldDefinition>,
}

impl ModelMeta {
    pub fn new(type_name: &str, fields: Vec<FieldDefinition>) -> Self {
        Self {
            type_name: type_name.to_string(),
            fields,
        }
    }

    /// 所有字段名
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// 转换后的字段值，交给 `Model::assign_field` 写入
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(DateValue),
    /// 未声明具体类型的原始值
    Raw(DataValue),
    Array(Vec<FieldValue>),
    /// 嵌套模型实例
    Object(Box<dyn Any + Send>),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Date(_) => "date",
            FieldValue::Raw(_) => "raw",
            FieldValue::Array(_) => "array",
            FieldValue::Object(_) => "object",
        }
    }
}

impl std::fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "Text({:?})", s),
            FieldValue::Integer(i) => write!(f, "Integer({})", i),
            FieldValue::Float(fl) => write!(f, "Float({})", fl),
            FieldValue::Boolean(b) => write!(f, "Boolean({})", b),
            FieldValue::Date(d) => write!(f, "Date({:?})", d),
            FieldValue::Raw(v) => write!(f, "Raw({:?})", v),
            FieldValue::Array(items) => f.debug_list().entries(items).finish(),
            FieldValue::Object(_) => write!(f, "Object(..)"),
        }
    }
}
