//! 值转换器
//!
//! 把一个原始值转换为字段声明的类型。转换不了返回 `Ok(None)`，字段保持不变；
//! 只有嵌套递归超限才返回错误

use crate::debug_log;
use crate::error::QuickModelResult;
use crate::model::conversion::datetime_conversion;
use crate::model::field_types::{FieldDefinition, FieldType, FieldValue, ModelType};
use crate::model::mapper::MapContext;
use crate::types::DataValue;

const TRUE_TOKENS: [&str; 6] = ["true", "yes", "y", "t", "on", "1"];
const FALSE_TOKENS: [&str; 6] = ["false", "no", "n", "f", "off", "0"];

/// 按字段声明转换原始值
///
/// `nested_element` 来自键映射表的 `Nested` 条目，存在时原始值按嵌套模型数组处理
pub fn coerce(
    raw: &DataValue,
    field: &FieldDefinition,
    nested_element: Option<&ModelType>,
    ctx: &MapContext<'_>,
) -> QuickModelResult<Option<FieldValue>> {
    let coerced = match nested_element {
        Some(element) => coerce_nested_array(raw, element, ctx)?,
        None => coerce_as(raw, &field.field_type, ctx)?,
    };

    if coerced.is_none() {
        debug_log!(
            "字段 {} 类型不匹配，跳过: {} -> {}",
            field.name,
            raw.type_name(),
            field.field_type.type_name()
        );
    }
    Ok(coerced)
}

fn coerce_as(
    raw: &DataValue,
    field_type: &FieldType,
    ctx: &MapContext<'_>,
) -> QuickModelResult<Option<FieldValue>> {
    let value = match field_type {
        FieldType::Text => to_text(raw).map(FieldValue::Text),
        FieldType::Integer => to_integer(raw).map(FieldValue::Integer),
        FieldType::Float => to_float(raw).map(FieldValue::Float),
        FieldType::Boolean => to_boolean(raw).map(FieldValue::Boolean),
        FieldType::Date => datetime_conversion::convert(
            raw,
            &ctx.options.date_input_format,
            ctx.options.date_conversion,
        )
        .map(FieldValue::Date),
        FieldType::Json => Some(FieldValue::Raw(raw.clone())),
        FieldType::Object(model_type) => return coerce_object(raw, model_type, ctx),
        FieldType::Array { item_type } => {
            return coerce_array(raw, item_type.as_deref(), ctx);
        }
    };
    Ok(value)
}

fn coerce_object(
    raw: &DataValue,
    model_type: &ModelType,
    ctx: &MapContext<'_>,
) -> QuickModelResult<Option<FieldValue>> {
    match raw {
        DataValue::Object(map) => {
            let nested_ctx = ctx.nested(model_type);
            let instance = model_type.build(map, &nested_ctx)?;
            Ok(Some(FieldValue::Object(instance)))
        }
        _ => Ok(None),
    }
}

fn coerce_array(
    raw: &DataValue,
    item_type: Option<&FieldType>,
    ctx: &MapContext<'_>,
) -> QuickModelResult<Option<FieldValue>> {
    let Some(items) = raw.as_array() else {
        return Ok(None);
    };

    let Some(item_type) = item_type else {
        return Ok(Some(FieldValue::Array(
            items.iter().cloned().map(FieldValue::Raw).collect(),
        )));
    };

    let mut values = Vec::with_capacity(items.len());
    for item in items {
        match coerce_as(item, item_type, ctx)? {
            Some(value) => values.push(value),
            None => {
                debug_log!("数组元素类型不匹配，丢弃: {}", item.type_name());
            }
        }
    }
    Ok(Some(FieldValue::Array(values)))
}

fn coerce_nested_array(
    raw: &DataValue,
    element: &ModelType,
    ctx: &MapContext<'_>,
) -> QuickModelResult<Option<FieldValue>> {
    let Some(items) = raw.as_array() else {
        return Ok(None);
    };

    let nested_ctx = ctx.nested(element);
    let mut values = Vec::with_capacity(items.len());
    for item in items {
        match item {
            DataValue::Object(map) => values.push(FieldValue::Object(element.build(map, &nested_ctx)?)),
            other => {
                debug_log!("{} 数组元素不是对象，丢弃: {}", element.name(), other.type_name());
            }
        }
    }
    Ok(Some(FieldValue::Array(values)))
}

fn to_text(raw: &DataValue) -> Option<String> {
    match raw {
        DataValue::String(s) => Some(s.clone()),
        DataValue::Int(i) => Some(i.to_string()),
        DataValue::Float(f) => Some(f.to_string()),
        DataValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    let truncated = f.trunc();
    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

fn to_integer(raw: &DataValue) -> Option<i64> {
    match raw {
        DataValue::Int(i) => Some(*i),
        DataValue::Float(f) => float_to_integer(*f),
        DataValue::Bool(b) => Some(*b as i64),
        DataValue::String(s) => {
            let text = s.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(float_to_integer))
        }
        _ => None,
    }
}

fn to_float(raw: &DataValue) -> Option<f64> {
    match raw {
        DataValue::Int(i) => Some(*i as f64),
        DataValue::Float(f) => Some(*f),
        DataValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        DataValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn to_boolean(raw: &DataValue) -> Option<bool> {
    match raw {
        DataValue::Bool(b) => Some(*b),
        DataValue::Int(i) => Some(*i != 0),
        DataValue::Float(f) => Some(*f != 0.0),
        DataValue::String(s) => {
            let token = s.trim().to_lowercase();
            if TRUE_TOKENS.contains(&token.as_str()) {
                Some(true)
            } else if FALSE_TOKENS.contains(&token.as_str()) {
                Some(false)
            } else {
                token.parse::<f64>().ok().filter(|f| !f.is_nan()).map(|f| f != 0.0)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapOptions;
    use crate::types::{DateConversionOption, DateValue};

    fn coerce_with(raw: DataValue, field_type: FieldType, options: &MapOptions) -> Option<FieldValue> {
        let ctx = MapContext::root(options);
        coerce(&raw, &FieldDefinition::new(field_type).named("value"), None, &ctx).unwrap()
    }

    fn coerce_default(raw: DataValue, field_type: FieldType) -> Option<FieldValue> {
        coerce_with(raw, field_type, &MapOptions::default())
    }

    #[test]
    fn test_text_coercion() {
        assert!(matches!(coerce_default("Ann".into(), FieldType::Text), Some(FieldValue::Text(s)) if s == "Ann"));
        assert!(matches!(coerce_default(5.into(), FieldType::Text), Some(FieldValue::Text(s)) if s == "5"));
        assert!(matches!(coerce_default(1.5.into(), FieldType::Text), Some(FieldValue::Text(s)) if s == "1.5"));
        assert!(coerce_default(DataValue::Array(vec![]), FieldType::Text).is_none());
    }

    #[test]
    fn test_integer_coercion() {
        assert!(matches!(coerce_default(" 42 ".into(), FieldType::Integer), Some(FieldValue::Integer(42))));
        assert!(matches!(coerce_default("3.9".into(), FieldType::Integer), Some(FieldValue::Integer(3))));
        assert!(matches!(coerce_default((-2.7).into(), FieldType::Integer), Some(FieldValue::Integer(-2))));
        assert!(matches!(coerce_default(true.into(), FieldType::Integer), Some(FieldValue::Integer(1))));
        assert!(coerce_default("abc".into(), FieldType::Integer).is_none());
        assert!(coerce_default(f64::INFINITY.into(), FieldType::Integer).is_none());
    }

    #[test]
    fn test_float_coercion() {
        assert!(matches!(coerce_default(2.into(), FieldType::Float), Some(FieldValue::Float(f)) if f == 2.0));
        assert!(matches!(coerce_default("0.25".into(), FieldType::Float), Some(FieldValue::Float(f)) if f == 0.25));
        assert!(coerce_default(DataValue::Object(Default::default()), FieldType::Float).is_none());
    }

    #[test]
    fn test_boolean_tokens() {
        for token in ["true", "YES", "y", "T", "On", "1"] {
            assert!(matches!(coerce_default(token.into(), FieldType::Boolean), Some(FieldValue::Boolean(true))), "{}", token);
        }
        for token in ["false", "No", "n", "F", "OFF", "0"] {
            assert!(matches!(coerce_default(token.into(), FieldType::Boolean), Some(FieldValue::Boolean(false))), "{}", token);
        }
        assert!(matches!(coerce_default("2".into(), FieldType::Boolean), Some(FieldValue::Boolean(true))));
        assert!(matches!(coerce_default(0.into(), FieldType::Boolean), Some(FieldValue::Boolean(false))));
        assert!(coerce_default("maybe".into(), FieldType::Boolean).is_none());
    }

    #[test]
    fn test_date_coercion_follows_options() {
        let options = MapOptions::builder()
            .date_conversion(DateConversionOption::ConvertToTimestamp)
            .build()
            .unwrap();
        let value = coerce_with("1420070400".into(), FieldType::Date, &options);
        assert!(matches!(value, Some(FieldValue::Date(DateValue::Timestamp(ts))) if ts == 1420070400.0));

        assert!(coerce_with("soon".into(), FieldType::Date, &options).is_none());
    }

    #[test]
    fn test_array_coercion() {
        let raw = DataValue::Array(vec![1.into(), "x".into(), "3".into()]);

        let typed = coerce_default(raw.clone(), FieldType::Array { item_type: Some(Box::new(FieldType::Integer)) });
        let Some(FieldValue::Array(items)) = typed else { panic!("应当得到数组") };
        assert_eq!(items.len(), 2);

        let untyped = coerce_default(raw, FieldType::Array { item_type: None });
        let Some(FieldValue::Array(items)) = untyped else { panic!("应当得到数组") };
        assert_eq!(items.len(), 3);
        assert!(matches!(&items[1], FieldValue::Raw(DataValue::String(s)) if s == "x"));

        assert!(coerce_default("not a list".into(), FieldType::Array { item_type: None }).is_none());
    }

    #[test]
    fn test_json_passes_through() {
        let raw = DataValue::Array(vec![DataValue::Null]);
        assert!(matches!(coerce_default(raw.clone(), FieldType::Json), Some(FieldValue::Raw(v)) if v == raw));
    }
}
