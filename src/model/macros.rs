//! 模型相关的宏定义
//!
//! 提供便捷的宏来定义模型和字段类型

/// 便捷宏：定义字段类型
#[macro_export]
macro_rules! field_types {
    (text) => {
        $crate::model::field_types::FieldType::Text
    };
    (integer) => {
        $crate::model::field_types::FieldType::Integer
    };
    (float) => {
        $crate::model::field_types::FieldType::Float
    };
    (boolean) => {
        $crate::model::field_types::FieldType::Boolean
    };
    (date) => {
        $crate::model::field_types::FieldType::Date
    };
    (json) => {
        $crate::model::field_types::FieldType::Json
    };
    (array) => {
        $crate::model::field_types::FieldType::Array { item_type: None }
    };
    (array, $item_type:expr) => {
        $crate::model::field_types::FieldType::Array {
            item_type: Some(Box::new($item_type)),
        }
    };
    (object, $model:ty) => {
        $crate::model::field_types::FieldType::Object(
            $crate::model::field_types::ModelType::of::<$model>(),
        )
    };
}

/// 便捷宏：定义模型
///
/// ```ignore
/// define_model! {
///     struct User {
///         id: i64,
///         name: String,
///     }
///
///     fields = {
///         id: integer_field(),
///         name: string_field(),
///     }
///     hook = user_hook,
/// }
/// ```
///
/// `hook` 可选，签名为
/// `fn(&mut User, &str, &DataValue, &SerializeContext<'_>) -> QuickModelResult<SerializeOutcome>`
#[macro_export]
macro_rules! define_model {
    (
        $(#[$meta:meta])*
        struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $field_type:ty,
            )*
        }

        fields = {
            $(
                $field_name:ident: $field_def:expr,
            )*
        }
        $(
            hook = $hook:path,
        )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $field_type,
            )*
        }

        impl $crate::model::traits::Model for $name {
            fn meta() -> $crate::model::field_types::ModelMeta {
                let fields: Vec<$crate::model::field_types::FieldDefinition> = vec![
                    $(
                        ($field_def).named(stringify!($field_name)),
                    )*
                ];
                $crate::model::field_types::ModelMeta::new(stringify!($name), fields)
            }

            #[allow(unused_variables)]
            fn assign_field(
                &mut self,
                field: &str,
                value: $crate::model::field_types::FieldValue,
            ) -> bool {
                $(
                    if field == stringify!($field) {
                        return match <$field_type as $crate::model::conversion::FromFieldValue>::from_field_value(value) {
                            Some(converted) => {
                                self.$field = converted;
                                true
                            }
                            None => false,
                        };
                    }
                )*
                false
            }

            #[allow(unused_variables)]
            fn field_value(&self, field: &str) -> Option<$crate::types::DataValue> {
                $(
                    if field == stringify!($field) {
                        return Some($crate::model::conversion::ToDataValue::to_data_value(&self.$field));
                    }
                )*
                None
            }

            #[allow(unreachable_code, unused_variables)]
            fn serialize_value(
                &mut self,
                key: &str,
                value: &$crate::types::DataValue,
                ctx: &$crate::model::traits::SerializeContext<'_>,
            ) -> $crate::error::QuickModelResult<$crate::model::traits::SerializeOutcome> {
                $(
                    return $hook(self, key, value, ctx);
                )?
                Ok($crate::model::traits::SerializeOutcome::Unhandled)
            }
        }

        impl $crate::model::conversion::FromFieldValue for $name {
            fn from_field_value(value: $crate::model::field_types::FieldValue) -> Option<Self> {
                match value {
                    $crate::model::field_types::FieldValue::Object(instance) => {
                        instance.downcast::<Self>().ok().map(|boxed| *boxed)
                    }
                    _ => None,
                }
            }
        }

        impl $crate::model::conversion::ToDataValue for $name {
            fn to_data_value(&self) -> $crate::types::DataValue {
                $crate::types::DataValue::Object($crate::model::archive::encode(self))
            }
        }
    };
}
