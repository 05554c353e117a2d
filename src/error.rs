//! 错误类型定义模块
//!
//! 数据转换路径上的类型不匹配、键缺失、日期解析失败都按"跳过"静默处理，
//! 这里只定义配置、递归保护等真正需要上报的错误

use thiserror::Error;

/// rat_quickmodel 统一错误类型
#[derive(Error, Debug)]
pub enum QuickModelError {
    /// 配置错误
    #[error("{message}")]
    ConfigError { message: String },

    /// 嵌套模型递归超过深度限制（通常是模型类型自引用）
    #[error("{message}")]
    RecursionLimitExceeded {
        type_name: String,
        depth: usize,
        message: String,
    },

    /// 序列化/反序列化错误
    #[error("{message}")]
    SerializationError { message: String },

    /// 验证错误
    #[error("{field}: {message}")]
    ValidationError { field: String, message: String },

    /// IO错误
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),
}

/// rat_quickmodel 结果类型
pub type QuickModelResult<T> = Result<T, QuickModelError>;

impl From<serde_json::Error> for QuickModelError {
    fn from(e: serde_json::Error) -> Self {
        QuickModelError::SerializationError {
            message: crate::i18n::tf("error.serialization", &[("message", &e.to_string())]),
        }
    }
}

impl QuickModelError {
    /// 是否为配置类错误（递归超限也属于模型声明层面的配置问题）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            QuickModelError::ConfigError { .. } | QuickModelError::RecursionLimitExceeded { .. }
        )
    }
}

/// 便捷宏：构造带多语言消息的错误
#[macro_export]
macro_rules! quick_error {
    (config, $msg:expr) => {
        $crate::error::QuickModelError::ConfigError {
            message: $crate::i18n::tf("error.config", &[("message", &$msg.to_string())]),
        }
    };
    (serialization, $msg:expr) => {
        $crate::error::QuickModelError::SerializationError {
            message: $crate::i18n::tf("error.serialization", &[("message", &$msg.to_string())]),
        }
    };
    (validation, $field:expr, $msg:expr) => {
        $crate::error::QuickModelError::ValidationError {
            field: $field.to_string(),
            message: $msg.to_string(),
        }
    };
    (recursion, $type_name:expr, $depth:expr) => {
        $crate::error::QuickModelError::RecursionLimitExceeded {
            type_name: $type_name.to_string(),
            depth: $depth,
            message: $crate::i18n::tf(
                "error.recursion_limit",
                &[("type_name", &$type_name.to_string()), ("depth", &$depth.to_string())],
            ),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_classification() {
        let err = crate::quick_error!(config, "max_depth必须大于0");
        assert!(err.is_config_error());

        let err = crate::quick_error!(recursion, "Node", 33usize);
        assert!(err.is_config_error());
        match err {
            QuickModelError::RecursionLimitExceeded { type_name, depth, .. } => {
                assert_eq!(type_name, "Node");
                assert_eq!(depth, 33);
            }
            other => panic!("意外的错误类型: {:?}", other),
        }

        let err = crate::quick_error!(serialization, "bad json");
        assert!(!err.is_config_error());
    }
}
