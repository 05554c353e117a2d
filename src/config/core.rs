//! # 映射选项 - 核心配置类型
//!
//! `MapOptions` 控制一次映射调用的日期处理、键映射表和嵌套深度上限；
//! `MappingProfile` 是可从 TOML/JSON 文件加载的同等配置

use crate::config::builders::MapOptionsBuilder;
use crate::error::{QuickModelError, QuickModelResult};
use crate::types::{DateConversionOption, DateInputFormat, KeyMappingTable};
use crate::utils::timezone::parse_fixed_offset;
use rat_logger::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 默认嵌套深度上限
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// 映射选项
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// 日期字段的输出形式
    pub date_conversion: DateConversionOption,
    /// 日期原始值的输入格式
    pub date_input_format: DateInputFormat,
    /// 字段名到输入键的显式映射
    pub key_mapping: KeyMappingTable,
    /// 嵌套模型的最大深度
    pub max_depth: usize,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            date_conversion: DateConversionOption::LeaveAsText,
            date_input_format: DateInputFormat::EpochSeconds,
            key_mapping: KeyMappingTable::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MapOptions {
    /// 创建映射选项构建器
    pub fn builder() -> MapOptionsBuilder {
        MapOptionsBuilder::new()
    }

    /// 只设置键映射表，其余使用默认值
    pub fn with_key_mapping(table: KeyMappingTable) -> Self {
        Self {
            key_mapping: table,
            ..Self::default()
        }
    }

    /// 从映射配置文件内容构建
    pub fn from_profile(profile: &MappingProfile) -> QuickModelResult<Self> {
        let mut builder = Self::builder().date_conversion(profile.date_conversion);

        if let Some(name) = &profile.date_input {
            let format = DateInputFormat::from_name(name).ok_or_else(|| {
                crate::quick_error!(
                    config,
                    crate::i18n::tf("error.unknown_date_input", &[("name", name.as_str())])
                )
            })?;
            builder = builder.date_input_format(format);
        }
        if let Some(pattern) = &profile.date_pattern {
            builder = builder.date_pattern(pattern);
        }
        if let Some(timezone) = &profile.date_timezone {
            builder = builder.date_timezone(parse_fixed_offset(timezone)?);
        }
        if let Some(max_depth) = profile.max_depth {
            builder = builder.max_depth(max_depth);
        }
        if !profile.renames.is_empty() {
            builder = builder.key_mapping(KeyMappingTable::from(profile.renames.clone()));
        }

        builder.build()
    }
}

/// 映射配置文件
///
/// ```toml
/// date_conversion = "convert_to_date"
/// date_input = "dotnet_simple"
/// max_depth = 8
///
/// [renames]
/// user_id = "uid"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingProfile {
    /// 日期输出形式
    pub date_conversion: DateConversionOption,
    /// 日期输入格式名（epoch_seconds / dotnet_simple / dotnet_with_timezone）
    pub date_input: Option<String>,
    /// chrono 日期格式串，与 `date_input` 互斥
    pub date_pattern: Option<String>,
    /// 格式串解析无时区输入时使用的偏移，如 "+08:00"
    pub date_timezone: Option<String>,
    /// 嵌套深度上限
    pub max_depth: Option<usize>,
    /// 字段名 -> 输入键
    pub renames: HashMap<String, String>,
}

impl MappingProfile {
    /// 从配置文件加载（`.toml` 按TOML解析，其余按JSON解析）
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件路径
    pub fn from_file<P: AsRef<Path>>(path: P) -> QuickModelResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(QuickModelError::IoError)?;

        let profile = if is_toml(path.as_ref()) {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        info!("从文件加载映射配置: {:?}", path.as_ref());
        Ok(profile)
    }

    /// 解析TOML文本
    pub fn from_toml_str(content: &str) -> QuickModelResult<Self> {
        toml::from_str(content).map_err(|e| profile_error(format!("TOML: {}", e)))
    }

    /// 解析JSON文本
    pub fn from_json_str(content: &str) -> QuickModelResult<Self> {
        serde_json::from_str(content).map_err(|e| profile_error(format!("JSON: {}", e)))
    }

    /// 保存到文件，格式同样按扩展名选择
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> QuickModelResult<()> {
        let content = if is_toml(path.as_ref()) {
            toml::to_string_pretty(self)
                .map_err(|e| crate::quick_error!(serialization, format!("序列化TOML配置失败: {}", e)))?
        } else {
            serde_json::to_string_pretty(self)?
        };

        std::fs::write(path.as_ref(), content).map_err(QuickModelError::IoError)?;

        info!("保存映射配置到文件: {:?}", path.as_ref());
        Ok(())
    }

    /// 转换为映射选项
    pub fn to_options(&self) -> QuickModelResult<MapOptions> {
        MapOptions::from_profile(self)
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}

fn profile_error(message: String) -> QuickModelError {
    crate::quick_error!(
        config,
        crate::i18n::tf("error.profile_parse", &[("message", message.as_str())])
    )
}
