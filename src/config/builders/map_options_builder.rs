//! # 映射选项构建器模块
//!
//! 日期输入的三个设置方法（格式、格式串、格式化器）互斥，
//! 第二次设置在 `build()` 时报告配置错误

use crate::config::core::{MapOptions, DEFAULT_MAX_DEPTH};
use crate::error::{QuickModelError, QuickModelResult};
use crate::i18n::{t, tf};
use crate::types::{
    DateConversionOption, DateFormatter, DateInputFormat, KeyMappingTable, PatternFormatter,
};
use chrono::FixedOffset;
use rat_logger::info;
use std::sync::Arc;

/// 映射选项构建器
#[derive(Debug, Default)]
pub struct MapOptionsBuilder {
    date_conversion: Option<DateConversionOption>,
    date_input: Option<DateInputFormat>,
    date_timezone: Option<FixedOffset>,
    key_mapping: Option<KeyMappingTable>,
    max_depth: Option<usize>,
    error: Option<QuickModelError>,
}

impl MapOptionsBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置日期输出形式
    pub fn date_conversion(mut self, option: DateConversionOption) -> Self {
        self.date_conversion = Some(option);
        self
    }

    /// 设置日期输入格式
    pub fn date_input_format(mut self, format: DateInputFormat) -> Self {
        self.set_date_input(format);
        self
    }

    /// 使用 chrono 格式串解析日期
    ///
    /// # 参数
    ///
    /// * `pattern` - 格式串，如 "%Y-%m-%d %H:%M:%S"
    pub fn date_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            self.record(crate::quick_error!(config, t("error.date_pattern_empty")));
        } else {
            self.set_date_input(DateInputFormat::Pattern(pattern));
        }
        self
    }

    /// 使用自定义格式化器解析日期
    pub fn date_formatter(mut self, formatter: Arc<dyn DateFormatter>) -> Self {
        self.set_date_input(DateInputFormat::Formatter(formatter));
        self
    }

    /// 格式串解析无时区输入时使用的偏移（仅对 `date_pattern` 生效）
    pub fn date_timezone(mut self, offset: FixedOffset) -> Self {
        self.date_timezone = Some(offset);
        self
    }

    /// 设置键映射表
    pub fn key_mapping(mut self, table: KeyMappingTable) -> Self {
        self.key_mapping = Some(table);
        self
    }

    /// 设置嵌套深度上限
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// 构建映射选项
    ///
    /// # 错误
    ///
    /// 日期输入被重复设置、格式串为空或 `max_depth` 为0时返回配置错误
    pub fn build(self) -> QuickModelResult<MapOptions> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth == 0 {
            return Err(crate::quick_error!(config, t("error.invalid_max_depth")));
        }

        let date_input_format = match (self.date_input.unwrap_or_default(), self.date_timezone) {
            (DateInputFormat::Pattern(pattern), Some(offset)) => DateInputFormat::Formatter(
                Arc::new(PatternFormatter::new(&pattern).with_offset(offset)),
            ),
            (format, _) => format,
        };

        let options = MapOptions {
            date_conversion: self.date_conversion.unwrap_or_default(),
            date_input_format,
            key_mapping: self.key_mapping.unwrap_or_default(),
            max_depth,
        };

        info!(
            "创建映射选项: 日期输出={:?}, 日期输入={}, 键映射={}条, 深度上限={}",
            options.date_conversion,
            options.date_input_format.name(),
            options.key_mapping.len(),
            options.max_depth
        );
        Ok(options)
    }

    fn set_date_input(&mut self, format: DateInputFormat) {
        match &self.date_input {
            Some(current) => {
                let message = tf(
                    "error.date_input_conflict",
                    &[("current", current.name()), ("next", format.name())],
                );
                self.record(crate::quick_error!(config, message));
            }
            None => self.date_input = Some(format),
        }
    }

    // 只保留第一个错误
    fn record(&mut self, error: QuickModelError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
