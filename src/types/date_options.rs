//! 日期转换选项
//!
//! `DateInputFormat` 决定如何把原始值解析为绝对时间，
//! `DateConversionOption` 决定写入日期字段的输出形式

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 日期输出形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateConversionOption {
    /// 不转换，原样保留文本
    #[default]
    LeaveAsText,
    /// 转换为日期时间值
    ConvertToDate,
    /// 转换为Unix时间戳（秒）
    ConvertToTimestamp,
}

/// 自定义日期解析器
///
/// 对应预先构建好的格式化器对象，解析失败返回 `None`
pub trait DateFormatter: Send + Sync {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>>;
}

/// 日期输入格式
#[derive(Clone, Default)]
pub enum DateInputFormat {
    /// 十进制的Unix纪元秒数
    #[default]
    EpochSeconds,
    /// .NET 时间刻度（自0001-01-01起的100纳秒刻度数）
    DotNetSimple,
    /// .NET 时间刻度，末尾附带 ±HHMM 时区偏移
    DotNetWithTimeZone,
    /// chrono 格式字符串
    Pattern(String),
    /// 调用方提供的格式化器
    Formatter(Arc<dyn DateFormatter>),
}

impl DateInputFormat {
    /// 格式名称，用于日志和配置错误提示
    pub fn name(&self) -> &'static str {
        match self {
            DateInputFormat::EpochSeconds => "epoch_seconds",
            DateInputFormat::DotNetSimple => "dotnet_simple",
            DateInputFormat::DotNetWithTimeZone => "dotnet_with_timezone",
            DateInputFormat::Pattern(_) => "pattern",
            DateInputFormat::Formatter(_) => "formatter",
        }
    }

    /// 从配置文件中的名称解析（pattern 由调用方另行提供）
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "epoch_seconds" | "json" => Some(DateInputFormat::EpochSeconds),
            "dotnet_simple" => Some(DateInputFormat::DotNetSimple),
            "dotnet_with_timezone" => Some(DateInputFormat::DotNetWithTimeZone),
            _ => None,
        }
    }
}

impl std::fmt::Debug for DateInputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateInputFormat::Pattern(p) => write!(f, "Pattern({:?})", p),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// 基于 chrono 格式字符串的格式化器
///
/// 输入不带时区信息时使用 `default_offset` 作为本地时区
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    pattern: String,
    default_offset: FixedOffset,
}

impl PatternFormatter {
    /// 创建UTC格式化器
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            default_offset: Utc.fix(),
        }
    }

    /// 设置无时区输入使用的默认偏移
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.default_offset = offset;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// 按格式字符串解析：先尝试带时区，再尝试无时区日期时间，最后尝试纯日期
    pub fn parse_with(text: &str, pattern: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_str(text, pattern) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc));
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc));
        }
        None
    }
}

impl DateFormatter for PatternFormatter {
    fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        Self::parse_with(text, &self.pattern, self.default_offset)
    }
}

/// 写入日期字段的值
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// 原始文本
    Text(String),
    /// 日期时间
    DateTime(DateTime<Utc>),
    /// Unix时间戳（秒）
    Timestamp(f64),
}

impl Default for DateValue {
    fn default() -> Self {
        DateValue::Text(String::new())
    }
}

impl DateValue {
    /// 尽量取得绝对时间；文本按 RFC3339 解析
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            DateValue::DateTime(dt) => Some(*dt),
            DateValue::Timestamp(ts) => {
                let millis = (ts * 1000.0).round() as i64;
                Utc.timestamp_millis_opt(millis).single()
            }
            DateValue::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}
