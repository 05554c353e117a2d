//! 日期字段转换工具
//!
//! 按 `DateInputFormat` 把原始值解析为绝对时间，再按 `DateConversionOption` 渲染输出形式。
//! 解析失败一律返回 `None`，由调用方跳过该字段

use crate::debug_log;
use crate::types::{DataValue, DateConversionOption, DateInputFormat, DateValue, PatternFormatter};
use crate::utils::{contains, timezone::parse_timezone_offset_to_seconds};
use chrono::{DateTime, Duration, Offset, SecondsFormat, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// 0001-01-01 到 1970-01-01 之间的 .NET 刻度数
pub const DOTNET_EPOCH_OFFSET_TICKS: i64 = 621_355_968_000_000_000;

/// 每秒的 .NET 刻度数（一个刻度100纳秒）
pub const TICKS_PER_SECOND: i64 = 10_000_000;

fn dotnet_regex() -> &'static Regex {
    static DOTNET_REGEX: OnceLock<Regex> = OnceLock::new();
    DOTNET_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(-?\d+)\s*([+-]\d{4})?\s*$").expect(".NET 日期正则表达式无效")
    })
}

fn dotnet_wrapper_regex() -> &'static Regex {
    static DOTNET_WRAPPER_REGEX: OnceLock<Regex> = OnceLock::new();
    DOTNET_WRAPPER_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^/date\((.*)\)/$").expect(".NET 日期包装正则表达式无效")
    })
}

/// 原始值的文本形式；数值按自然格式输出
pub fn raw_text(raw: &DataValue) -> Option<String> {
    match raw {
        DataValue::String(s) => Some(s.clone()),
        DataValue::Int(i) => Some(i.to_string()),
        DataValue::Float(f) if f.is_finite() => Some(f.to_string()),
        _ => None,
    }
}

/// 按输入格式解析为绝对时间
pub fn parse(raw: &DataValue, format: &DateInputFormat) -> Option<DateTime<Utc>> {
    let parsed = match format {
        DateInputFormat::EpochSeconds => parse_epoch_seconds(raw),
        DateInputFormat::DotNetSimple => parse_dotnet(raw, false),
        DateInputFormat::DotNetWithTimeZone => parse_dotnet(raw, true),
        DateInputFormat::Pattern(pattern) => raw_text(raw)
            .and_then(|text| PatternFormatter::parse_with(text.trim(), pattern, Utc.fix())),
        DateInputFormat::Formatter(formatter) => raw_text(raw).and_then(|text| formatter.parse(&text)),
    };

    if parsed.is_none() {
        debug_log!("日期解析失败: {:?} (格式: {})", raw, format.name());
    }
    parsed
}

/// 把绝对时间渲染为输出形式
pub fn render(time: DateTime<Utc>, option: DateConversionOption) -> DateValue {
    match option {
        DateConversionOption::LeaveAsText => {
            DateValue::Text(time.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        DateConversionOption::ConvertToDate => DateValue::DateTime(time),
        DateConversionOption::ConvertToTimestamp => {
            DateValue::Timestamp(time.timestamp_millis() as f64 / 1000.0)
        }
    }
}

/// 日期字段的完整转换
///
/// 保留文本模式下不解析，原样返回文本
pub fn convert(
    raw: &DataValue,
    format: &DateInputFormat,
    option: DateConversionOption,
) -> Option<DateValue> {
    if option == DateConversionOption::LeaveAsText {
        return raw_text(raw).map(DateValue::Text);
    }
    parse(raw, format).map(|time| render(time, option))
}

/// 带小数的纪元秒，保留毫秒精度
pub fn from_fractional_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let millis = (secs * 1000.0).round();
    if millis.abs() >= i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_millis_opt(millis as i64).single()
}

/// .NET 刻度转换为绝对时间
pub fn ticks_to_datetime(ticks: i64) -> Option<DateTime<Utc>> {
    let since_epoch = ticks.checked_sub(DOTNET_EPOCH_OFFSET_TICKS)?;
    let secs = since_epoch.div_euclid(TICKS_PER_SECOND);
    let nanos = (since_epoch.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
    Utc.timestamp_opt(secs, nanos).single()
}

fn parse_epoch_seconds(raw: &DataValue) -> Option<DateTime<Utc>> {
    match raw {
        DataValue::Int(secs) => Utc.timestamp_opt(*secs, 0).single(),
        DataValue::Float(secs) => from_fractional_seconds(*secs),
        DataValue::String(text) => {
            let text = text.trim();
            match text.parse::<i64>() {
                Ok(secs) => Utc.timestamp_opt(secs, 0).single(),
                Err(_) => text.parse::<f64>().ok().and_then(from_fractional_seconds),
            }
        }
        _ => None,
    }
}

fn parse_dotnet(raw: &DataValue, with_timezone: bool) -> Option<DateTime<Utc>> {
    let text = raw_text(raw)?;
    let trimmed = text.trim();
    // /Date(...)/ 包装不区分大小写
    let body = match dotnet_wrapper_regex().captures(trimmed) {
        Some(caps) => caps.get(1)?.as_str(),
        None if contains(&trimmed.to_lowercase(), "/date(") => return None,
        None => trimmed,
    };

    let caps = dotnet_regex().captures(body)?;
    let ticks: i64 = caps[1].parse().ok()?;
    let instant = ticks_to_datetime(ticks)?;

    if !with_timezone {
        return Some(instant);
    }
    match caps.get(2) {
        // 偏移量直接加到时间点上
        Some(offset) => {
            let seconds = parse_timezone_offset_to_seconds(offset.as_str()).ok()?;
            instant.checked_add_signed(Duration::seconds(seconds as i64))
        }
        None => Some(instant),
    }
}
