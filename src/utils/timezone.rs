//! 时区相关的工具函数

use crate::error::QuickModelResult;
use chrono::FixedOffset;
use regex::Regex;
use std::sync::OnceLock;

fn offset_regex() -> &'static Regex {
    static TZ_REGEX: OnceLock<Regex> = OnceLock::new();
    TZ_REGEX.get_or_init(|| {
        Regex::new(r"^([+-])(\d{2}):?(\d{2})$").expect("时区偏移正则表达式无效")
    })
}

/// 将时区偏移字符串转换为秒数（东正西负）
///
/// # 参数
/// * `timezone_offset` - 时区偏移，格式 "+08:00"、"-0500"
pub fn parse_timezone_offset_to_seconds(timezone_offset: &str) -> QuickModelResult<i32> {
    let caps = offset_regex().captures(timezone_offset).ok_or_else(|| {
        crate::quick_error!(
            validation,
            "timezone_offset",
            format!(
                "无效的时区偏移格式: '{}', 期望格式: +HH:MM 或 +HHMM",
                timezone_offset
            )
        )
    })?;

    let sign = if &caps[1] == "+" { 1 } else { -1 };
    let hours: i32 = caps[2].parse().map_err(|_| {
        crate::quick_error!(
            validation,
            "timezone_offset",
            format!("无效的小时格式: '{}'", &caps[2])
        )
    })?;
    let minutes: i32 = caps[3].parse().map_err(|_| {
        crate::quick_error!(
            validation,
            "timezone_offset",
            format!("无效的分钟格式: '{}'", &caps[3])
        )
    })?;

    if hours > 23 || minutes > 59 {
        return Err(crate::quick_error!(
            validation,
            "timezone_offset",
            format!(
                "时区偏移超出有效范围: {}, 允许范围: -23:59 到 +23:59",
                timezone_offset
            )
        ));
    }

    Ok(sign * (hours * 3600 + minutes * 60))
}

/// 将时区偏移字符串转换为 `FixedOffset`
pub fn parse_fixed_offset(timezone_offset: &str) -> QuickModelResult<FixedOffset> {
    let seconds = parse_timezone_offset_to_seconds(timezone_offset)?;
    FixedOffset::east_opt(seconds).ok_or_else(|| {
        crate::quick_error!(
            validation,
            "timezone_offset",
            format!("无效的时区偏移: {}", timezone_offset)
        )
    })
}
