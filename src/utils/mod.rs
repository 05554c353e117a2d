//! 工具函数模块

pub mod timezone;

/// 子串判断
///
/// 空的 `needle` 永远不匹配
pub fn contains(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}
