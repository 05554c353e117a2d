//! 键名规范化
//!
//! 为字段名生成按优先级排列的候选输入键

/// 字段名的候选输入键（按优先级，已去重）
///
/// 1. 原名
/// 2. 去掉一个前导下划线（`_foo` -> `foo`）
/// 3. 首字母小写
pub fn candidate_keys(field: &str) -> Vec<String> {
    let mut keys = vec![field.to_string()];

    if let Some(stripped) = field.strip_prefix('_') {
        if !stripped.is_empty() {
            push_unique(&mut keys, stripped.to_string());
        }
    }

    push_unique(&mut keys, lower_first(field));
    keys
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn push_unique(keys: &mut Vec<String>, key: String) {
    if !key.is_empty() && !keys.contains(&key) {
        keys.push(key);
    }
}
