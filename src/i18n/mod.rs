//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误消息多语言支持

use std::collections::HashMap;
use rat_embed_lang::register_translations;

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误消息翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        // 配置错误
        let mut config_errors = HashMap::new();
        config_errors.insert("zh-CN".to_string(), "配置错误: {message}".to_string());
        config_errors.insert("en-US".to_string(), "Configuration error: {message}".to_string());
        config_errors.insert("ja-JP".to_string(), "設定エラー: {message}".to_string());
        translations.insert("error.config".to_string(), config_errors);

        // 序列化错误
        let mut serialization_errors = HashMap::new();
        serialization_errors.insert("zh-CN".to_string(), "数据序列化失败: {message}".to_string());
        serialization_errors.insert("en-US".to_string(), "Data serialization failed: {message}".to_string());
        serialization_errors.insert("ja-JP".to_string(), "データシリアライズが失敗しました: {message}".to_string());
        translations.insert("error.serialization".to_string(), serialization_errors);

        // 嵌套模型递归超限
        let mut recursion_errors = HashMap::new();
        recursion_errors.insert("zh-CN".to_string(), "模型 '{type_name}' 嵌套深度超过限制 {depth}，请检查是否存在自引用的嵌套类型".to_string());
        recursion_errors.insert("en-US".to_string(), "Nesting depth {depth} exceeded while mapping '{type_name}', check for self-referential nested types".to_string());
        recursion_errors.insert("ja-JP".to_string(), "モデル '{type_name}' のネスト深度が上限 {depth} を超えました".to_string());
        translations.insert("error.recursion_limit".to_string(), recursion_errors);

        // 日期输入格式互斥
        let mut date_input_conflict = HashMap::new();
        date_input_conflict.insert("zh-CN".to_string(), "日期输入格式只能设置一次: 已设置 {current}，又尝试设置 {next}".to_string());
        date_input_conflict.insert("en-US".to_string(), "Date input format may only be set once: {current} already set, got {next}".to_string());
        date_input_conflict.insert("ja-JP".to_string(), "日付入力形式は一度だけ設定できます: {current} の後に {next}".to_string());
        translations.insert("error.date_input_conflict".to_string(), date_input_conflict);

        // 日期格式串为空
        let mut date_pattern_empty = HashMap::new();
        date_pattern_empty.insert("zh-CN".to_string(), "日期格式字符串不能为空".to_string());
        date_pattern_empty.insert("en-US".to_string(), "Date pattern must not be empty".to_string());
        date_pattern_empty.insert("ja-JP".to_string(), "日付パターンは空にできません".to_string());
        translations.insert("error.date_pattern_empty".to_string(), date_pattern_empty);

        // 嵌套深度配置无效
        let mut invalid_max_depth = HashMap::new();
        invalid_max_depth.insert("zh-CN".to_string(), "max_depth必须大于0".to_string());
        invalid_max_depth.insert("en-US".to_string(), "max_depth must be greater than 0".to_string());
        invalid_max_depth.insert("ja-JP".to_string(), "max_depth は 0 より大きくなければなりません".to_string());
        translations.insert("error.invalid_max_depth".to_string(), invalid_max_depth);

        // 配置文件解析失败
        let mut profile_parse = HashMap::new();
        profile_parse.insert("zh-CN".to_string(), "解析映射配置文件失败: {message}".to_string());
        profile_parse.insert("en-US".to_string(), "Failed to parse mapping profile: {message}".to_string());
        profile_parse.insert("ja-JP".to_string(), "マッピング設定ファイルの解析に失敗しました: {message}".to_string());
        translations.insert("error.profile_parse".to_string(), profile_parse);

        // 未知的日期输入格式名
        let mut unknown_date_input = HashMap::new();
        unknown_date_input.insert("zh-CN".to_string(), "未知的日期输入格式: {name}".to_string());
        unknown_date_input.insert("en-US".to_string(), "Unknown date input format: {name}".to_string());
        unknown_date_input.insert("ja-JP".to_string(), "不明な日付入力形式: {name}".to_string());
        translations.insert("error.unknown_date_input".to_string(), unknown_date_input);

        // 注册所有翻译
        register_translations(translations);
    }

    /// 初始化错误消息多语言支持
    pub fn init() {
        Self::register_all_translations();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}


/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{t, tf, set_language, current_language};
