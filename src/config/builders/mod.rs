//! # 配置构建器模块
//!
//! 提供映射选项的构建器实现，支持链式调用和严格验证

pub mod map_options_builder;

pub use map_options_builder::MapOptionsBuilder;
