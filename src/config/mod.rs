//! # 配置管理模块
//!
//! 映射选项、构建器以及可从文件加载的映射配置

pub mod builders;
pub mod core;

pub use builders::MapOptionsBuilder;
pub use core::{MapOptions, MappingProfile, DEFAULT_MAX_DEPTH};
