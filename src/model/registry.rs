//! 模型元数据注册表
//!
//! 每个模型类型的 `ModelMeta` 只生成一次，按 `TypeId` 全局缓存

use crate::debug_log;
use crate::model::field_types::ModelMeta;
use crate::model::traits::Model;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::TypeId;
use std::sync::Arc;

static MODEL_META_CACHE: Lazy<DashMap<TypeId, Arc<ModelMeta>>> = Lazy::new(DashMap::new);

/// 获取模型元数据（首次调用时生成并缓存）
pub fn meta_of<M: Model>() -> Arc<ModelMeta> {
    let type_id = TypeId::of::<M>();
    if let Some(meta) = MODEL_META_CACHE.get(&type_id) {
        return meta.value().clone();
    }

    // 不持有分片锁时生成
    let meta = Arc::new(M::meta());
    debug_log!("✅ 缓存模型元数据: {} ({} 个字段)", meta.type_name, meta.fields.len());
    MODEL_META_CACHE.entry(type_id).or_insert(meta).value().clone()
}

/// 模型元数据是否已缓存
pub fn is_cached<M: Model>() -> bool {
    MODEL_META_CACHE.contains_key(&TypeId::of::<M>())
}
