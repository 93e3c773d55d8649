//! 列表重新載入時的快取重置

use calllog_core::{PhoneAccountSource, VideoCapabilityProvider};
use std::sync::Arc;

use crate::CallLogCache;

/// 可重置的快取
pub trait Resettable {
    fn reset(&self);
}

impl<V, A> Resettable for CallLogCache<V, A>
where
    V: VideoCapabilityProvider,
    A: PhoneAccountSource,
{
    fn reset(&self) {
        CallLogCache::reset(self)
    }
}

impl<T: Resettable + ?Sized> Resettable for &T {
    fn reset(&self) {
        (**self).reset()
    }
}

impl<T: Resettable + ?Sized> Resettable for Arc<T> {
    fn reset(&self) {
        (**self).reset()
    }
}

/// 列表資料的重新載入紀錄
///
/// 電信能力可能在兩次載入之間改變，所以每次載入都要先重置快取，
/// 列表再以新的世代重新繪製。
pub struct ListRefresher<C> {
    cache: C,
    generation: u64,
}

impl<C: Resettable> ListRefresher<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            generation: 0,
        }
    }

    /// 列表資料重新載入：重置快取並回傳新的世代
    pub fn on_data_reloaded(&mut self) -> u64 {
        self.cache.reset();
        self.generation += 1;
        tracing::debug!("列表重新載入，世代 {}", self.generation);
        self.generation
    }

    /// 目前世代（尚未重新載入時為 0）
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}
