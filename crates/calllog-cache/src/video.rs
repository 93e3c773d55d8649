//! 視訊通話能力快取

use calllog_core::{VideoCapabilities, VideoCapabilityProvider};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 一次查詢得到的視訊通話能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoSnapshot {
    /// 能力位元遮罩
    pub capabilities: VideoCapabilities,

    /// 查詢時間
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub(crate) struct VideoCounters {
    pub fetches: u64,
    pub resets: u64,
    pub last_fetch_at: Option<DateTime<Utc>>,
    pub last_reset_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct VideoState {
    snapshot: Option<VideoSnapshot>,
    counters: VideoCounters,
}

/// 可重置的視訊通話能力快取
///
/// 兩個衍生查詢共用同一次位元遮罩查詢：不論先呼叫哪一個，之後到下次
/// [`reset`](Self::reset) 之前都不會再查詢外部來源。
///
/// 「已查詢」標記與位元遮罩存放在同一個 mutex 內的 `Option` 中，
/// 讀取端不會看到不一致的組合。查詢外部來源時持有鎖，
/// 因此同一週期內並行的第一次呼叫只會查詢一次。
/// 能力來源不可在查詢中再呼叫同一個快取，否則會在同一執行緒上重複加鎖而死結或 panic。
/// 能力來源 panic 時不會寫入快取，鎖中毒後仍可繼續使用，下次呼叫會重新查詢。
pub struct VideoAvailabilityCell<P> {
    provider: P,
    state: Mutex<VideoState>,
}

impl<P: VideoCapabilityProvider> VideoAvailabilityCell<P> {
    /// 創建空的快取
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: Mutex::new(VideoState::default()),
        }
    }

    /// 取得能力位元遮罩，必要時查詢外部來源
    pub fn capabilities(&self) -> VideoCapabilities {
        let mut state = self.lock();
        if let Some(snapshot) = state.snapshot {
            tracing::trace!("視訊能力快取命中: {}", snapshot.capabilities);
            return snapshot.capabilities;
        }

        let capabilities = self.provider.video_calling_availability();
        let fetched_at = Utc::now();
        tracing::debug!("查詢視訊通話能力: {}", capabilities);

        state.snapshot = Some(VideoSnapshot {
            capabilities,
            fetched_at,
        });
        state.counters.fetches += 1;
        state.counters.last_fetch_at = Some(fetched_at);
        capabilities
    }

    /// 目前 SIM 是否支援視訊通話
    pub fn is_video_enabled(&self) -> bool {
        self.capabilities().is_video_enabled()
    }

    /// 是否可依 carrier presence 判斷聯絡人的視訊通話能力
    pub fn can_rely_on_video_presence(&self) -> bool {
        self.capabilities().can_rely_on_presence()
    }

    /// 目前快取的值（不觸發查詢）
    pub fn snapshot(&self) -> Option<VideoSnapshot> {
        self.lock().snapshot
    }

    /// 清除快取，下次查詢會重新向外部來源取得
    ///
    /// 除了清除快取值，也會遞增重置計數並記錄 `last_reset_at`，供統計使用。
    /// 對查詢結果而言重複呼叫沒有差別。
    pub fn reset(&self) {
        let mut state = self.lock();
        state.snapshot = None;
        state.counters.resets += 1;
        state.counters.last_reset_at = Some(Utc::now());
        tracing::debug!("重置視訊能力快取");
    }

    pub(crate) fn with_counters<R>(&self, f: impl FnOnce(&VideoCounters) -> R) -> R {
        f(&self.lock().counters)
    }

    fn lock(&self) -> MutexGuard<'_, VideoState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
