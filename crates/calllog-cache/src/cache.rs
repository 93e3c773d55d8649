//! 通話紀錄快取

use calllog_core::{
    AccountColor, CacheConfig, PhoneAccountHandle, PhoneAccountSource, PlatformLevel,
    VariantKind, VideoCapabilityProvider,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::variant::{AccountLookups, CacheVariant};
use crate::video::VideoAvailabilityCell;

/// 快取統計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// 使用中的變體
    pub variant: VariantKind,

    /// 視訊能力查詢次數
    pub video_fetches: u64,

    /// 重置次數
    pub resets: u64,

    /// 帳戶來源查詢次數
    pub account_lookups: u64,

    /// 最近一次視訊能力查詢時間
    pub last_fetch_at: Option<DateTime<Utc>>,

    /// 最近一次重置時間
    pub last_reset_at: Option<DateTime<Utc>>,
}

/// 通話紀錄快取
///
/// 記住對電信子系統的跨程序查詢結果，減少列表繪製時的查詢次數。
/// 視訊通話能力在本層快取；帳戶查詢交給建構時選定的平台變體。
///
/// 所有快取內容在 [`reset`](Self::reset) 前都不會失效，呼叫端須在每次列表資料
/// 重新載入時重置。
pub struct CallLogCache<V, A> {
    video: VideoAvailabilityCell<V>,
    variant: CacheVariant<A>,
}

impl<V, A> CallLogCache<V, A>
where
    V: VideoCapabilityProvider,
    A: PhoneAccountSource,
{
    /// 依平台層級選擇能力最高的變體
    pub fn for_platform(level: PlatformLevel, video: V, accounts: A) -> Self {
        let kind = VariantKind::select(level);
        tracing::info!("平台 {} 選用快取變體: {}", level, kind);
        Self::with_variant(kind, video, accounts)
    }

    /// 依配置建立快取
    pub fn from_config(config: &CacheConfig, video: V, accounts: A) -> calllog_core::Result<Self> {
        let kind = config.variant()?;
        tracing::info!(
            "平台 {} 選用快取變體: {}{}",
            config.platform_level,
            kind,
            if config.variant_override.is_some() { "（強制）" } else { "" }
        );
        Ok(Self::with_variant(kind, video, accounts))
    }

    fn with_variant(kind: VariantKind, video: V, accounts: A) -> Self {
        Self {
            video: VideoAvailabilityCell::new(video),
            variant: CacheVariant::new(kind, accounts),
        }
    }

    /// 使用中的變體
    pub fn variant_kind(&self) -> VariantKind {
        self.variant.kind()
    }

    /// 目前 SIM 是否支援視訊通話，不論聯絡人的 carrier presence 欄位為何
    pub fn is_video_enabled(&self) -> bool {
        self.video.is_video_enabled()
    }

    /// 目前 SIM 是否可透過 carrier presence 欄位判斷視訊通話能力
    pub fn can_rely_on_video_presence(&self) -> bool {
        self.video.can_rely_on_video_presence()
    }

    /// 清除所有快取內容
    ///
    /// 另外會遞增 [`CacheStats::resets`] 並記錄 `last_reset_at`；這兩個統計欄位
    /// 不影響任何查詢結果。
    pub fn reset(&self) {
        self.video.reset();
        self.variant.reset();
    }

    /// 號碼是否為帳戶設定的語音信箱號碼
    pub fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool {
        self.variant.is_voicemail_number(handle, number)
    }

    /// 帳戶顯示名稱
    pub fn account_label(&self, handle: &PhoneAccountHandle) -> String {
        self.variant.account_label(handle)
    }

    /// 帳戶顯示顏色
    pub fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor {
        self.variant.account_color(handle)
    }

    /// 帳戶外撥通話是否可附帶主旨（帶備註通話）
    pub fn does_account_support_call_subject(&self, handle: &PhoneAccountHandle) -> bool {
        self.variant.does_account_support_call_subject(handle)
    }

    /// 取得統計
    pub fn stats(&self) -> CacheStats {
        let (video_fetches, resets, last_fetch_at, last_reset_at) = self.video.with_counters(|c| {
            (c.fetches, c.resets, c.last_fetch_at, c.last_reset_at)
        });

        CacheStats {
            variant: self.variant.kind(),
            video_fetches,
            resets,
            account_lookups: self.variant.source_lookups(),
            last_fetch_at,
            last_reset_at,
        }
    }
}
