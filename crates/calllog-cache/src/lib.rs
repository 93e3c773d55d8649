//! # Call Log Cache
//!
//! 快取通話紀錄列表繪製時對電信子系統的跨程序查詢結果，
//! 避免每一列都重複查詢語音信箱號碼、視訊通話能力與帳戶資訊。
//!
//! 呼叫端（列表 adapter）負責在每次列表資料重新載入時呼叫 [`CallLogCache::reset`]，
//! 見 [`refresh::ListRefresher`]。

pub mod account_memo;
pub mod cache;
pub mod lollipop_mr1;
pub mod pass_through;
pub mod refresh;
pub mod variant;
pub mod video;

// Re-export 主要類型
pub use cache::{CacheStats, CallLogCache};
pub use refresh::{ListRefresher, Resettable};
pub use variant::{AccountLookups, CacheVariant};
pub use video::{VideoAvailabilityCell, VideoSnapshot};
