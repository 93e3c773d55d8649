//! # Call Log
//!
//! 通話紀錄列表的電信查詢快取
//!
//! ```
//! use calllog::{CallLogCache, PlatformLevel, VideoCapabilities};
//! # use calllog::{AccountColor, PhoneAccountHandle, PhoneAccountSource};
//! # struct NoAccounts;
//! # impl PhoneAccountSource for NoAccounts {
//! #     fn is_voicemail_number(&self, _: &PhoneAccountHandle, _: &str) -> bool { false }
//! #     fn account_label(&self, _: &PhoneAccountHandle) -> String { String::new() }
//! #     fn account_color(&self, _: &PhoneAccountHandle) -> AccountColor {
//! #         AccountColor::NO_HIGHLIGHT
//! #     }
//! #     fn account_supports_call_subject(&self, _: &PhoneAccountHandle) -> bool { false }
//! # }
//! let cache =
//!     CallLogCache::for_platform(PlatformLevel::M, VideoCapabilities::ENABLED, NoAccounts);
//! assert!(cache.is_video_enabled());
//! assert!(!cache.can_rely_on_video_presence());
//! ```

pub use calllog_cache::*;
pub use calllog_core::{
    AccountColor, CacheConfig, CallLogError, PhoneAccountHandle, PhoneAccountSource,
    PlatformLevel, Result, VariantKind, VideoCapabilities, VideoCapabilityProvider,
};
