//! # Call Log Core
//!
//! 通話紀錄快取的核心資料模型、外部介面與配置

pub mod account;
pub mod capability;
pub mod config;
pub mod platform;
pub mod source;

// Re-export 主要類型
pub use account::{AccountColor, PhoneAccountHandle};
pub use capability::VideoCapabilities;
pub use config::CacheConfig;
pub use platform::{PlatformLevel, VariantKind};
pub use source::{PhoneAccountSource, VideoCapabilityProvider};

/// 通話紀錄快取錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CallLogError {
    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("平台層級 {level} 不支援 {variant} 變體")]
    UnsupportedVariant {
        variant: VariantKind,
        level: PlatformLevel,
    },
}

pub type Result<T> = std::result::Result<T, CallLogError>;
