//! 視訊通話能力位元遮罩

use serde::{Deserialize, Serialize};
use std::fmt;

/// 電信子系統回報的視訊通話能力
///
/// 位元意義：
/// - `ENABLED`：目前 SIM 支援視訊通話，不論聯絡人的 carrier presence 欄位為何
/// - `PRESENCE`：可透過 carrier presence 欄位判斷聯絡人是否可視訊通話
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VideoCapabilities(u32);

impl VideoCapabilities {
    /// 不支援視訊通話
    pub const DISABLED: VideoCapabilities = VideoCapabilities(0);

    /// 視訊通話已啟用
    pub const ENABLED: VideoCapabilities = VideoCapabilities(0b01);

    /// 視訊通話 presence 可信
    pub const PRESENCE: VideoCapabilities = VideoCapabilities(0b10);

    /// 從原始位元遮罩創建（未知位元保留）
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// 取得原始位元遮罩
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// 是否包含指定的全部位元
    pub const fn contains(self, other: VideoCapabilities) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// 視訊通話是否啟用
    pub const fn is_video_enabled(self) -> bool {
        self.contains(Self::ENABLED)
    }

    /// 是否可依賴 presence 判斷
    pub const fn can_rely_on_presence(self) -> bool {
        self.contains(Self::PRESENCE)
    }
}

impl std::ops::BitOr for VideoCapabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for VideoCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04b}", self.0)
    }
}
