//! 平台層級與快取變體選擇

use serde::{Deserialize, Serialize};
use std::fmt;

/// 平台 API 層級
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformLevel(pub u32);

impl PlatformLevel {
    pub const LOLLIPOP: PlatformLevel = PlatformLevel(21);
    pub const LOLLIPOP_MR1: PlatformLevel = PlatformLevel(22);
    pub const M: PlatformLevel = PlatformLevel(23);

    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    pub const fn level(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlatformLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API {}", self.0)
    }
}

/// 快取變體
///
/// 封閉集合：每個快取實例在建構時選定一個變體，之後不再切換。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    /// 直接轉發帳戶查詢，不做快取
    PassThrough,

    /// 每個週期內快取帳戶查詢結果
    LollipopMr1,
}

impl VariantKind {
    /// 所有變體，能力由低到高
    pub const ALL: [VariantKind; 2] = [VariantKind::PassThrough, VariantKind::LollipopMr1];

    /// 此變體需要的最低平台層級
    pub const fn min_level(self) -> PlatformLevel {
        match self {
            VariantKind::PassThrough => PlatformLevel(0),
            VariantKind::LollipopMr1 => PlatformLevel::LOLLIPOP_MR1,
        }
    }

    /// 此變體在指定平台層級是否可用
    pub fn is_supported_at(self, level: PlatformLevel) -> bool {
        level >= self.min_level()
    }

    /// 選擇指定平台層級可用的最高能力變體
    pub fn select(level: PlatformLevel) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|kind| kind.is_supported_at(level))
            .unwrap_or(VariantKind::PassThrough)
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantKind::PassThrough => write!(f, "pass_through"),
            VariantKind::LollipopMr1 => write!(f, "lollipop_mr1"),
        }
    }
}
