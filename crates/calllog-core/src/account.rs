//! 電話帳戶模型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 電話帳戶識別碼
///
/// 由電信子系統辨識的通話帳戶（SIM 卡或 VoIP 服務）。內容對快取而言是不透明的，
/// 只用於查詢與作為快取鍵。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneAccountHandle {
    /// 提供此帳戶的元件名稱
    pub component_name: String,

    /// 元件內的帳戶ID
    pub id: String,
}

impl PhoneAccountHandle {
    /// 創建新的帳戶識別碼
    pub fn new(component_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for PhoneAccountHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.component_name, self.id)
    }
}

/// 帳戶顯示顏色（ARGB）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AccountColor(pub u32);

impl AccountColor {
    /// 帳戶沒有設定醒目顏色
    pub const NO_HIGHLIGHT: AccountColor = AccountColor(0);

    /// 從 ARGB 值創建
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// 取得 ARGB 值
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// 是否有醒目顏色
    pub fn is_highlighted(self) -> bool {
        self != Self::NO_HIGHLIGHT
    }
}
