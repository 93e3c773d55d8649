//! 外部電信子系統介面
//!
//! 快取只消費這些介面；跨程序查詢本身由實作者負責。

use std::sync::Arc;

use crate::{AccountColor, PhoneAccountHandle, VideoCapabilities};

/// 視訊通話能力來源
pub trait VideoCapabilityProvider {
    /// 查詢目前的視訊通話能力位元遮罩
    fn video_calling_availability(&self) -> VideoCapabilities;
}

/// 電話帳戶查詢來源
pub trait PhoneAccountSource {
    /// 號碼是否為此帳戶設定的語音信箱號碼
    fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool;

    /// 帳戶的顯示名稱
    fn account_label(&self, handle: &PhoneAccountHandle) -> String;

    /// 帳戶的顯示顏色
    fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor;

    /// 外撥通話是否可附帶主旨
    fn account_supports_call_subject(&self, handle: &PhoneAccountHandle) -> bool;
}

impl<T: VideoCapabilityProvider + ?Sized> VideoCapabilityProvider for Arc<T> {
    fn video_calling_availability(&self) -> VideoCapabilities {
        (**self).video_calling_availability()
    }
}

impl<T: VideoCapabilityProvider + ?Sized> VideoCapabilityProvider for &T {
    fn video_calling_availability(&self) -> VideoCapabilities {
        (**self).video_calling_availability()
    }
}

impl<T: PhoneAccountSource + ?Sized> PhoneAccountSource for Arc<T> {
    fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool {
        (**self).is_voicemail_number(handle, number)
    }

    fn account_label(&self, handle: &PhoneAccountHandle) -> String {
        (**self).account_label(handle)
    }

    fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor {
        (**self).account_color(handle)
    }

    fn account_supports_call_subject(&self, handle: &PhoneAccountHandle) -> bool {
        (**self).account_supports_call_subject(handle)
    }
}

impl<T: PhoneAccountSource + ?Sized> PhoneAccountSource for &T {
    fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool {
        (**self).is_voicemail_number(handle, number)
    }

    fn account_label(&self, handle: &PhoneAccountHandle) -> String {
        (**self).account_label(handle)
    }

    fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor {
        (**self).account_color(handle)
    }

    fn account_supports_call_subject(&self, handle: &PhoneAccountHandle) -> bool {
        (**self).account_supports_call_subject(handle)
    }
}

/// 固定能力值，適用於不支援視訊通話查詢的環境
impl VideoCapabilityProvider for VideoCapabilities {
    fn video_calling_availability(&self) -> VideoCapabilities {
        *self
    }
}
