//! LOLLIPOP_MR1 及之後的變體
//!
//! 每個快取週期內，每個帳戶（語音信箱查詢則為帳戶加號碼）只向帳戶來源查詢一次。

use calllog_core::{AccountColor, PhoneAccountHandle, PhoneAccountSource};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::account_memo::{AccountMemo, NumberMemo};
use crate::variant::AccountLookups;

/// 帳戶查詢結果的週期快取
pub struct LollipopMr1Lookups<A> {
    source: A,

    /// 語音信箱判斷（帳戶, 號碼）
    voicemail: NumberMemo<PhoneAccountHandle, bool>,

    /// 帳戶顯示名稱
    labels: AccountMemo<PhoneAccountHandle, String>,

    /// 帳戶顯示顏色
    colors: AccountMemo<PhoneAccountHandle, AccountColor>,

    /// 是否支援通話主旨
    call_subject: AccountMemo<PhoneAccountHandle, bool>,

    lookups: AtomicU64,
}

impl<A: PhoneAccountSource> LollipopMr1Lookups<A> {
    pub fn new(source: A) -> Self {
        Self {
            source,
            voicemail: NumberMemo::new(),
            labels: AccountMemo::new(),
            colors: AccountMemo::new(),
            call_subject: AccountMemo::new(),
            lookups: AtomicU64::new(0),
        }
    }

    /// 目前快取的項目總數
    pub fn cached_entries(&self) -> usize {
        self.voicemail.len() + self.labels.len() + self.colors.len() + self.call_subject.len()
    }

    fn count(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }
}

impl<A: PhoneAccountSource> AccountLookups for LollipopMr1Lookups<A> {
    fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool {
        if number.is_empty() {
            return false;
        }

        self.voicemail.get_or_insert_with(handle, number, || {
            self.count();
            tracing::trace!("查詢語音信箱號碼: {}", handle);
            self.source.is_voicemail_number(handle, number)
        })
    }

    fn account_label(&self, handle: &PhoneAccountHandle) -> String {
        self.labels.get_or_insert_with(handle, || {
            self.count();
            self.source.account_label(handle)
        })
    }

    fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor {
        self.colors.get_or_insert_with(handle, || {
            self.count();
            self.source.account_color(handle)
        })
    }

    fn does_account_support_call_subject(&self, handle: &PhoneAccountHandle) -> bool {
        self.call_subject.get_or_insert_with(handle, || {
            self.count();
            self.source.account_supports_call_subject(handle)
        })
    }

    fn reset(&self) {
        tracing::debug!("清除帳戶查詢快取: {} 筆", self.cached_entries());
        self.voicemail.clear();
        self.labels.clear();
        self.colors.clear();
        self.call_subject.clear();
    }

    fn source_lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTelecom;

    fn sim(id: &str) -> PhoneAccountHandle {
        PhoneAccountHandle::new("telephony", id)
    }

    #[test]
    fn test_memoizes_per_account() {
        let telecom = FakeTelecom::default();
        let lookups = LollipopMr1Lookups::new(&telecom);

        assert_eq!(lookups.account_label(&sim("sim-1")), "Label sim-1");
        assert_eq!(lookups.account_label(&sim("sim-1")), "Label sim-1");
        assert_eq!(telecom.account_queries(), 1);

        // 不同帳戶各自查詢
        assert_eq!(lookups.account_label(&sim("sim-2")), "Label sim-2");
        assert_eq!(telecom.account_queries(), 2);

        assert_eq!(lookups.account_color(&sim("sim-1")), AccountColor::from_argb(0xFF00_AA00));
        assert_eq!(lookups.account_color(&sim("sim-1")), AccountColor::from_argb(0xFF00_AA00));
        assert!(lookups.does_account_support_call_subject(&sim("sim-1")));
        assert!(lookups.does_account_support_call_subject(&sim("sim-1")));
        assert_eq!(telecom.account_queries(), 4);
        assert_eq!(lookups.source_lookups(), 4);
        assert_eq!(lookups.cached_entries(), 4);
    }

    #[test]
    fn test_voicemail_keyed_by_number() {
        let telecom = FakeTelecom::default();
        let lookups = LollipopMr1Lookups::new(&telecom);

        assert!(lookups.is_voicemail_number(&sim("sim-1"), "*86"));
        assert!(lookups.is_voicemail_number(&sim("sim-1"), "*86"));
        assert!(!lookups.is_voicemail_number(&sim("sim-1"), "5551234"));
        assert!(!lookups.is_voicemail_number(&sim("sim-2"), "*86"));
        assert_eq!(telecom.account_queries(), 3);
    }

    #[test]
    fn test_empty_number_skips_source() {
        let telecom = FakeTelecom::default();
        let lookups = LollipopMr1Lookups::new(&telecom);

        assert!(!lookups.is_voicemail_number(&sim("sim-1"), ""));
        assert_eq!(telecom.account_queries(), 0);
        assert_eq!(lookups.cached_entries(), 0);
    }

    #[test]
    fn test_reset_clears_all_memos() {
        let telecom = FakeTelecom::default();
        let lookups = LollipopMr1Lookups::new(&telecom);

        lookups.is_voicemail_number(&sim("sim-1"), "*86");
        lookups.account_label(&sim("sim-1"));
        lookups.account_color(&sim("sim-1"));
        lookups.does_account_support_call_subject(&sim("sim-1"));
        assert_eq!(telecom.account_queries(), 4);

        lookups.reset();
        assert_eq!(lookups.cached_entries(), 0);

        lookups.account_label(&sim("sim-1"));
        assert_eq!(telecom.account_queries(), 5);
    }
}
