//! 平台變體
//!
//! 帳戶相關查詢的實作依平台層級而不同，建構快取時選定一個變體。

use calllog_core::{AccountColor, PhoneAccountHandle, PhoneAccountSource, VariantKind};

use crate::lollipop_mr1::LollipopMr1Lookups;
use crate::pass_through::PassThroughLookups;

/// 帳戶查詢介面
pub trait AccountLookups {
    /// 號碼是否為帳戶設定的語音信箱號碼
    fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool;

    /// 帳戶顯示名稱
    fn account_label(&self, handle: &PhoneAccountHandle) -> String;

    /// 帳戶顯示顏色
    fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor;

    /// 帳戶外撥通話是否可附帶主旨
    fn does_account_support_call_subject(&self, handle: &PhoneAccountHandle) -> bool;

    /// 清除變體自身的快取
    fn reset(&self);

    /// 向帳戶來源實際發出的查詢次數
    fn source_lookups(&self) -> u64;
}

/// 已選定的變體
pub enum CacheVariant<A> {
    PassThrough(PassThroughLookups<A>),
    LollipopMr1(LollipopMr1Lookups<A>),
}

impl<A: PhoneAccountSource> CacheVariant<A> {
    /// 建立指定種類的變體
    pub fn new(kind: VariantKind, source: A) -> Self {
        match kind {
            VariantKind::PassThrough => CacheVariant::PassThrough(PassThroughLookups::new(source)),
            VariantKind::LollipopMr1 => CacheVariant::LollipopMr1(LollipopMr1Lookups::new(source)),
        }
    }

    pub fn kind(&self) -> VariantKind {
        match self {
            CacheVariant::PassThrough(_) => VariantKind::PassThrough,
            CacheVariant::LollipopMr1(_) => VariantKind::LollipopMr1,
        }
    }

    fn lookups(&self) -> &dyn AccountLookups {
        match self {
            CacheVariant::PassThrough(inner) => inner,
            CacheVariant::LollipopMr1(inner) => inner,
        }
    }
}

impl<A: PhoneAccountSource> AccountLookups for CacheVariant<A> {
    fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool {
        self.lookups().is_voicemail_number(handle, number)
    }

    fn account_label(&self, handle: &PhoneAccountHandle) -> String {
        self.lookups().account_label(handle)
    }

    fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor {
        self.lookups().account_color(handle)
    }

    fn does_account_support_call_subject(&self, handle: &PhoneAccountHandle) -> bool {
        self.lookups().does_account_support_call_subject(handle)
    }

    fn reset(&self) {
        self.lookups().reset()
    }

    fn source_lookups(&self) -> u64 {
        self.lookups().source_lookups()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTelecom;

    #[test]
    fn test_variant_kind() {
        let telecom = FakeTelecom::default();

        let variant = CacheVariant::new(VariantKind::PassThrough, &telecom);
        assert_eq!(variant.kind(), VariantKind::PassThrough);

        let variant = CacheVariant::new(VariantKind::LollipopMr1, &telecom);
        assert_eq!(variant.kind(), VariantKind::LollipopMr1);
    }

    #[test]
    fn test_variant_delegation() {
        let telecom = FakeTelecom::default();
        let sim1 = PhoneAccountHandle::new("telephony", "sim-1");
        let sim2 = PhoneAccountHandle::new("telephony", "sim-2");

        for kind in VariantKind::ALL {
            let variant = CacheVariant::new(kind, &telecom);

            assert!(variant.is_voicemail_number(&sim1, "*86"));
            assert!(!variant.is_voicemail_number(&sim2, "*86"));
            assert_eq!(variant.account_label(&sim2), telecom.account_label(&sim2));
            assert_eq!(variant.account_color(&sim1), telecom.account_color(&sim1));
            assert_eq!(variant.account_color(&sim2), AccountColor::NO_HIGHLIGHT);
            assert!(variant.does_account_support_call_subject(&sim1));
            assert!(!variant.does_account_support_call_subject(&sim2));
        }
    }
}
