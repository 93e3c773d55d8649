//! 直接轉發的變體（LOLLIPOP 及更早）

use calllog_core::{AccountColor, PhoneAccountHandle, PhoneAccountSource};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::variant::AccountLookups;

/// 每次都向帳戶來源查詢，不保留任何結果
pub struct PassThroughLookups<A> {
    source: A,
    lookups: AtomicU64,
}

impl<A: PhoneAccountSource> PassThroughLookups<A> {
    pub fn new(source: A) -> Self {
        Self {
            source,
            lookups: AtomicU64::new(0),
        }
    }

    fn count(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }
}

impl<A: PhoneAccountSource> AccountLookups for PassThroughLookups<A> {
    fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool {
        self.count();
        self.source.is_voicemail_number(handle, number)
    }

    fn account_label(&self, handle: &PhoneAccountHandle) -> String {
        self.count();
        self.source.account_label(handle)
    }

    fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor {
        self.count();
        self.source.account_color(handle)
    }

    fn does_account_support_call_subject(&self, handle: &PhoneAccountHandle) -> bool {
        self.count();
        self.source.account_supports_call_subject(handle)
    }

    fn reset(&self) {}

    fn source_lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }
}
