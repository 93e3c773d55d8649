//! 帳戶查詢結果備忘

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 以帳戶為鍵的查詢結果表
///
/// 計算時持有鎖，同一個鍵在清除前只會向外部來源查詢一次。
/// `fetch` 不可再呼叫同一個備忘表，否則會在同一執行緒上重複加鎖而死結或 panic。
/// 命中時以借用的鍵查詢，只有未命中才會複製鍵。
pub struct AccountMemo<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> AccountMemo<K, V> {
    /// 創建空的備忘表
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// 取得已記錄的值，沒有時以 `fetch` 查詢並記錄
    ///
    /// `fetch` panic 時不會留下記錄，下次呼叫會重新查詢。
    pub fn get_or_insert_with<Q>(&self, key: &Q, fetch: impl FnOnce() -> V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let mut entries = lock(&self.entries);
        if let Some(value) = entries.get(key) {
            return value.clone();
        }
        let value = fetch();
        entries.insert(key.to_owned(), value.clone());
        value
    }

    /// 檢查是否已記錄
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        lock(&self.entries).contains_key(key)
    }

    /// 清除所有記錄
    pub fn clear(&self) {
        lock(&self.entries).clear();
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for AccountMemo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// 以（帳戶, 號碼）為鍵的查詢結果表
///
/// 與 [`AccountMemo`] 相同：計算時持有鎖，`fetch` 不可再呼叫同一個備忘表。
pub struct NumberMemo<K, V> {
    entries: Mutex<HashMap<K, HashMap<String, V>>>,
}

impl<K: Eq + Hash + Clone, V: Clone> NumberMemo<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// 取得已記錄的值，沒有時以 `fetch` 查詢並記錄
    pub fn get_or_insert_with(&self, account: &K, number: &str, fetch: impl FnOnce() -> V) -> V {
        let mut entries = lock(&self.entries);
        if let Some(value) = entries.get(account).and_then(|numbers| numbers.get(number)) {
            return value.clone();
        }
        let value = fetch();
        match entries.get_mut(account) {
            Some(numbers) => {
                numbers.insert(number.to_string(), value.clone());
            }
            None => {
                let numbers = HashMap::from([(number.to_string(), value.clone())]);
                entries.insert(account.clone(), numbers);
            }
        }
        value
    }

    pub fn clear(&self) {
        lock(&self.entries).clear();
    }

    /// 記錄總數（所有帳戶的號碼數加總）
    pub fn len(&self) -> usize {
        lock(&self.entries).values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Default for NumberMemo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_fetch_once_per_key() {
        let memo: AccountMemo<String, u32> = AccountMemo::new();
        let calls = Cell::new(0);

        let fetch = || {
            calls.set(calls.get() + 1);
            42
        };

        assert_eq!(memo.get_or_insert_with("sim-1", fetch), 42);
        assert_eq!(memo.get_or_insert_with("sim-1", || unreachable!()), 42);
        assert_eq!(calls.get(), 1);
        assert!(memo.contains("sim-1"));
        assert!(!memo.contains("sim-2"));
    }

    #[test]
    fn test_clear() {
        let memo: AccountMemo<String, bool> = AccountMemo::default();
        memo.get_or_insert_with("sim-1", || true);
        memo.get_or_insert_with("sim-2", || false);
        assert_eq!(memo.len(), 2);

        memo.clear();
        assert!(memo.is_empty());
        assert!(!memo.get_or_insert_with("sim-1", || false));
    }

    #[test]
    fn test_panicking_fetch_leaves_no_entry() {
        let memo: AccountMemo<String, u32> = AccountMemo::new();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            memo.get_or_insert_with("sim-1", || panic!("帳戶來源失敗"))
        }));
        assert!(result.is_err());

        // 鎖已中毒，但仍可繼續使用且沒有殘留記錄
        assert!(memo.is_empty());
        assert_eq!(memo.get_or_insert_with("sim-1", || 7), 7);
        assert_eq!(memo.get_or_insert_with("sim-1", || unreachable!()), 7);
    }

    #[test]
    fn test_number_memo_keyed_by_account_and_number() {
        let memo: NumberMemo<String, bool> = NumberMemo::new();
        let calls = Cell::new(0);
        let fetch = |answer: bool| {
            calls.set(calls.get() + 1);
            answer
        };

        let sim1 = "sim-1".to_string();
        let sim2 = "sim-2".to_string();
        assert!(memo.get_or_insert_with(&sim1, "*86", || fetch(true)));
        assert!(memo.get_or_insert_with(&sim1, "*86", || unreachable!()));
        assert!(!memo.get_or_insert_with(&sim1, "5551234", || fetch(false)));
        assert!(!memo.get_or_insert_with(&sim2, "*86", || fetch(false)));
        assert_eq!(calls.get(), 3);
        assert_eq!(memo.len(), 3);

        memo.clear();
        assert!(memo.is_empty());
    }

    #[test]
    fn test_number_memo_panicking_fetch() {
        let memo: NumberMemo<String, bool> = NumberMemo::default();
        let sim1 = "sim-1".to_string();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            memo.get_or_insert_with(&sim1, "*86", || panic!("帳戶來源失敗"))
        }));
        assert!(result.is_err());

        assert!(memo.is_empty());
        assert!(memo.get_or_insert_with(&sim1, "*86", || true));
    }
}
