//! 通話紀錄列表重新載入示例
//!
//! 執行：`RUST_LOG=debug cargo run --example refresh_cycle`

use calllog::{
    AccountColor, CacheConfig, CallLogCache, ListRefresher, PhoneAccountHandle,
    PhoneAccountSource, PlatformLevel, VideoCapabilities, VideoCapabilityProvider,
};
use std::cell::Cell;
use tracing_subscriber::EnvFilter;

/// 模擬的電信子系統，每次載入後視訊能力會改變
struct DemoTelecom {
    video_bits: Cell<u32>,
}

impl VideoCapabilityProvider for DemoTelecom {
    fn video_calling_availability(&self) -> VideoCapabilities {
        tracing::info!("跨程序查詢：視訊通話能力");
        VideoCapabilities::from_bits(self.video_bits.get())
    }
}

impl PhoneAccountSource for DemoTelecom {
    fn is_voicemail_number(&self, handle: &PhoneAccountHandle, number: &str) -> bool {
        tracing::info!("跨程序查詢：語音信箱號碼 {}", handle);
        number == "*86"
    }

    fn account_label(&self, handle: &PhoneAccountHandle) -> String {
        tracing::info!("跨程序查詢：帳戶名稱 {}", handle);
        format!("SIM {}", handle.id)
    }

    fn account_color(&self, handle: &PhoneAccountHandle) -> AccountColor {
        tracing::info!("跨程序查詢：帳戶顏色 {}", handle);
        AccountColor::from_argb(0xFF4C_AF50)
    }

    fn account_supports_call_subject(&self, handle: &PhoneAccountHandle) -> bool {
        tracing::info!("跨程序查詢：通話主旨支援 {}", handle);
        true
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== 通話紀錄快取示例 ===\n");

    let telecom = DemoTelecom {
        video_bits: Cell::new(VideoCapabilities::ENABLED.bits()),
    };
    let config = CacheConfig::new(PlatformLevel::M);
    let cache = CallLogCache::from_config(&config, &telecom, &telecom)?;
    let mut refresher = ListRefresher::new(&cache);

    let rows = [
        (PhoneAccountHandle::new("telephony", "1"), "*86"),
        (PhoneAccountHandle::new("telephony", "1"), "+15550100"),
        (PhoneAccountHandle::new("telephony", "2"), "+15550101"),
        (PhoneAccountHandle::new("telephony", "1"), "+15550102"),
    ];

    for round in 0..2 {
        let generation = refresher.on_data_reloaded();
        println!("第 {} 次載入（世代 {}）:", round + 1, generation);

        for (handle, number) in &rows {
            println!(
                "  - {} [{}] 語音信箱: {}, 視訊: {}, 顏色: {:#010x}, 主旨: {}",
                number,
                cache.account_label(handle),
                cache.is_voicemail_number(handle, number),
                cache.is_video_enabled(),
                cache.account_color(handle).argb(),
                cache.does_account_support_call_subject(handle),
            );
        }

        // 兩次載入之間電信能力改變
        telecom
            .video_bits
            .set((VideoCapabilities::ENABLED | VideoCapabilities::PRESENCE).bits());
    }

    println!("\n統計: {}", format_stats(&cache.stats()));

    Ok(())
}

fn format_stats(stats: &calllog::CacheStats) -> String {
    format!(
        "variant={} video_fetches={} resets={} account_lookups={}",
        stats.variant, stats.video_fetches, stats.resets, stats.account_lookups
    )
}
