//! 快取配置模型

use serde::{Deserialize, Serialize};

use crate::{CallLogError, PlatformLevel, Result, VariantKind};

/// 通話紀錄快取配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 執行中的平台 API 層級
    pub platform_level: PlatformLevel,

    /// 強制使用的變體（未設定時依平台層級自動選擇）
    #[serde(default)]
    pub variant_override: Option<VariantKind>,
}

impl CacheConfig {
    /// 創建新的快取配置
    pub fn new(platform_level: PlatformLevel) -> Self {
        Self {
            platform_level,
            variant_override: None,
        }
    }

    /// 建構器模式：強制使用指定變體
    ///
    /// # 範例
    /// ```
    /// # use calllog_core::{CacheConfig, PlatformLevel, VariantKind};
    /// let config = CacheConfig::new(PlatformLevel::M)
    ///     .with_variant_override(VariantKind::PassThrough); // 停用帳戶查詢快取
    /// assert_eq!(config.variant().unwrap(), VariantKind::PassThrough);
    /// ```
    pub fn with_variant_override(mut self, variant: VariantKind) -> Self {
        self.variant_override = Some(variant);
        self
    }

    /// 從 JSON 載入配置
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CacheConfig = serde_json::from_str(json)
            .map_err(|e| CallLogError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.platform_level.level() == 0 {
            return Err(CallLogError::InvalidConfig(
                "platform_level 必須大於 0".to_string(),
            ));
        }

        if let Some(variant) = self.variant_override {
            if !variant.is_supported_at(self.platform_level) {
                return Err(CallLogError::UnsupportedVariant {
                    variant,
                    level: self.platform_level,
                });
            }
        }

        Ok(())
    }

    /// 解析最終使用的變體
    pub fn variant(&self) -> Result<VariantKind> {
        self.validate()?;
        Ok(self
            .variant_override
            .unwrap_or_else(|| VariantKind::select(self.platform_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_config() {
        let config = CacheConfig::new(PlatformLevel::LOLLIPOP_MR1);

        assert_eq!(config.platform_level, PlatformLevel::LOLLIPOP_MR1);
        assert_eq!(config.variant_override, None);
        assert_eq!(config.variant().unwrap(), VariantKind::LollipopMr1);
    }

    #[test]
    fn test_config_override() {
        let config = CacheConfig::new(PlatformLevel::M)
            .with_variant_override(VariantKind::PassThrough);

        assert_eq!(config.variant().unwrap(), VariantKind::PassThrough);
    }

    #[test]
    fn test_unsupported_override() {
        let config = CacheConfig::new(PlatformLevel::LOLLIPOP)
            .with_variant_override(VariantKind::LollipopMr1);

        let err = config.variant().unwrap_err();
        assert!(matches!(
            err,
            CallLogError::UnsupportedVariant {
                variant: VariantKind::LollipopMr1,
                level: PlatformLevel::LOLLIPOP,
            }
        ));
    }

    #[test]
    fn test_from_json() {
        let config = CacheConfig::from_json(r#"{"platform_level": 23}"#).unwrap();
        assert_eq!(config.platform_level, PlatformLevel::M);
        assert_eq!(config.variant().unwrap(), VariantKind::LollipopMr1);

        let config = CacheConfig::from_json(
            r#"{"platform_level": 22, "variant_override": "pass_through"}"#,
        )
        .unwrap();
        assert_eq!(config.variant_override, Some(VariantKind::PassThrough));
    }

    #[test]
    fn test_from_json_invalid() {
        // 缺少必要欄位
        assert!(matches!(
            CacheConfig::from_json(r#"{"variant_override": "pass_through"}"#),
            Err(CallLogError::InvalidConfig(_))
        ));

        // 平台層級為 0
        assert!(matches!(
            CacheConfig::from_json(r#"{"platform_level": 0}"#),
            Err(CallLogError::InvalidConfig(_))
        ));

        // 變體不支援此層級
        assert!(matches!(
            CacheConfig::from_json(r#"{"platform_level": 21, "variant_override": "lollipop_mr1"}"#),
            Err(CallLogError::UnsupportedVariant { .. })
        ));
    }
}
