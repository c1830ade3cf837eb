use crate::domain::model::RoundingPolicy;
use crate::domain::ports::{
    ConfigProvider, DEFAULT_OUTPERFORM_THRESHOLD, DEFAULT_UNDERPERFORM_THRESHOLD,
};
use crate::utils::error::{RevparError, Result};
use crate::utils::validation::{validate_finite, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PRECISION: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevparConfig {
    #[serde(default)]
    pub rounding: RoundingPolicy,
    #[serde(default)]
    pub assessment: AssessmentConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    #[serde(default = "default_outperform_threshold")]
    pub outperform_threshold: f64,
    #[serde(default = "default_underperform_threshold")]
    pub underperform_threshold: f64,
}

fn default_outperform_threshold() -> f64 {
    DEFAULT_OUTPERFORM_THRESHOLD
}

fn default_underperform_threshold() -> f64 {
    DEFAULT_UNDERPERFORM_THRESHOLD
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            outperform_threshold: DEFAULT_OUTPERFORM_THRESHOLD,
            underperform_threshold: DEFAULT_UNDERPERFORM_THRESHOLD,
        }
    }
}

impl RevparConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RevparError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RevparError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_range("rounding.precision", self.rounding.precision, 0, MAX_PRECISION)?;

        let assessment = &self.assessment;
        validate_finite("assessment.outperform_threshold", assessment.outperform_threshold)?;
        validate_finite("assessment.underperform_threshold", assessment.underperform_threshold)?;

        if assessment.underperform_threshold > assessment.outperform_threshold {
            return Err(RevparError::ConfigValidationError {
                field: "assessment.underperform_threshold".to_string(),
                message: format!(
                    "underperform_threshold ({}) must not exceed outperform_threshold ({})",
                    assessment.underperform_threshold, assessment.outperform_threshold
                ),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for RevparConfig {
    fn rounding_policy(&self) -> RoundingPolicy {
        self.rounding
    }

    fn outperform_threshold(&self) -> f64 {
        self.assessment.outperform_threshold
    }

    fn underperform_threshold(&self) -> f64 {
        self.assessment.underperform_threshold
    }
}

impl Validate for RevparConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[rounding]
precision = 3
bankers_rounding = true

[assessment]
outperform_threshold = 1.10
underperform_threshold = 0.90
"#;

        let config = RevparConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.rounding.precision, 3);
        assert!(config.rounding.bankers_rounding);
        assert_eq!(config.outperform_threshold(), 1.10);
        assert_eq!(config.underperform_threshold(), 0.90);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RevparConfig::from_toml_str("").unwrap();

        assert_eq!(config, RevparConfig::default());
        assert_eq!(config.rounding_policy(), RoundingPolicy::CURRENCY);
        assert_eq!(config.outperform_threshold(), DEFAULT_OUTPERFORM_THRESHOLD);
        assert_eq!(config.underperform_threshold(), DEFAULT_UNDERPERFORM_THRESHOLD);
    }

    #[test]
    fn test_partial_assessment_section() {
        let toml_content = r#"
[assessment]
outperform_threshold = 1.2
"#;

        let config = RevparConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.outperform_threshold(), 1.2);
        assert_eq!(config.underperform_threshold(), DEFAULT_UNDERPERFORM_THRESHOLD);
    }

    #[test]
    fn test_partial_rounding_section() {
        let config = RevparConfig::from_toml_str("[rounding]\nbankers_rounding = true\n").unwrap();
        assert_eq!(config.rounding.precision, RoundingPolicy::CURRENCY.precision);
        assert!(config.rounding.bankers_rounding);
        assert!(config.validate().is_ok());

        let precision_only = RevparConfig::from_toml_str("[rounding]\nprecision = 3\n").unwrap();
        assert_eq!(precision_only.rounding.precision, 3);
        assert!(!precision_only.rounding.bankers_rounding);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = RevparConfig::from_toml_str("[rounding\nprecision = 2").unwrap_err();
        assert!(matches!(err, RevparError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let precision_too_high = RevparConfig::from_toml_str("[rounding]\nprecision = 12").unwrap();
        assert!(precision_too_high.validate().is_err());

        let inverted = RevparConfig::from_toml_str(
            "[assessment]\noutperform_threshold = 0.9\nunderperform_threshold = 1.1",
        )
        .unwrap();
        assert!(inverted.validate().is_err());

        let not_finite = RevparConfig {
            assessment: AssessmentConfig {
                outperform_threshold: f64::NAN,
                underperform_threshold: 0.95,
            },
            ..RevparConfig::default()
        };
        assert!(not_finite.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[rounding]\nprecision = 4\n")
            .unwrap();

        let config = RevparConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.rounding.precision, 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RevparConfig::from_file("/nonexistent/revpar.toml").unwrap_err();
        assert!(matches!(err, RevparError::IoError(_)));
    }
}
