use crate::domain::model::RoundingPolicy;

pub const DEFAULT_OUTPERFORM_THRESHOLD: f64 = 1.05;
pub const DEFAULT_UNDERPERFORM_THRESHOLD: f64 = 0.95;

pub trait ConfigProvider: Send + Sync {
    fn rounding_policy(&self) -> RoundingPolicy;

    /// RGI strictly above this is reported as outperforming.
    fn outperform_threshold(&self) -> f64 {
        DEFAULT_OUTPERFORM_THRESHOLD
    }

    /// RGI strictly below this is reported as underperforming.
    fn underperform_threshold(&self) -> f64 {
        DEFAULT_UNDERPERFORM_THRESHOLD
    }
}

/// Settings with every value at its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSettings;

impl ConfigProvider for DefaultSettings {
    fn rounding_policy(&self) -> RoundingPolicy {
        RoundingPolicy::default()
    }
}
