use serde::Serialize;
use std::fmt;

/// Discrete risk band a score falls into, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Standard,
    SlightlyElevated,
    Moderate,
    High,
}

impl RiskTier {
    /// Display label shown on the tier badge
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "高リスク",
            RiskTier::Moderate => "中リスク",
            RiskTier::SlightlyElevated => "やや高リスク",
            RiskTier::Standard => "標準リスク",
        }
    }

    /// Stable machine-readable name, also the key renderers style by
    pub fn style_tier(&self) -> &'static str {
        match self {
            RiskTier::High => "high",
            RiskTier::Moderate => "moderate",
            RiskTier::SlightlyElevated => "slightly-elevated",
            RiskTier::Standard => "standard",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a score. Evaluated top-down, first match wins; each lower
/// bound is inclusive. NaN and negative scores fall through to `Standard`.
pub fn classify_risk(score: f64) -> RiskTier {
    if score >= 3.0 {
        RiskTier::High
    } else if score >= 2.0 {
        RiskTier::Moderate
    } else if score >= 1.5 {
        RiskTier::SlightlyElevated
    } else {
        RiskTier::Standard
    }
}
