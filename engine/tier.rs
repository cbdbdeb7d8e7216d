use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of the high-recall band.
pub const HIGH_RECALL_CEILING: f64 = 0.4;
/// Upper bound (inclusive) of the balanced band.
pub const BALANCED_CEILING: f64 = 0.6;

/// Qualitative reading of the recall/false-positive tradeoff implied by a threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    /// Catches more fraud at the cost of more false alarms.
    HighRecall,
    Balanced,
    /// Fewer false alarms at the cost of more missed fraud.
    LowFalsePositive,
}

/// A metric headline as shown on the dashboard, with an optional delta caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TrendDescriptor {
    pub value: &'static str,
    pub delta: Option<&'static str>,
}

/// The two operational metric descriptors shown alongside a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub tier: RiskTier,
    pub fraud_recall_trend: TrendDescriptor,
    pub false_positive_trend: TrendDescriptor,
}

/// Guidance displayed next to the threshold control.
pub const TRADEOFF_GUIDANCE: &str = "Lowering the threshold increases fraud detection (recall) but may raise false positives.\n\
Raising the threshold reduces false alerts but increases the risk of missed fraud.";

/// Maps a threshold onto its tier. Total over all inputs; NaN lands in the top band.
pub fn tier_for(threshold: f64) -> RiskTier {
    if threshold <= HIGH_RECALL_CEILING {
        RiskTier::HighRecall
    } else if threshold <= BALANCED_CEILING {
        RiskTier::Balanced
    } else {
        RiskTier::LowFalsePositive
    }
}

pub fn summary_for(threshold: f64) -> TierSummary {
    tier_for(threshold).summary()
}

impl RiskTier {
    pub fn describe(self) -> &'static str {
        match self {
            Self::HighRecall => "high-recall",
            Self::Balanced => "balanced",
            Self::LowFalsePositive => "low-false-positive",
        }
    }

    pub fn fraud_recall_trend(self) -> TrendDescriptor {
        match self {
            Self::HighRecall => TrendDescriptor {
                value: "↑ High",
                delta: Some("Fewer missed fraud cases"),
            },
            Self::Balanced => TrendDescriptor {
                value: "Balanced",
                delta: None,
            },
            Self::LowFalsePositive => TrendDescriptor {
                value: "↓ Lower",
                delta: None,
            },
        }
    }

    pub fn false_positive_trend(self) -> TrendDescriptor {
        let value = match self {
            Self::HighRecall => "↑ Increased",
            Self::Balanced => "Balanced",
            Self::LowFalsePositive => "↓ Reduced",
        };
        TrendDescriptor { value, delta: None }
    }

    pub fn summary(self) -> TierSummary {
        TierSummary {
            tier: self,
            fraud_recall_trend: self.fraud_recall_trend(),
            false_positive_trend: self.false_positive_trend(),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl fmt::Display for TrendDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.delta {
            Some(delta) => write!(f, "{} ({delta})", self.value),
            None => f.write_str(self.value),
        }
    }
}
