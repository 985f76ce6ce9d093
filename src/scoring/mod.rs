pub mod engine;
pub mod summary;
pub mod tier;

pub use engine::{
    compute_combined_score, compute_prevention_score, compute_risk_score,
    per_factor_reduction_percent, risk_reduction_percent,
};
pub use summary::{evaluate, Advisory, FactorContribution, ScoreSummary, DISCLAIMER};
pub use tier::{classify_risk, RiskTier};
