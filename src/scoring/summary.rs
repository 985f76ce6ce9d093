use super::engine::{
    compute_combined_score, compute_prevention_score, compute_risk_score, risk_reduction_percent,
};
use super::tier::{classify_risk, RiskTier};
use crate::catalog::Catalog;
use crate::selection::{FactorKind, Selection};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub kind: &'static str, // "risk" or "prevention"
    pub id: String,
    pub label: String,
    pub weight: f64,
    pub before: f64, // Running score before this factor
    pub after: f64,  // Running score after this factor
}

/// Everything a renderer shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub risk_score: f64,
    pub prevention_score: f64,
    pub combined_score: f64,
    pub risk_tier: RiskTier,
    pub combined_tier: RiskTier,
    pub risk_reduction_percent: f64,
    pub breakdown: Vec<FactorContribution>,
    pub advisories: Vec<Advisory>,
}

/// Hints shown under the summary when the selection suggests a next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Advisory {
    NoSelection,
    ConsiderPrevention,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::NoSelection => {
                "リスク要因または予防対策を選択してシミュレーションを開始してください"
            }
            Advisory::ConsiderPrevention => {
                "リスクが高まっています。予防対策タブから対策を検討してください"
            }
        }
    }
}

pub const DISCLAIMER: &str = "※ このシミュレーターは研究データに基づいていますが、医療的判断の代わりにはなりません。詳細な評価や相談は医療機関にご相談ください。";

/// Score a selection against a catalog.
pub fn evaluate(catalog: &Catalog, selection: &Selection) -> ScoreSummary {
    let risk_score = compute_risk_score(catalog, &selection.risks);
    let prevention_score = compute_prevention_score(catalog, &selection.preventions);
    let combined_score = compute_combined_score(risk_score, prevention_score);

    ScoreSummary {
        risk_score,
        prevention_score,
        combined_score,
        risk_tier: classify_risk(risk_score),
        combined_tier: classify_risk(combined_score),
        risk_reduction_percent: risk_reduction_percent(prevention_score),
        breakdown: breakdown(catalog, selection),
        advisories: advisories(selection, combined_score),
    }
}

/// Selected factors in catalog order, risks first, with the running
/// combined score before and after each one. Unknown ids do not appear.
pub fn breakdown(catalog: &Catalog, selection: &Selection) -> Vec<FactorContribution> {
    let mut running = 1.0;
    let mut factors = Vec::new();

    for factor in &catalog.risks {
        if selection.is_selected(FactorKind::Risk, &factor.id) {
            let before = running;
            running *= factor.risk;
            factors.push(FactorContribution {
                kind: "risk",
                id: factor.id.clone(),
                label: factor.label.clone(),
                weight: factor.risk,
                before,
                after: running,
            });
        }
    }

    for factor in &catalog.preventions {
        if selection.is_selected(FactorKind::Prevention, &factor.id) {
            let before = running;
            running *= factor.effect;
            factors.push(FactorContribution {
                kind: "prevention",
                id: factor.id.clone(),
                label: factor.label.clone(),
                weight: factor.effect,
                before,
                after: running,
            });
        }
    }

    factors
}

pub fn advisories(selection: &Selection, combined_score: f64) -> Vec<Advisory> {
    let mut out = Vec::new();
    if selection.is_empty() {
        out.push(Advisory::NoSelection);
    }
    if combined_score > 1.0 && selection.preventions.is_empty() {
        out.push(Advisory::ConsiderPrevention);
    }
    out
}
