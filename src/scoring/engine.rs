use crate::catalog::Catalog;
use std::collections::BTreeSet;

/// Product of the risk weights of every selected id, starting from 1.0.
/// Ids missing from the catalog contribute the neutral 1.0.
pub fn compute_risk_score(catalog: &Catalog, selected: &BTreeSet<String>) -> f64 {
    selected
        .iter()
        .fold(1.0, |acc, id| acc * catalog.risk_weight(id))
}

/// Product of the effects of every selected prevention id, starting from 1.0.
/// Ids missing from the catalog contribute the neutral 1.0.
pub fn compute_prevention_score(catalog: &Catalog, selected: &BTreeSet<String>) -> f64 {
    selected
        .iter()
        .fold(1.0, |acc, id| acc * catalog.prevention_effect(id))
}

/// Risk after applying the selected interventions.
pub fn compute_combined_score(risk_score: f64, prevention_score: f64) -> f64 {
    risk_score * prevention_score
}

/// Overall reduction from the selected interventions, in percent with one
/// decimal. Negative when the prevention score exceeds 1.0.
pub fn risk_reduction_percent(prevention_score: f64) -> f64 {
    round_to((1.0 - prevention_score) * 100.0, 1)
}

/// Reduction from a single intervention, in whole percent.
pub fn per_factor_reduction_percent(effect: f64) -> f64 {
    round_to((1.0 - effect) * 100.0, 0)
}

/// Round through exact-decimal formatting rather than scale-round-divide,
/// so the value always prints the same as formatting the raw percentage.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let catalog = Catalog::default();
        assert_eq!(compute_risk_score(&catalog, &BTreeSet::new()), 1.0);
        assert_eq!(compute_prevention_score(&catalog, &BTreeSet::new()), 1.0);
    }

    #[test]
    fn test_depression_and_head_injury() {
        let catalog = Catalog::default();
        let score = compute_risk_score(&catalog, &ids(&["depression", "headInjury"]));
        assert!((score - 3.74).abs() < 1e-9);
    }

    #[test]
    fn test_smoking_cessation_prevention() {
        let catalog = Catalog::default();
        let score = compute_prevention_score(&catalog, &ids(&["smokingCessation"]));
        assert_eq!(score, 0.88);
        assert_eq!(risk_reduction_percent(score), 12.0);
    }

    #[test]
    fn test_combined_smoking_and_exercise() {
        let catalog = Catalog::default();
        let risk = compute_risk_score(&catalog, &ids(&["smoking"]));
        let prevention = compute_prevention_score(&catalog, &ids(&["exercise"]));
        let combined = compute_combined_score(risk, prevention);
        assert_eq!(combined, 1.3 * 0.72);
        assert!((combined - 0.936).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_ids_are_neutral() {
        let catalog = Catalog::default();
        assert_eq!(compute_risk_score(&catalog, &ids(&["not-a-real-id"])), 1.0);
        assert_eq!(
            compute_risk_score(&catalog, &ids(&["smoking", "nope", "also-nope", ""])),
            compute_risk_score(&catalog, &ids(&["smoking"]))
        );
        assert_eq!(
            compute_prevention_score(&catalog, &ids(&["exercise", "nope"])),
            0.72
        );
    }

    #[test]
    fn test_risk_ids_do_not_leak_into_prevention() {
        let catalog = Catalog::default();
        // "depression" only exists in the risk catalog
        assert_eq!(compute_prevention_score(&catalog, &ids(&["depression"])), 1.0);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let catalog = Catalog::default();
        let forward = ids(&["education", "diabetes", "vision", "highLDL", "alcohol"]);
        let mut reversed = BTreeSet::new();
        for id in ["alcohol", "highLDL", "vision", "diabetes", "education"] {
            reversed.insert(id.to_string());
        }
        assert_eq!(
            compute_risk_score(&catalog, &forward).to_bits(),
            compute_risk_score(&catalog, &reversed).to_bits()
        );
    }

    #[test]
    fn test_adding_risk_never_decreases_score() {
        let catalog = Catalog::default();
        let mut selected = BTreeSet::new();
        let mut previous = compute_risk_score(&catalog, &selected);
        for factor in &catalog.risks {
            selected.insert(factor.id.clone());
            let current = compute_risk_score(&catalog, &selected);
            assert!(current >= previous, "{} decreased the score", factor.id);
            previous = current;
        }
    }

    #[test]
    fn test_adding_prevention_never_increases_score() {
        let catalog = Catalog::default();
        let mut selected = BTreeSet::new();
        let mut previous = compute_prevention_score(&catalog, &selected);
        for factor in &catalog.preventions {
            selected.insert(factor.id.clone());
            let current = compute_prevention_score(&catalog, &selected);
            assert!(current <= previous, "{} increased the score", factor.id);
            previous = current;
        }
    }

    #[test]
    fn test_repeat_calls_are_bit_identical() {
        let catalog = Catalog::default();
        let selected = ids(&["depression", "smoking", "obesity"]);
        let first = compute_risk_score(&catalog, &selected);
        let second = compute_risk_score(&catalog, &selected);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_reduction_percent_rounding() {
        assert_eq!(risk_reduction_percent(1.0), 0.0);
        assert_eq!(risk_reduction_percent(0.72), 28.0);
        assert_eq!(risk_reduction_percent(0.56 * 0.62), 65.3);
        assert_eq!(risk_reduction_percent(1.1), -10.0);
    }

    #[test]
    fn test_reduction_percent_matches_raw_formatting() {
        let catalog = Catalog::default();
        let cases = [
            (["depressionTreatment", "midlifeHypertension", "vitaminC"], "58.1"),
            (["elderlyWeightLoss", "hypotension", "midlifeHypertension"], "50.0"),
        ];
        for (selected, expected) in cases {
            let score = compute_prevention_score(&catalog, &ids(&selected));
            assert_eq!(format!("{:.1}", risk_reduction_percent(score)), expected);
            assert_eq!(format!("{:.1}", (1.0 - score) * 100.0), expected);
        }
    }

    #[test]
    fn test_reduction_percent_agrees_with_raw_for_all_pairs() {
        let catalog = Catalog::default();
        for a in &catalog.preventions {
            for b in &catalog.preventions {
                let score = compute_prevention_score(&catalog, &ids(&[a.id.as_str(), b.id.as_str()]));
                assert_eq!(
                    format!("{:.1}", risk_reduction_percent(score)),
                    format!("{:.1}", (1.0 - score) * 100.0)
                );
            }
            assert_eq!(
                format!("{:.0}", per_factor_reduction_percent(a.effect)),
                format!("{:.0}", (1.0 - a.effect) * 100.0)
            );
        }
    }

    #[test]
    fn test_per_factor_reduction_percent() {
        assert_eq!(per_factor_reduction_percent(0.56), 44.0);
        assert_eq!(per_factor_reduction_percent(0.88), 12.0);
        assert_eq!(per_factor_reduction_percent(1.0), 0.0);
    }
}
