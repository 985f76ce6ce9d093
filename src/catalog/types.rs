use serde::{Deserialize, Serialize};

/// A condition that raises dementia risk by a multiplicative weight.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RiskFactor {
    pub id: String,
    pub label: String,
    /// 1.0 means no effect; values above 1.0 increase risk
    pub risk: f64,
}

/// An intervention that lowers dementia risk by a multiplicative weight.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PreventionFactor {
    pub id: String,
    pub label: String,
    /// 1.0 means no effect; lower is more protective
    pub effect: f64,
}

impl PreventionFactor {
    /// Risk reduction this intervention alone provides, in whole percent.
    pub fn reduction_percent(&self) -> f64 {
        crate::scoring::per_factor_reduction_percent(self.effect)
    }
}

/// The two factor lists a session scores against.
///
/// Order is display order. Ids are unique within each list, but the same id
/// may appear in both (`exercise` does).
///
/// Example YAML:
/// ```yaml
/// risks:
///   - { id: depression, label: うつ病, risk: 2.2 }
/// preventions:
///   - { id: exercise, label: 運動, effect: 0.72 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub risks: Vec<RiskFactor>,
    #[serde(default)]
    pub preventions: Vec<PreventionFactor>,
}

impl Default for Catalog {
    fn default() -> Self {
        super::builtin::builtin_catalog()
    }
}

impl Catalog {
    pub fn risk(&self, id: &str) -> Option<&RiskFactor> {
        self.risks.iter().find(|f| f.id == id)
    }

    pub fn prevention(&self, id: &str) -> Option<&PreventionFactor> {
        self.preventions.iter().find(|f| f.id == id)
    }

    /// Weight for a risk id, or the neutral 1.0 when the id is not in the catalog.
    pub fn risk_weight(&self, id: &str) -> f64 {
        self.risk(id).map_or(1.0, |f| f.risk)
    }

    /// Effect for a prevention id, or the neutral 1.0 when the id is not in the catalog.
    pub fn prevention_effect(&self, id: &str) -> f64 {
        self.prevention(id).map_or(1.0, |f| f.effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_ids() {
        let catalog = Catalog::default();
        assert_eq!(catalog.risk("depression").unwrap().risk, 2.2);
        assert_eq!(catalog.prevention("smokingCessation").unwrap().effect, 0.88);
    }

    #[test]
    fn test_unknown_id_is_neutral() {
        let catalog = Catalog::default();
        assert!(catalog.risk("not-a-real-id").is_none());
        assert_eq!(catalog.risk_weight("not-a-real-id"), 1.0);
        assert_eq!(catalog.prevention_effect("not-a-real-id"), 1.0);
    }

    #[test]
    fn test_same_id_in_both_lists_resolves_separately() {
        let catalog = Catalog::default();
        assert_eq!(catalog.risk_weight("exercise"), 1.2);
        assert_eq!(catalog.prevention_effect("exercise"), 0.72);
    }

    #[test]
    fn test_reduction_percent_per_factor() {
        let catalog = Catalog::default();
        assert_eq!(catalog.prevention("intellectual").unwrap().reduction_percent(), 44.0);
        assert_eq!(catalog.prevention("pm25Reduction").unwrap().reduction_percent(), 17.0);
    }

    #[test]
    fn test_catalog_yaml_parse() {
        let yaml = r#"
risks:
  - id: depression
    label: うつ病
    risk: 2.2
preventions:
  - { id: exercise, label: 運動, effect: 0.72 }
"#;
        let catalog: Catalog = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(catalog.risks.len(), 1);
        assert_eq!(catalog.preventions[0].id, "exercise");
    }

    #[test]
    fn test_catalog_yaml_missing_sections_default_empty() {
        let catalog: Catalog = serde_saphyr::from_str("{}").unwrap();
        assert!(catalog.risks.is_empty());
        assert!(catalog.preventions.is_empty());
    }

    #[test]
    fn test_catalog_yaml_rejects_unknown_fields() {
        let yaml = r#"
risks:
  - { id: a, label: A, risk: 1.5, weight: 2 }
"#;
        assert!(serde_saphyr::from_str::<Catalog>(yaml).is_err());
    }
}
