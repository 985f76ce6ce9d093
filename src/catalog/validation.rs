use super::types::Catalog;
use std::collections::HashSet;

/// Validate catalog contents at load time.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (i, factor) in catalog.risks.iter().enumerate() {
        if factor.id.trim().is_empty() {
            errors.push(format!("risks[{}].id: must not be empty", i));
        } else if !seen.insert(factor.id.as_str()) {
            errors.push(format!("risks[{}].id: duplicate id '{}'", i, factor.id));
        }
        if !factor.risk.is_finite() || factor.risk <= 0.0 {
            errors.push(format!(
                "risks[{}].risk: must be a positive number, got {}",
                i, factor.risk
            ));
        }
    }

    // Prevention ids live in their own namespace
    let mut seen = HashSet::new();
    for (i, factor) in catalog.preventions.iter().enumerate() {
        if factor.id.trim().is_empty() {
            errors.push(format!("preventions[{}].id: must not be empty", i));
        } else if !seen.insert(factor.id.as_str()) {
            errors.push(format!(
                "preventions[{}].id: duplicate id '{}'",
                i, factor.id
            ));
        }
        if !factor.effect.is_finite() || factor.effect <= 0.0 {
            errors.push(format!(
                "preventions[{}].effect: must be a positive number, got {}",
                i, factor.effect
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Entries that break the weight convention: risk factors below 1.0 or
/// preventions above 1.0. Scoring still works, but adding a factor is no
/// longer guaranteed to move the score in the expected direction.
pub fn convention_warnings(catalog: &Catalog) -> Vec<String> {
    let risks = catalog
        .risks
        .iter()
        .enumerate()
        .filter(|(_, f)| f.risk < 1.0)
        .map(|(i, f)| {
            format!(
                "risks[{}].risk: '{}' has weight {} below 1.0 and lowers risk",
                i, f.id, f.risk
            )
        });
    let preventions = catalog
        .preventions
        .iter()
        .enumerate()
        .filter(|(_, f)| f.effect > 1.0)
        .map(|(i, f)| {
            format!(
                "preventions[{}].effect: '{}' has effect {} above 1.0 and raises risk",
                i, f.id, f.effect
            )
        });
    risks.chain(preventions).collect()
}
