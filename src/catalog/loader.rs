use super::types::Catalog;
use super::validation::{convention_warnings, validate_catalog};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid catalog {}:\n  - {}", .path.display(), .errors.join("\n  - "))]
    Invalid { path: PathBuf, errors: Vec<String> },
}

/// A catalog ready for scoring, plus any convention warnings found while loading it.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub warnings: Vec<String>,
}

/// Load and validate a catalog from a YAML file.
///
/// Structural problems (duplicate ids, non-positive weights) always fail.
/// Convention problems (risk < 1.0, effect > 1.0) are returned as warnings,
/// or fail the load when `strict` is set.
pub fn load_catalog(path: &Path, strict: bool) -> Result<LoadedCatalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog: Catalog =
        serde_saphyr::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    check_catalog(catalog, strict).map_err(|errors| CatalogError::Invalid {
        path: path.to_path_buf(),
        errors,
    })
}

/// Run structural validation and the weight-convention check on an in-memory catalog.
pub fn check_catalog(catalog: Catalog, strict: bool) -> Result<LoadedCatalog, Vec<String>> {
    validate_catalog(&catalog)?;

    let warnings = convention_warnings(&catalog);
    if strict && !warnings.is_empty() {
        return Err(warnings);
    }

    Ok(LoadedCatalog { catalog, warnings })
}

/// Resolve the catalog for this run: the custom file if one is configured,
/// otherwise the built-in tables.
pub fn resolve_catalog(path: Option<&Path>, strict: bool) -> Result<LoadedCatalog, CatalogError> {
    match path {
        Some(path) => {
            let loaded = load_catalog(path, strict)?;
            tracing::debug!(
                path = %path.display(),
                risks = loaded.catalog.risks.len(),
                preventions = loaded.catalog.preventions.len(),
                "loaded custom catalog"
            );
            for warning in &loaded.warnings {
                tracing::warn!("catalog convention: {}", warning);
            }
            Ok(loaded)
        }
        None => {
            tracing::debug!("using built-in catalog");
            Ok(LoadedCatalog {
                catalog: Catalog::default(),
                warnings: Vec::new(),
            })
        }
    }
}

/// Write a catalog as YAML atomically, so a half-written file never replaces a good one.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let yaml = serde_saphyr::to_string(catalog).context("Failed to serialize catalog")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write catalog to {}", path.display()))?;
    file.commit().context("Failed to save catalog")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("dementia_risk_test_catalog_roundtrip.yaml");
        let _ = fs::remove_file(&temp_path);

        let catalog = Catalog::default();
        save_catalog(&temp_path, &catalog).unwrap();

        let loaded = load_catalog(&temp_path, true).unwrap();
        assert_eq!(loaded.catalog, catalog);
        assert!(loaded.warnings.is_empty());

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_path = env::temp_dir().join("dementia_risk_test_catalog_missing.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_catalog(&temp_path, false).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_path = env::temp_dir().join("dementia_risk_test_catalog_bad_yaml.yaml");
        fs::write(&temp_path, "risks: [ { id: a, risk: oops").unwrap();

        let err = load_catalog(&temp_path, false).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_reports_every_problem() {
        let temp_path = env::temp_dir().join("dementia_risk_test_catalog_invalid.yaml");
        let yaml = r#"
risks:
  - { id: a, label: A, risk: 1.5 }
  - { id: a, label: A again, risk: 0.0 }
"#;
        fs::write(&temp_path, yaml).unwrap();

        match load_catalog(&temp_path, false).unwrap_err() {
            CatalogError::Invalid { errors, .. } => assert_eq!(errors.len(), 2),
            other => panic!("unexpected error: {}", other),
        }

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_convention_violation_warns_or_fails() {
        let catalog = Catalog {
            risks: vec![],
            preventions: vec![crate::catalog::PreventionFactor {
                id: "odd".to_string(),
                label: "odd".to_string(),
                effect: 1.2,
            }],
        };

        let loaded = check_catalog(catalog.clone(), false).unwrap();
        assert_eq!(loaded.warnings.len(), 1);

        let errors = check_catalog(catalog, true).unwrap_err();
        assert!(errors[0].contains("preventions[0].effect"));
    }

    #[test]
    fn test_resolve_without_path_uses_builtin() {
        let loaded = resolve_catalog(None, true).unwrap();
        assert_eq!(loaded.catalog, Catalog::default());
        assert!(loaded.warnings.is_empty());
    }
}
