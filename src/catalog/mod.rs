pub mod builtin;
pub mod loader;
pub mod types;
pub mod validation;

pub use builtin::builtin_catalog;
pub use loader::{check_catalog, load_catalog, resolve_catalog, save_catalog, CatalogError, LoadedCatalog};
pub use types::{Catalog, PreventionFactor, RiskFactor};
pub use validation::{convention_warnings, validate_catalog};
