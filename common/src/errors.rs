use crate::models::Platform;

/// Error taxonomy shared by the catalog core and its callers.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A candidate record failed a field check. Carries the offending
    /// field and the reason; validation is fail-fast, so there is
    /// exactly one.
    Validation { field: &'static str, message: String },
    /// No record matches the given id (or query, for the latest feed).
    NotFound(String),
    /// Duplicate title on create or update.
    Conflict(String),
    /// A record's price table has no entry for the requested platform.
    MissingPrice(Platform),
    /// Underlying persistence failure, not further classified.
    Store(String),
}

impl CatalogError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CatalogError::Validation { field, message: message.into() }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Validation { field, message } => {
                write!(f, "Validation failed on '{}': {}", field, message)
            }
            CatalogError::NotFound(what) => write!(f, "Not found: {}", what),
            CatalogError::Conflict(title) => {
                write!(f, "A game titled '{}' already exists", title)
            }
            CatalogError::MissingPrice(platform) => {
                write!(f, "Missing price for platform '{}'", platform)
            }
            CatalogError::Store(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}
