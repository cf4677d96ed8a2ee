use crate::models::school::SchoolId;
use thiserror::Error;

/// Reasons the catalog refuses a mutation. The store is left unchanged in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("school {0} does not exist")]
    UnknownSchool(SchoolId),
    #[error("no identifiers left for a new {0}")]
    IdsExhausted(&'static str),
}

impl CatalogError {
    pub(crate) fn required(field: &'static str) -> Self {
        CatalogError::InvalidInput {
            field,
            reason: "a value is required".to_string(),
        }
    }
}
