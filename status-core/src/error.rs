use thiserror::Error;

/// Domain errors surfaced by the store. Every fallible operation fails
/// before mutating any state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
}

impl StoreError {
    pub fn service_not_found() -> Self {
        StoreError::NotFound("Service")
    }

    pub fn incident_not_found() -> Self {
        StoreError::NotFound("Incident")
    }

    pub fn duplicate_service_name() -> Self {
        StoreError::Conflict("Service with this name already exists".into())
    }
}
