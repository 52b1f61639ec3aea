use crate::types::Id;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Id },

    /// A field-level validation failure, surfaced to clients as the
    /// `{"errorMessage", "fieldName"}` payload.
    #[error("{message}")]
    Field { message: String, field: String },

    /// A validation failure without a single offending field.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),
}
