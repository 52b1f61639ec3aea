/// Entity identifiers are opaque strings, assigned once on creation.
pub type Id = String;

/// Generate a fresh identifier (UUID v4).
pub fn new_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
