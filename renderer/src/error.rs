use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// An entity range points at a key the entity map does not contain.
    #[error("undefined entity: key '{key}' is not in the entity map")]
    UndefinedEntity { key: String },
}
