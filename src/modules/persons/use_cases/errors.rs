use crate::modules::persons::core::validate::ValidationError;
use crate::shared::infrastructure::person_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("person not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
