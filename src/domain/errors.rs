use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} is not found")]
    NotFound(&'static str),
    #[error("{0} is already in use")]
    AlreadyExists(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
