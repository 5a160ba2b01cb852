use thiserror::Error;

/// Failures surfaced by the data client, the profile client and the favorites store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Transport failure, non-success status or an undecodable body.
    #[error("{0}")]
    Network(String),

    /// The upstream source has nothing under the requested key.
    #[error("{0}")]
    NotFound(String),

    /// A favorites write was attempted without a signed-in user.
    #[error("sign in required")]
    Unauthenticated,
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        AppError::Network(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
