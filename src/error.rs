//! Application-level errors.

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors that can occur while creating an account.
///
/// None of these ever reach a response body: the controller masks every
/// variant behind the same internal server error.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("invalid hasher parameters: {0}")]
    HasherConfig(String),
    #[error("hasher returned the plaintext password")]
    UnhashedPassword,

    #[error("account storage failed: {0}")]
    Repository(String),

    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApplicationError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(ApplicationError::internal)
    }
}
