//! Error type shared by the analytics, filtering and listing services.

use thiserror::Error;

use crate::db::repository::RepositoryError;
use crate::models::RangeError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of a service operation.
///
/// Each variant maps onto one HTTP status: `NotFound` to 404,
/// `InvalidArgument` to 400 and `Repository` to 500 unless the repository
/// itself reported a missing entity.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether this error means the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Repository(e) => e.is_not_found(),
            Self::InvalidArgument(_) => false,
        }
    }
}

impl From<RangeError> for ServiceError {
    fn from(err: RangeError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_is_invalid_argument() {
        let err: ServiceError = RangeError::InvertedHours { start: 10, end: 5 }.into();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "start_hour (10) must not be greater than end_hour (5)"
        );
    }

    #[test]
    fn test_repository_not_found_is_not_found() {
        let err: ServiceError = RepositoryError::not_found("Restaurant not found").into();
        assert!(err.is_not_found());

        let err: ServiceError = RepositoryError::internal("disk on fire").into();
        assert!(!err.is_not_found());
    }
}
