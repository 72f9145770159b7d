use thiserror::Error;

/// Coarse failure kind the boundary maps onto a transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Unknown,
    AlreadyExists,
    NotFound,
}

/// A violated domain rule, raised by the services that own the rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    pub category: ErrorCategory,
    pub message: String,
}

impl DomainError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn show_already_exists(title: &str) -> Self {
        Self::new(
            ErrorCategory::AlreadyExists,
            format!("show with title '{title}' or given slug already exists"),
        )
    }

    pub fn show_not_found(id: &str) -> Self {
        Self::new(
            ErrorCategory::NotFound,
            format!("show with id '{id}' does not exist"),
        )
    }

    pub fn episode_already_exists(title: &str) -> Self {
        Self::new(
            ErrorCategory::AlreadyExists,
            format!("episode with title '{title}' already exists"),
        )
    }

    pub fn episode_not_found(id: &str) -> Self {
        Self::new(
            ErrorCategory::NotFound,
            format!("episode with id '{id}' does not exist"),
        )
    }

    pub fn distribution_already_exists(title: &str) -> Self {
        Self::new(
            ErrorCategory::AlreadyExists,
            format!("distribution with title '{title}' or given slug already exists"),
        )
    }

    pub fn distribution_not_found(id: &str) -> Self {
        Self::new(
            ErrorCategory::NotFound,
            format!("distribution with id '{id}' does not exist"),
        )
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(database_error) = &error {
            if database_error.is_unique_violation() {
                return Self::UniqueViolation(database_error.message().to_string());
            }
        }
        Self::Database(error)
    }
}

/// Failure of a use case: a domain rule or a storage failure passed through untouched.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApplicationError::Domain(error) => error.category,
            // A lost check-then-act race surfaces as a store-level unique violation.
            ApplicationError::Repository(RepositoryError::UniqueViolation(_)) => {
                ErrorCategory::AlreadyExists
            }
            ApplicationError::Repository(_) => ErrorCategory::Unknown,
        }
    }
}
