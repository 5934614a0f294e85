use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid association: {0}")]
    InvalidAssociation(String),
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl AppError {
    /// True for unique-constraint violations, so callers can report a
    /// duplicate instead of a generic database failure.
    pub fn is_duplicate(&self) -> bool {
        if let AppError::Database(e) = self {
            if let Some(db_err) = e.as_database_error() {
                let code = db_err.code().unwrap_or_default();

                // 2067 = SQLite Unique Constraint
                // 23505 = PostgreSQL Unique Violation
                return code == "2067" || code == "23505";
            }
        }
        false
    }
}
