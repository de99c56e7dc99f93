//! Database error classification

/// SQLSTATE raised when `statement_timeout` cancels a query.
const QUERY_CANCELED: &str = "57014";

/// Database error type
///
/// Messages never include the connection string.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("database timeout: {0}")]
    Timeout(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid connection string: {reason}")]
    InvalidUrl { reason: &'static str },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut => Self::Timeout(e),
            sqlx::Error::Database(db) if db.code().as_deref() == Some(QUERY_CANCELED) => {
                Self::Timeout(e)
            }
            _ => Self::Sqlx(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_classified_as_timeout() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::Timeout(_)));
    }

    #[test]
    fn row_not_found_stays_a_driver_error() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(_)));
    }

    #[test]
    fn not_found_display() {
        let err = DbError::NotFound {
            resource: "Item",
            id: "42".into(),
        };
        assert_eq!(err.to_string(), "not found: Item '42'");
    }
}
