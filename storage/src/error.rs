use std::fmt;

use thiserror::Error;

/// Which override table a duplicate-row integrity violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideLevel {
    Species,
    Genus,
}

impl fmt::Display for OverrideLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Species => write!(f, "species"),
            Self::Genus => write!(f, "genus"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Species name '{0}' has no genus-separable token")]
    GenusUnresolvable(String),

    #[error("More than one {level}-level override row exists for '{key}'")]
    DuplicateOverride { level: OverrideLevel, key: String },

    #[error("A live submission already exists for this specimen")]
    DuplicateSubmission,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("2067") || e.code().as_deref() == Some("1555")
        )
    }
}
