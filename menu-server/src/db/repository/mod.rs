//! Repository Module
//!
//! One statement per call against the `sections` / `items` tables.
//! Functions take the pool directly; there is no per-table state.

pub mod item;
pub mod section;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Outcome of an UPDATE or DELETE by id
///
/// A missing id is not an error: `row` is `None` and `rows_affected` is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    pub row: Option<T>,
    pub rows_affected: u64,
}

impl<T> Mutation<T> {
    /// Build from an `UPDATE ... RETURNING` that matched at most one row
    pub fn returning(row: Option<T>) -> Self {
        let rows_affected = u64::from(row.is_some());
        Self { row, rows_affected }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Mutation<U> {
        Mutation {
            row: self.row.map(f),
            rows_affected: self.rows_affected,
        }
    }
}

impl Mutation<()> {
    pub fn deleted(rows_affected: u64) -> Self {
        Self {
            row: None,
            rows_affected,
        }
    }
}
