//! Test doubles for service unit tests. Lets the sqlx-error classification
//! paths run without a live database.

use sqlx::error::{DatabaseError, ErrorKind};
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
enum StubKind {
    Unique,
    ForeignKey,
    Other,
}

#[derive(Debug)]
struct StubDatabaseError(StubKind);

impl fmt::Display for StubDatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stub database error: {:?}", self.0)
    }
}

impl StdError for StubDatabaseError {}

impl DatabaseError for StubDatabaseError {
    fn message(&self) -> &str {
        "stub database error"
    }

    fn kind(&self) -> ErrorKind {
        match self.0 {
            StubKind::Unique => ErrorKind::UniqueViolation,
            StubKind::ForeignKey => ErrorKind::ForeignKeyViolation,
            StubKind::Other => ErrorKind::Other,
        }
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }
}

pub fn unique_violation() -> sqlx::Error {
    sqlx::Error::Database(Box::new(StubDatabaseError(StubKind::Unique)))
}

pub fn foreign_key_violation() -> sqlx::Error {
    sqlx::Error::Database(Box::new(StubDatabaseError(StubKind::ForeignKey)))
}

pub fn generic_db_error() -> sqlx::Error {
    sqlx::Error::Database(Box::new(StubDatabaseError(StubKind::Other)))
}
