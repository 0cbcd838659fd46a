//! Shared utilities.
//!
//! - [`errors`]: application error types and HTTP mapping
//! - [`jwt`]: token creation and verification
//! - [`password`]: password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;

#[cfg(test)]
pub mod testing;
