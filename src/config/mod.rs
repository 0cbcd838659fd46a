//! Configuration loaded from environment variables.
//!
//! Required values (`JWT_SECRET`, the database settings) abort startup when
//! missing; each `from_env` constructor documents its variables.
//!
//! # Modules
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: signing secret and token TTL

pub mod cors;
pub mod database;
pub mod jwt;
