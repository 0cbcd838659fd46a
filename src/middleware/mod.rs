//! Request middleware: authentication extractor and role checks.
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] validates signature and expiry (401 on failure)
//! 3. [`role`] middleware compares the claim role against the route's
//!    required role (403 on mismatch)

pub mod auth;
pub mod role;
