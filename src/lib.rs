//! # Coursemart API
//!
//! A course-marketplace backend built with Rust, Axum, and PostgreSQL.
//! Users and admins sign up and log in, admins manage the course catalog,
//! and users browse and purchase courses.
//!
//! ## Architecture
//!
//! The codebase follows a modular, NestJS-inspired layout:
//!
//! ```text
//! src/
//! ├── config/           # Env-loaded configuration (JWT, database, CORS)
//! ├── middleware/       # Auth extractor and role middleware
//! ├── modules/          # Feature modules
//! │   ├── accounts/    # Credential store (accounts table, role enum)
//! │   ├── auth/        # Signup and login flows, token claims
//! │   ├── courses/     # Catalog and admin course management
//! │   └── purchases/   # Purchase records and purchased-course listing
//! └── utils/           # Errors, JWT helpers, password hashing
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `model.rs`: data models and DTOs
//! - `service.rs`: business logic and SQL
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Stateless HS256 JWTs with a one-hour TTL. Claims carry the account id,
//! username, and a closed role enum (`user` or `admin`). The role embedded at
//! signup is fixed for the account's lifetime, and every protected route
//! requires a token whose role matches. Missing or invalid tokens get 401;
//! valid tokens with the wrong role get 403.
//!
//! ## Environment
//!
//! ```bash
//! JWT_SECRET=...                      # required, non-empty
//! JWT_ACCESS_EXPIRY=3600              # optional, seconds
//! DATABASE_URL=postgres://...         # or DB_HOST/DB_PORT/DB_USER/DB_PASSWORD/DB_NAME
//! CORS_ALLOWED_ORIGINS=http://localhost:3000
//! PORT=8080
//! ```
//!
//! The process refuses to start when `JWT_SECRET` or the database settings
//! are absent.
//!
//! ## Security Considerations
//!
//! - Passwords are hashed once with bcrypt at signup; login compares the
//!   plaintext against the stored hash
//! - Login failures are indistinguishable, so account existence does not leak
//! - Email uniqueness and purchase at-most-once are enforced by database
//!   constraints, which also resolve concurrent races

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
