//! Business logic services for the server.
//!
//! # Services
//!
//! - `auth` - Member registration and password login

pub mod auth;

pub use auth::{AuthError, AuthService};
