//! Core types for Loftbook.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod coordinate;
pub mod id;
pub mod role;

pub use coordinate::{DmsCoordinate, DmsCoordinateError};
pub use id::*;
pub use role::Role;
