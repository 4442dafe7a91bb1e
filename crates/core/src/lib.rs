//! Precondition validators for guarding function arguments.
//!
//! See [`ensure`] for the checks and [`error::EnsureError`] for the failure
//! type they return.

pub mod ensure;
pub mod error;
pub mod types;

#[cfg(feature = "decimal")]
pub use rust_decimal::Decimal;
