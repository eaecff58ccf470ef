//! Request handlers.
//!
//! Each submodule serves one branch of the HTTP surface: the static
//! catalogs, order intake/lookup, and operational diagnostics. Failures are
//! mapped through [`crate::error::AppError`].

pub mod catalog;
pub mod diagnostics;
pub mod orders;
