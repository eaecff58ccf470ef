//! Document store backend implementations.

pub mod memory;
pub mod postgres;
