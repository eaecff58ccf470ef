//! Domain layer for the Storycraft backend.
//!
//! Holds the typed data model for story orders, the submission validation
//! that guards the storage layer, and the fixed pricing/character catalogs.

pub mod catalog;
pub mod error;
pub mod order;
