//! vet Core Types
//!
//! This crate provides the foundational types used throughout the vet system:
//! - Value types (the Value enum with all scalar and container types)
//! - Attribute storage (the Attributes map and the `attrs!` macro)
//! - The Record capability (read-only attribute access on a host entity)

mod record;
mod value;

pub use record::*;
pub use value::*;
