/// Shared application layer policies
///
/// This module contains application-level rules used across
/// multiple bounded contexts.
pub mod pagination;

pub use pagination::*;
