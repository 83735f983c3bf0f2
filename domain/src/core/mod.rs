//! Cross-cutting domain primitives

pub mod error;

pub use error::DomainError;
