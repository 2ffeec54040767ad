//! Shared error types for the crate

use thiserror::Error;

/// Main error type for summation operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SumError {
    /// Requested length exceeds the backing storage
    #[error("invalid length {length}: input holds only {available} values")]
    LengthOutOfBounds { length: usize, available: usize },
}
