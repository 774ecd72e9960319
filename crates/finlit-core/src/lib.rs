pub mod error;
pub mod types;

#[cfg(feature = "debt")]
pub mod debt;

#[cfg(feature = "advice")]
pub mod advice;

pub use error::FinlitError;
pub use types::*;

/// Standard result type for all finlit operations
pub type FinlitResult<T> = Result<T, FinlitError>;
