#[macro_use]
pub mod macros;

mod code_location;
mod codes;
mod types;

// Re-export all public types and utilities
pub use code_location::{AbstractLocation, CodeLocation, Span};
pub use codes::ErrorCode;
pub use codes::Warnings;
pub use types::{ContextableResult, ErrContext, FsError, FsResult, LiftableResult, WrappedError};
