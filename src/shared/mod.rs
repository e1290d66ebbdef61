/// Shared kernel - error types, result alias and path safety helpers
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
