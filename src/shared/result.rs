/// Type alias for Result with anyhow::Error as the error type.
/// Application and CLI plumbing use this; domain services return `AssetError` directly.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
