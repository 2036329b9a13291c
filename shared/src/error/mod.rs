pub mod types;

pub use types::WalcheckError;

/// Shorthand Result type used throughout walcheck.
pub type Result<T> = std::result::Result<T, WalcheckError>;
