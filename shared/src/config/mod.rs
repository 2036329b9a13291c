pub mod types;

pub use types::CheckConfig;
