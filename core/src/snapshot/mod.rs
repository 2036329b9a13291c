pub mod types;

pub use types::{MasterSnapshot, SlaveSnapshot};
