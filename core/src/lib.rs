pub mod classify;
pub mod lag;
pub mod snapshot;
