pub mod master;
pub mod slave;

pub use master::probe_master;
pub use slave::probe_slave;
