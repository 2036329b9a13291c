/// Resolved configuration for one check run.
///
/// Assembled by the CLI layer from flags and environment fallbacks;
/// consumed by the probe service. One instance describes the whole
/// cluster — the probe derives per-host connection settings from it.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Replication master host.
    pub master: String,
    /// Replication slave hosts, in the order they were given.
    pub slaves: Vec<String>,
    /// TCP port Postgres listens on (same for every host).
    pub port: u16,
    /// User to connect as.
    pub user: String,
    /// Password to connect with.
    pub password: String,
    /// Database to run the probe queries against.
    pub database: String,
    /// Maximum acceptable lag behind the master WAL position, in bytes.
    /// Applied to both the receive and the replay metric; a slave is
    /// flagged only when it exceeds this strictly.
    pub accept_lag: u64,
}
