use crate::connector::{PgClient, ProbeConfig};
use shared::error::Result;
use tracing::debug;
use walcheck_core::snapshot::MasterSnapshot;

/// Probe the configured write master: recovery flag, then the current
/// WAL write position.
pub async fn probe_master(cfg: &ProbeConfig) -> Result<MasterSnapshot> {
  debug!(host = %cfg.host, "checking on write master");
  let client = PgClient::connect(cfg).await?;

  let is_in_recovery = client.is_in_recovery().await?;

  // pg_current_wal_lsn() raises an error on a standby. A master found
  // in recovery is a topology failure the classifier reports; record
  // its position as 0/0 and let the run complete.
  let current = if is_in_recovery {
    debug!(host = %cfg.host, "master reports in recovery, skipping position query");
    String::new()
  } else {
    client.current_wal_lsn().await?
  };

  debug!(host = %cfg.host, in_recovery = is_in_recovery, lsn = %current, "master probed");
  MasterSnapshot::from_scalars(&cfg.host, is_in_recovery, &current)
}
