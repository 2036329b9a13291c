use crate::connector::{PgClient, ProbeConfig};
use shared::error::Result;
use tracing::debug;
use walcheck_core::snapshot::SlaveSnapshot;

/// Probe one configured read slave: recovery flag, last received and
/// last replayed WAL positions.
///
/// On a host that is not actually replicating, both position functions
/// return NULL; the snapshot carries `0/0` and the classifier flags
/// the role mismatch.
pub async fn probe_slave(cfg: &ProbeConfig) -> Result<SlaveSnapshot> {
  debug!(host = %cfg.host, "checking on read slave");
  let client = PgClient::connect(cfg).await?;

  let is_in_recovery = client.is_in_recovery().await?;
  let received = client.last_wal_receive_lsn().await?;
  let replayed = client.last_wal_replay_lsn().await?;

  debug!(
    host = %cfg.host,
    in_recovery = is_in_recovery,
    received = %received,
    replayed = %replayed,
    "slave probed"
  );

  SlaveSnapshot::from_scalars(&cfg.host, is_in_recovery, &received, &replayed)
}
