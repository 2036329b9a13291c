use crate::snapshot::{MasterSnapshot, SlaveSnapshot};

/// How far one slave trails the master, in WAL bytes.
///
/// The master and slave probes are separate round-trips, so a slave can
/// appear to be ahead of the master position it is measured against.
/// Both deltas clamp to zero in that case rather than wrapping — an
/// apparent backward step is read skew, not negative lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlaveLag {
  /// Bytes the slave has yet to receive from the master.
  pub receive_lag: u64,
  /// Bytes the slave has received but not yet replayed.
  pub replay_lag: u64,
}

impl SlaveLag {
  /// Measure a slave against a master snapshot.
  ///
  /// Pure arithmetic over the two snapshots. Whether the master is
  /// actually acting as a primary is the classifier's concern; this
  /// works for any pair of snapshots.
  pub fn evaluate(master: &MasterSnapshot, slave: &SlaveSnapshot) -> Self {
    Self {
      receive_lag: master.current_lsn.saturating_delta(slave.received_lsn),
      replay_lag: slave.received_lsn.saturating_delta(slave.replayed_lsn),
    }
  }

  /// True when either metric exceeds `threshold` strictly. A lag of
  /// exactly `threshold` bytes is still acceptable.
  pub fn exceeds(&self, threshold: u64) -> bool {
    self.receive_lag > threshold || self.replay_lag > threshold
  }
}
