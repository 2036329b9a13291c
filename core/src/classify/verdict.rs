use crate::lag::SlaveLag;
use crate::snapshot::{MasterSnapshot, SlaveSnapshot};
use shared::lsn::Lsn;

/// Overall result of one check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
  /// The master is a primary, every slave is replicating, and no slave
  /// exceeds the lag threshold.
  Healthy,
  /// The configured roles do not match reality: the master is in
  /// recovery, or at least one slave is not.
  TopologyWrong,
  /// At least one slave exceeds the lag threshold on either metric.
  Lagging,
}

/// Per-slave diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlaveReport {
  pub name: String,
  pub is_in_recovery: bool,
  pub received_lsn: Lsn,
  pub replayed_lsn: Lsn,
  pub lag: SlaveLag,
  /// Whether this slave individually breached the threshold.
  pub over_threshold: bool,
}

/// Everything the reporting layer needs from one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterReport {
  pub master_name: String,
  pub master_in_recovery: bool,
  pub master_lsn: Lsn,
  pub slaves: Vec<SlaveReport>,
  pub verdict: Verdict,
}

/// Fold one master and all slaves into a verdict.
///
/// Role problems outrank lag: a master in recovery (its "current"
/// position is a receive pointer, not the true WAL head) or a slave
/// serving as a primary yields `TopologyWrong` even when lag values
/// also breach the threshold. Per-slave lines are produced either way
/// so the report stays complete.
///
/// Pure function of its inputs; re-running on the same snapshots and
/// threshold yields the same report.
pub fn classify(master: &MasterSnapshot, slaves: &[SlaveSnapshot], threshold: u64) -> ClusterReport {
  let mut reports = Vec::with_capacity(slaves.len());
  let mut any_wrong_role = false;
  let mut any_lagging = false;

  for slave in slaves {
    let lag = SlaveLag::evaluate(master, slave);
    let over = lag.exceeds(threshold);
    any_wrong_role |= !slave.is_in_recovery;
    any_lagging |= over;
    reports.push(SlaveReport {
      name: slave.name.clone(),
      is_in_recovery: slave.is_in_recovery,
      received_lsn: slave.received_lsn,
      replayed_lsn: slave.replayed_lsn,
      lag,
      over_threshold: over,
    });
  }

  let verdict = if master.is_in_recovery || any_wrong_role {
    Verdict::TopologyWrong
  } else if any_lagging {
    Verdict::Lagging
  } else {
    Verdict::Healthy
  };

  ClusterReport {
    master_name: master.name.clone(),
    master_in_recovery: master.is_in_recovery,
    master_lsn: master.current_lsn,
    slaves: reports,
    verdict,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn master(in_recovery: bool, current: &str) -> MasterSnapshot {
    MasterSnapshot::from_scalars("db-master", in_recovery, current).unwrap()
  }

  fn slave(name: &str, in_recovery: bool, received: &str, replayed: &str) -> SlaveSnapshot {
    SlaveSnapshot::from_scalars(name, in_recovery, received, replayed).unwrap()
  }

  #[test]
  fn healthy_cluster() {
    let m = master(false, "0/90000A1");
    let slaves = vec![
      slave("db-slave1", true, "0/90000A1", "0/90000A1"),
      slave("db-slave2", true, "0/90000A0", "0/90000A0"),
    ];
    let report = classify(&m, &slaves, 8192);
    assert_eq!(report.verdict, Verdict::Healthy);
    assert_eq!(report.slaves.len(), 2);
    assert!(report.slaves.iter().all(|s| !s.over_threshold));
  }

  #[test]
  fn master_in_recovery_is_topology_wrong() {
    // Verdict holds regardless of slave lag values.
    let m = master(true, "");
    let slaves = vec![slave("db-slave1", true, "0/0", "0/0")];
    let report = classify(&m, &slaves, 8192);
    assert_eq!(report.verdict, Verdict::TopologyWrong);
    assert!(report.master_in_recovery);
    // Per-slave lines are still produced.
    assert_eq!(report.slaves.len(), 1);
  }

  #[test]
  fn slave_not_in_recovery_is_topology_wrong() {
    // All lag values within threshold — role check is independent.
    let m = master(false, "0/90000A1");
    let slaves = vec![slave("db-slave1", false, "0/90000A1", "0/90000A1")];
    let report = classify(&m, &slaves, 8192);
    assert_eq!(report.verdict, Verdict::TopologyWrong);
    assert!(!report.slaves[0].over_threshold);
  }

  #[test]
  fn lag_beyond_threshold_is_lagging() {
    // receive_lag = 8193 against threshold 8192.
    let m = master(false, "0/2001");
    let slaves = vec![slave("db-slave1", true, "0/0", "0/0")];
    let report = classify(&m, &slaves, 8192);
    assert_eq!(report.verdict, Verdict::Lagging);
    assert!(report.slaves[0].over_threshold);
    assert_eq!(report.slaves[0].lag.receive_lag, 8193);
  }

  #[test]
  fn lag_at_threshold_exactly_is_healthy() {
    // receive_lag = 8192 against threshold 8192: not flagged.
    let m = master(false, "0/2000");
    let slaves = vec![slave("db-slave1", true, "0/0", "0/0")];
    let report = classify(&m, &slaves, 8192);
    assert_eq!(report.verdict, Verdict::Healthy);
    assert!(!report.slaves[0].over_threshold);
  }

  #[test]
  fn replay_lag_alone_triggers_lagging() {
    let m = master(false, "0/2001");
    let slaves = vec![slave("db-slave1", true, "0/2001", "0/0")];
    let report = classify(&m, &slaves, 8192);
    assert_eq!(report.verdict, Verdict::Lagging);
    assert_eq!(report.slaves[0].lag.replay_lag, 8193);
  }

  #[test]
  fn topology_outranks_lag() {
    // One slave with the wrong role, another far behind: topology wins,
    // but the lagging slave is still flagged in its line.
    let m = master(false, "7/A25801C8");
    let slaves = vec![
      slave("db-slave1", false, "7/A25801C8", "7/A25801C8"),
      slave("db-slave2", true, "0/0", "0/0"),
    ];
    let report = classify(&m, &slaves, 8192);
    assert_eq!(report.verdict, Verdict::TopologyWrong);
    assert!(report.slaves[1].over_threshold);
  }

  #[test]
  fn one_lagging_slave_among_healthy_ones() {
    let m = master(false, "0/189B2E78");
    let slaves = vec![
      slave("db-slave1", true, "0/189B2E78", "0/189B2E78"),
      slave("db-slave2", true, "0/90000A1", "0/90000A0"),
    ];
    let report = classify(&m, &slaves, 8192);
    assert_eq!(report.verdict, Verdict::Lagging);
    assert!(!report.slaves[0].over_threshold);
    assert!(report.slaves[1].over_threshold);
  }

  #[test]
  fn no_slaves_and_sane_master_is_healthy() {
    let m = master(false, "0/90000A1");
    let report = classify(&m, &[], 8192);
    assert_eq!(report.verdict, Verdict::Healthy);
    assert!(report.slaves.is_empty());
  }

  #[test]
  fn classify_is_idempotent() {
    let m = master(false, "0/189B2E78");
    let slaves = vec![slave("db-slave1", true, "0/90000A1", "0/90000A0")];
    let first = classify(&m, &slaves, 8192);
    let second = classify(&m, &slaves, 8192);
    assert_eq!(first, second);
  }
}
