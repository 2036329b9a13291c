use super::test_probe_config;
use walcheck_core::classify::{classify, Verdict};
use walcheck_pgsql::probe::{probe_master, probe_slave};

#[tokio::test]
#[ignore]
async fn primary_probe_reports_role_and_position() {
  let cfg = test_probe_config();
  let master = probe_master(&cfg).await.unwrap();
  assert!(!master.is_in_recovery);
  assert!(master.current_lsn.get() > 0);
}

#[tokio::test]
#[ignore]
async fn wal_position_is_monotonic_across_probes() {
  let cfg = test_probe_config();
  let first = probe_master(&cfg).await.unwrap();
  let second = probe_master(&cfg).await.unwrap();
  assert!(second.current_lsn >= first.current_lsn);
}

#[tokio::test]
#[ignore]
async fn primary_probed_in_slave_role_is_topology_wrong() {
  // A primary answers the slave queries too: pg_is_in_recovery() is
  // false and both positions come back NULL. The classifier must turn
  // that into a role mismatch, not a healthy report.
  let cfg = test_probe_config();
  let master = probe_master(&cfg).await.unwrap();
  let slave = probe_slave(&cfg).await.unwrap();
  assert!(!slave.is_in_recovery);

  let report = classify(&master, &[slave], 8192);
  assert_eq!(report.verdict, Verdict::TopologyWrong);
}
