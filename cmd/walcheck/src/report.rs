use walcheck_core::classify::{ClusterReport, SlaveReport, Verdict};

/// Render the per-slave lines and the trailing verdict marker to
/// stdout. The master line is printed by the caller as soon as the
/// master probe returns, before any slave round-trip.
pub fn render(report: &ClusterReport) {
  for slave in &report.slaves {
    println!("{}", slave_line(slave));
  }

  if report.master_in_recovery {
    println!("{}: !! master is in recovery", report.master_name);
  }

  if report.verdict != Verdict::Healthy {
    println!("FAILED");
  }
}

fn slave_line(slave: &SlaveReport) -> String {
  let mut line = format!(
    "{}: {} {:<12}   to {} {:<12}",
    slave.name,
    slave.received_lsn,
    format!("({})", slave.lag.receive_lag),
    slave.replayed_lsn,
    format!("({})", slave.lag.replay_lag),
  );

  if !slave.is_in_recovery {
    line.push_str("    !! not in recovery");
  }
  if slave.over_threshold {
    line.push_str("    !! too far behind write master");
  }

  line.trim_end().to_string()
}
