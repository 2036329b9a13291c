use shared::error::WalcheckError;
use shared::lsn::Lsn;

/// Point-in-time record of the configured write master.
///
/// Built once per run from the scalars the probe layer retrieved and
/// never mutated afterwards. The position texts arrive raw; decoding
/// happens here so a malformed value is attributed to the host and
/// field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterSnapshot {
  /// Host the instance was queried as. Reporting only.
  pub name: String,
  /// True when the instance is replaying WAL from elsewhere — i.e. it
  /// is not actually acting as a primary.
  pub is_in_recovery: bool,
  /// Most recently generated WAL position.
  pub current_lsn: Lsn,
}

impl MasterSnapshot {
  /// Build from raw query scalars. The recovery flag is already
  /// resolved to a boolean by the probe layer.
  pub fn from_scalars(
    name: &str,
    is_in_recovery: bool,
    current: &str,
  ) -> Result<Self, WalcheckError> {
    Ok(Self {
      name: name.to_string(),
      is_in_recovery,
      current_lsn: decode_field(name, "pg_current_wal_lsn", current)?,
    })
  }
}

/// Point-in-time record of one configured read slave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlaveSnapshot {
  /// Host the instance was queried as. Reporting only.
  pub name: String,
  /// True when the instance is replaying WAL — a configured slave
  /// that reports false is serving as a primary.
  pub is_in_recovery: bool,
  /// Most recent position durably received from upstream.
  pub received_lsn: Lsn,
  /// Most recent position applied and visible to readers.
  pub replayed_lsn: Lsn,
}

impl SlaveSnapshot {
  pub fn from_scalars(
    name: &str,
    is_in_recovery: bool,
    received: &str,
    replayed: &str,
  ) -> Result<Self, WalcheckError> {
    Ok(Self {
      name: name.to_string(),
      is_in_recovery,
      received_lsn: decode_field(name, "pg_last_wal_receive_lsn", received)?,
      replayed_lsn: decode_field(name, "pg_last_wal_replay_lsn", replayed)?,
    })
  }
}

fn decode_field(host: &str, field: &'static str, text: &str) -> Result<Lsn, WalcheckError> {
  Lsn::parse(text).map_err(|_| WalcheckError::InvalidLsn {
    host: host.to_string(),
    field,
    text: text.to_string(),
  })
}
