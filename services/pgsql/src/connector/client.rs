use super::config::ProbeConfig;
use shared::error::{Result, WalcheckError};
use tokio_postgres::NoTls;
use tracing::debug;

/// One probe connection to a PostgreSQL instance.
///
/// Used for the fixed read-only replication-status queries. Every
/// scalar is fetched as text (`::text` casts) so the probe layer stays
/// string-typed end to end and the LSN codec owns all decoding.
pub struct PgClient {
  client: tokio_postgres::Client,
  host: String,
}

impl PgClient {
  /// Connect to the configured host and spawn the connection driver.
  pub async fn connect(cfg: &ProbeConfig) -> Result<Self> {
    debug!(host = %cfg.host, port = cfg.port, db = %cfg.database, "connecting");

    let (client, connection) = tokio_postgres::connect(&cfg.connection_string(), NoTls)
      .await
      .map_err(|e| WalcheckError::ConnectFailed {
        host: cfg.host.clone(),
        source: Box::new(e),
      })?;

    // The connection future owns the socket; it resolves once the
    // client half is dropped at the end of the probe.
    let host = cfg.host.clone();
    tokio::spawn(async move {
      if let Err(e) = connection.await {
        debug!(host = %host, error = %e, "connection closed with error");
      }
    });

    debug!(host = %cfg.host, "connected, checking replication status");

    Ok(Self {
      client,
      host: cfg.host.clone(),
    })
  }

  /// `pg_is_in_recovery()` resolved to a boolean.
  pub async fn is_in_recovery(&self) -> Result<bool> {
    let text = self
      .scalar("pg_is_in_recovery", "SELECT pg_is_in_recovery()::text")
      .await?;
    parse_bool_text(&self.host, "pg_is_in_recovery", &text)
  }

  /// Current WAL write position. Only meaningful on a primary — the
  /// server raises an error when called in recovery.
  pub async fn current_wal_lsn(&self) -> Result<String> {
    self
      .scalar("pg_current_wal_lsn", "SELECT pg_current_wal_lsn()::text")
      .await
  }

  /// Last WAL position received from upstream. NULL (empty here) when
  /// the instance has never streamed.
  pub async fn last_wal_receive_lsn(&self) -> Result<String> {
    self
      .scalar(
        "pg_last_wal_receive_lsn",
        "SELECT pg_last_wal_receive_lsn()::text",
      )
      .await
  }

  /// Last WAL position replayed and visible to readers.
  pub async fn last_wal_replay_lsn(&self) -> Result<String> {
    self
      .scalar(
        "pg_last_wal_replay_lsn",
        "SELECT pg_last_wal_replay_lsn()::text",
      )
      .await
  }

  /// Run a single-row, single-column query and return the value as
  /// text. NULL maps to the empty string, which the LSN codec decodes
  /// as `0/0`.
  async fn scalar(&self, field: &'static str, query: &str) -> Result<String> {
    let row = self
      .client
      .query_one(query, &[])
      .await
      .map_err(|e| WalcheckError::QueryFailed {
        host: self.host.clone(),
        field,
        source: Box::new(e),
      })?;

    let value: Option<String> = row.get(0);
    Ok(value.unwrap_or_default())
  }
}

/// Map a textual boolean to `bool`.
///
/// Postgres renders booleans as `t`/`f`; the spelled-out and numeric
/// forms are accepted as well.
fn parse_bool_text(host: &str, field: &'static str, text: &str) -> Result<bool> {
  match text.trim().to_ascii_lowercase().as_str() {
    "t" | "true" | "on" | "1" => Ok(true),
    "f" | "false" | "off" | "0" => Ok(false),
    _ => Err(WalcheckError::InvalidFlag {
      host: host.to_string(),
      field,
      text: text.to_string(),
    }),
  }
}
