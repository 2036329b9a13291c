use shared::config::CheckConfig;

/// Connection settings for one probed host.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
  /// Host to connect to.
  pub host: String,
  /// TCP port Postgres listens on.
  pub port: u16,
  /// User to connect as.
  pub user: String,
  /// Password to connect with.
  pub password: String,
  /// Database to run the probe queries against.
  pub database: String,
}

impl ProbeConfig {
  /// Settings for one host out of the overall check config.
  pub fn for_host(cfg: &CheckConfig, host: &str) -> Self {
    Self {
      host: host.to_string(),
      port: cfg.port,
      user: cfg.user.clone(),
      password: cfg.password.clone(),
      database: cfg.database.clone(),
    }
  }

  /// Keyword/value connection string for tokio-postgres.
  pub fn connection_string(&self) -> String {
    format!(
      "host={} port={} user={} password={} dbname={} sslmode=disable application_name=walcheck",
      self.host, self.port, self.user, self.password, self.database
    )
  }
}
