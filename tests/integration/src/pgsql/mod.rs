mod probe;

use walcheck_pgsql::connector::ProbeConfig;

/// Connection settings for the test server, from the environment.
/// Defaults match a stock local Postgres.
pub fn test_probe_config() -> ProbeConfig {
  ProbeConfig {
    host: env_or("WALCHECK_TEST_HOST", "localhost"),
    port: env_or("WALCHECK_TEST_PORT", "5432").parse().expect("bad test port"),
    user: env_or("WALCHECK_TEST_USER", "postgres"),
    password: env_or("WALCHECK_TEST_PASSWORD", "postgres"),
    database: env_or("WALCHECK_TEST_DB", "postgres"),
  }
}

fn env_or(key: &str, default: &str) -> String {
  std::env::var(key).unwrap_or_else(|_| default.to_string())
}
