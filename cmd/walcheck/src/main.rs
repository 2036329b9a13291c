mod report;

use clap::Parser;
use shared::config::CheckConfig;
use shared::error::WalcheckError;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use walcheck_core::classify::{classify, Verdict};
use walcheck_pgsql::connector::ProbeConfig;
use walcheck_pgsql::probe::{probe_master, probe_slave};

// Exit codes consumed by the alerting layer. Stable interface.
const EXIT_HEALTHY: i32 = 0;
const EXIT_LAGGING: i32 = 1;
const EXIT_TOPOLOGY_WRONG: i32 = 2;
const EXIT_CONNECT_FAILED: i32 = 3;
const EXIT_MASTER_QUERY_FAILED: i32 = 4;
const EXIT_SLAVE_QUERY_FAILED: i32 = 5;
const EXIT_INVALID_LSN: i32 = 6;

/// Streaming-replication health probe for PostgreSQL clusters.
///
/// Connects to the write master and every read slave, compares WAL
/// positions, and exits 0 only when the master is a primary, every
/// slave is replicating, and no slave trails beyond the accepted lag.
#[derive(Debug, Parser)]
#[command(name = "walcheck", version)]
struct Args {
  /// Replication master host. May only be specified once.
  #[arg(short = 'M', long)]
  master: String,

  /// Replication slave host(s). May be specified more than once.
  #[arg(short = 'S', long = "slave", required = true)]
  slaves: Vec<String>,

  /// TCP port that Postgres listens on.
  #[arg(short = 'p', long, default_value_t = 5432)]
  port: u16,

  /// User to connect as.
  #[arg(short = 'u', long, env = "WALCHECK_USER")]
  user: String,

  /// Password to connect with.
  #[arg(
    short = 'w',
    long,
    env = "WALCHECK_PASSWORD",
    default_value = "",
    hide_env_values = true
  )]
  password: String,

  /// Database to use for the probe queries. Defaults to the user name.
  #[arg(short = 'd', long)]
  database: Option<String>,

  /// Maximum acceptable lag behind the master WAL position, in bytes.
  #[arg(short = 'l', long = "lag", default_value_t = 8192)]
  accept_lag: u64,

  /// Enable debug output (to standard error).
  #[arg(short = 'D', long)]
  debug: bool,
}

/// Which probe phase an error came out of. Master and slave query
/// failures map to distinct exit codes.
#[derive(Clone, Copy)]
enum Phase {
  Master,
  Slave,
}

fn main() {
  let args = Args::parse();
  init_logging(args.debug);
  std::process::exit(run(args));
}

fn run(args: Args) -> i32 {
  let cfg = check_config(args);

  // Probes are strictly sequential; one thread is enough.
  let rt = match tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
  {
    Ok(rt) => rt,
    Err(e) => {
      eprintln!("walcheck: failed to start runtime: {e}");
      return EXIT_CONNECT_FAILED;
    }
  };

  rt.block_on(check(&cfg))
}

async fn check(cfg: &CheckConfig) -> i32 {
  let master = match probe_master(&ProbeConfig::for_host(cfg, &cfg.master)).await {
    Ok(snapshot) => snapshot,
    Err(e) => return probe_failure(e, Phase::Master),
  };
  println!("{}: {}", master.name, master.current_lsn);

  let mut slaves = Vec::with_capacity(cfg.slaves.len());
  for host in &cfg.slaves {
    match probe_slave(&ProbeConfig::for_host(cfg, host)).await {
      Ok(snapshot) => slaves.push(snapshot),
      Err(e) => return probe_failure(e, Phase::Slave),
    }
  }

  let cluster = classify(&master, &slaves, cfg.accept_lag);
  report::render(&cluster);
  debug!(verdict = ?cluster.verdict, "check complete");

  match cluster.verdict {
    Verdict::Healthy => EXIT_HEALTHY,
    Verdict::Lagging => EXIT_LAGGING,
    Verdict::TopologyWrong => EXIT_TOPOLOGY_WRONG,
  }
}

fn check_config(args: Args) -> CheckConfig {
  let database = args.database.unwrap_or_else(|| args.user.clone());
  CheckConfig {
    master: args.master,
    slaves: args.slaves,
    port: args.port,
    user: args.user,
    password: args.password,
    database,
    accept_lag: args.accept_lag,
  }
}

fn probe_failure(err: WalcheckError, phase: Phase) -> i32 {
  let code = match (&err, phase) {
    (WalcheckError::ConnectFailed { .. }, _) => EXIT_CONNECT_FAILED,
    (WalcheckError::InvalidLsn { .. }, _) => EXIT_INVALID_LSN,
    (_, Phase::Master) => EXIT_MASTER_QUERY_FAILED,
    (_, Phase::Slave) => EXIT_SLAVE_QUERY_FAILED,
  };

  // {:#} prints the whole cause chain on one line.
  eprintln!("walcheck: {:#}", anyhow::Error::new(err));
  code
}

fn init_logging(debug: bool) {
  // The report goes to stdout; diagnostics stay on stderr.
  let filter = if debug {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}
