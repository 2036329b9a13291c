use thiserror::Error;

/// Top-level error type for the walcheck probe.
///
/// Each variant corresponds to a failure boundary, attributed to the
/// host (and where it applies, the queried field) so one run's failure
/// names exactly what broke. Driver errors are attached as `#[source]`
/// so `anyhow` chains preserve the full cause.
///
/// There are no recoverable variants: a probe whose inputs are
/// incomplete must abort rather than report a partial "healthy".
#[derive(Debug, Error)]
pub enum WalcheckError {
    // ── Probe ──────────────────────────────────────────────────
    #[error("probe: failed to connect to {host}")]
    ConnectFailed {
        host: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("probe: query for {field} failed on {host}")]
    QueryFailed {
        host: String,
        field: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("probe: unrecognized boolean '{text}' for {field} on {host}")]
    InvalidFlag {
        host: String,
        field: &'static str,
        text: String,
    },

    // ── Positions ──────────────────────────────────────────────
    #[error("lsn: invalid log position '{text}' for {field} on {host}")]
    InvalidLsn {
        host: String,
        field: &'static str,
        text: String,
    },
}
