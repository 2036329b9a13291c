// Live tests against a running PostgreSQL server. All of them are
// `#[ignore]`d: run with `cargo test -p walcheck-integration -- --ignored`
// and WALCHECK_TEST_* env vars pointing at a disposable instance.
#[cfg(test)]
mod pgsql;
