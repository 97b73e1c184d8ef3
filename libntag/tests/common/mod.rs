// Shared helpers for integration tests. Each aggregator includes this
// module once per topic file, so not every helper is used everywhere.
#![allow(dead_code)]


/// Route `log` output through env_logger; `RUST_LOG=libntag=trace` shows
/// every page read and decoded record.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
