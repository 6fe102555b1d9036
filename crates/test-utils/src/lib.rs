pub mod builders;
pub mod fake_backend;

use std::sync::{Mutex, MutexGuard, Once, OnceLock};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();
static CWD_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Serialize tests that read or change the process working directory.
///
/// Tests in one binary run on parallel threads; any test that compares
/// `current_dir()` before and after a call must hold this for its duration.
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run a future with a 5-second timeout, so a hung child fails the test
/// instead of stalling the suite.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
