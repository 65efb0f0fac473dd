use crate::Setup;

use std::sync::Once;

/// Owns the Tokio runtime a test runs on.
///
/// Tests use `#[test]` rather than `#[tokio::test]` so the harness controls
/// runtime construction and log setup.
pub struct PivotTest<S: Setup> {
    runtime: tokio::runtime::Runtime,
    setup: Option<S>,
}

impl<S: Setup> PivotTest<S> {
    /// Create a new PivotTest with a current-thread runtime.
    pub fn new(setup: S) -> Self {
        init_tracing();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime,
            setup: Some(setup),
        }
    }

    /// Run a test function with the setup, using our managed runtime.
    pub fn run_test<F, Fut>(&mut self, test_fn: F)
    where
        F: FnOnce(S) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let setup = self.setup.take().expect("Setup already consumed");
        self.runtime.block_on(async {
            test_fn(setup).await;
        });
    }
}

/// Installs a test-writer subscriber once per process. Filter with
/// `RUST_LOG`, e.g. `RUST_LOG=pivot=trace`.
fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
