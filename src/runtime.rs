//! Global tokio runtime management.
//!
//! The adapter exposes a synchronous, blocking command surface while the
//! driver interface is async. This module provides the shared runtime
//! that bridges the two for the lifetime of the process.

use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime, initialized once on first use.
static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get (or initialize) the global tokio runtime.
///
/// The runtime is multi-threaded with the default number of worker threads
/// (typically equal to the number of CPU cores). Override with the
/// `REDAPT_RUNTIME_THREADS` environment variable.
pub fn get_runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        builder.enable_all();

        // Allow overriding thread count
        if let Ok(threads) = std::env::var("REDAPT_RUNTIME_THREADS") {
            if let Ok(n) = threads.parse::<usize>() {
                if n > 0 {
                    builder.worker_threads(n);
                }
            }
        }

        match builder.thread_name("redapt-rt").build() {
            Ok(rt) => rt,
            Err(e) => {
                // Cannot return an error from OnceLock::get_or_init, and
                // runtime creation failure (e.g. ulimit too low) is
                // unrecoverable for the process anyway.
                panic!("redapt: failed to create tokio runtime: {e}");
            }
        }
    })
}

/// Block on a future using the global runtime.
///
/// This is the bridge between the synchronous adapter surface and the
/// async driver. Must NOT be called from within an async context
/// (will panic).
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    get_runtime().block_on(future)
}

// ── Tests ──────────────────────────────────────────────────────────
