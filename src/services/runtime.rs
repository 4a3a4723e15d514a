//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but send handlers and the compose timers are
//! written against tokio. This module lets GPUI tasks await tokio futures.
//!
//! ## Pattern
//!
//! ```text
//! GPUI async task (controller)
//!       │
//!       ▼
//! run_in_tokio(dispatcher.deliver(email))
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! accepted: bool returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::{Builder, Runtime};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("mail-composer-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// # Example
///
/// ```ignore
/// let accepted = run_in_tokio(dispatcher.deliver(email)).await;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}
