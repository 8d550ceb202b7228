//! Tokio Runtime Bridge
//!
//! GPUI drives its own executor, while the authentication collaborator is
//! written against tokio (timers, future network clients). This module runs
//! tokio futures on a shared runtime and hands the result back to GPUI.
//!
//! ```text
//! GPUI task ── run_in_tokio(fut) ──▶ tokio::Runtime::spawn ──▶ result back to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("aula-tokio")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future on the tokio runtime and await its output
///
/// A panic inside the future is resumed on the awaiting side.
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_run_in_tokio_from_foreign_executor() {
        let value = futures::executor::block_on(run_in_tokio(async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            21 * 2
        }));
        assert_eq!(value, 42);
    }
}
