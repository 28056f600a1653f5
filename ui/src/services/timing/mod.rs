//! Simulated latency
//!
//! On the browser this is a `setTimeout`-backed future. Elsewhere (unit
//! tests) tokio's timer stands in.

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

/// Waits `ms` milliseconds. Dropping the future cancels the timer.
pub async fn simulated_delay(ms: u32) {
    if ms == 0 {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
    }
}
