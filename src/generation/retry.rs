use std::{fmt::Display, future::Future, time::Duration};
use tracing::warn;

use crate::generation::backoff::linear_backoff;

/// Bounded retry with linear backoff. Only errors accepted by `retryable` are
/// retried; anything else, or the last attempt's error, is returned as-is.
pub struct RetryPolicy<E> {
    pub max_attempts: u32,
    pub backoff_step: Duration,
    pub retryable: fn(&E) -> bool,
}

impl<E> Clone for RetryPolicy<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for RetryPolicy<E> {}

impl<E> std::fmt::Debug for RetryPolicy<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("backoff_step", &self.backoff_step)
            .finish()
    }
}

impl<E: Display> RetryPolicy<E> {
    pub fn linear(max_attempts: u32, backoff_step: Duration, retryable: fn(&E) -> bool) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_step,
            retryable,
        }
    }

    pub fn delay_after(&self, attempt: u32) -> Duration {
        linear_backoff(attempt, self.backoff_step)
    }

    /// Runs `op` with the 1-based attempt number until it succeeds, fails
    /// permanently, or attempts run out.
    pub async fn run<T, F, Fut>(&self, task: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts && (self.retryable)(&err) => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        task,
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };
    use tokio::time::Instant;

    fn always(_: &String) -> bool {
        true
    }

    fn never(_: &String) -> bool {
        false
    }

    #[tokio::test(start_paused = true)]
    async fn test_returns_last_error_after_max_attempts() {
        let policy: RetryPolicy<String> =
            RetryPolicy::linear(3, Duration::from_millis(1000), always);
        let calls = Arc::new(AtomicU32::new(0));
        let started = Instant::now();

        let result: Result<(), String> = policy
            .run("test", |attempt| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(format!("failure #{}", attempt))
                }
            })
            .await;

        assert_eq!(result, Err("failure #3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(started.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_fails_immediately() {
        let policy: RetryPolicy<String> =
            RetryPolicy::linear(3, Duration::from_millis(1000), never);
        let calls = Arc::new(AtomicU32::new(0));
        let started = Instant::now();

        let result: Result<(), String> = policy
            .run("test", |_| {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err("fatal".to_string())
                }
            })
            .await;

        assert_eq!(result, Err("fatal".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_transient_failure() {
        let policy: RetryPolicy<String> =
            RetryPolicy::linear(3, Duration::from_millis(1000), always);

        let result: Result<u32, String> = policy
            .run("test", |attempt| async move {
                if attempt < 2 {
                    Err("flaky".to_string())
                } else {
                    Ok(attempt)
                }
            })
            .await;

        assert_eq!(result, Ok(2));
    }
}
