use std::time::Duration;

/// Delay before retrying after `attempt` (1-based) failed: `attempt × step`.
pub fn linear_backoff(attempt: u32, step: Duration) -> Duration {
    step.saturating_mul(attempt.max(1))
}
