use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::backends::CatalogError;

/// Bounded retry with exponential backoff for transient catalog failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// min(base * 2^attempt, max)
    fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    pub async fn execute<F, Fut, T>(&self, operation: &str, mut f: F) -> Result<T, CatalogError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, CatalogError>>,
    {
        let mut attempt = 0;
        loop {
            match f().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!("{}: succeeded after {} retries", operation, attempt);
                    }
                    return Ok(value);
                }
                Err(err) if !err.is_transient() => {
                    debug!("{}: not retrying: {}", operation, err);
                    return Err(err);
                }
                Err(err) if attempt >= self.max_retries => {
                    warn!(
                        "{}: giving up after {} attempts: {}",
                        operation,
                        attempt + 1,
                        err
                    );
                    return Err(err);
                }
                Err(err) => {
                    let delay = match err.retry_after() {
                        Some(secs) => Duration::from_secs(secs).min(self.max_delay),
                        None => self.delay_for(attempt),
                    };
                    debug!(
                        "{}: transient error ({}), retry {} of {} in {:?}",
                        operation,
                        err,
                        attempt + 1,
                        self.max_retries,
                        delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
