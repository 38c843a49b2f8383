//! Fixed-budget retry for remote embedding calls.

use std::future::Future;

use crate::config::RetryConfig;

/// Runs `operation` until it succeeds or the attempt budget is exhausted,
/// sleeping for the configured delay between attempts.
///
/// The loop is blind to error type: any failure is retried, and only the
/// last one is returned. A zero `max_attempts` is treated as one attempt.
pub(crate) async fn with_retries<F, Fut, T>(
    config: &RetryConfig,
    mut operation: F,
) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let budget = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < budget => {
                tracing::warn!(
                    attempt,
                    budget,
                    error = %error,
                    "embedding request failed, retrying"
                );
                tokio::time::sleep(config.delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
