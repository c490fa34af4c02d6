//! Readiness probe for the application under test
//!
//! The harness does not own the app; it is pointed at a running instance.
//! Before any browser work starts, poll the base URL until it answers with a
//! success status, so an app that is still warming up does not surface as a
//! wall of visibility timeouts.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{E2eError, E2eResult};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Wait for the target to respond at `base_url` within `timeout`.
pub async fn wait_for_ready(base_url: &str, timeout: Duration) -> E2eResult<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let start = std::time::Instant::now();
    let mut attempts = 0;

    while start.elapsed() < timeout {
        attempts += 1;

        match client.get(base_url).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("Target is ready at {}", base_url);
                return Ok(());
            }
            Ok(resp) => {
                warn!("Readiness probe returned {}", resp.status());
            }
            Err(e) => {
                if attempts == 1 {
                    info!("Waiting for target at {}...", base_url);
                }
                // Connection refused is expected while the target starts up
                if !e.is_connect() {
                    warn!("Readiness probe error: {}", e);
                }
            }
        }

        sleep(POLL_INTERVAL).await;
    }

    Err(E2eError::TargetNotReady {
        url: base_url.to_string(),
        attempts,
    })
}
