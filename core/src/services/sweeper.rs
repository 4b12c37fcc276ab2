//! Background purge of stale unverified accounts.
//!
//! Runs independently of the request path; the donor repository is the only
//! shared collaborator. Each firing deletes every donor still unverified
//! past its code expiry. Failures are logged and resolved by natural retry
//! on the next cycle, since unpurged rows stay eligible.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Timelike, Utc};
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::DonorRepository;

/// Configuration for the expiry sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to run a sweep (in seconds)
    pub interval_seconds: u64,
    /// Delay the first sweep until the next midnight UTC
    pub align_to_midnight: bool,
    /// Whether the background task runs at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 24 * 60 * 60,
            align_to_midnight: true,
            enabled: true,
        }
    }
}

/// Recurring task that deletes donors left unverified past their code expiry
pub struct ExpirySweeper<R: DonorRepository + 'static> {
    repository: Arc<R>,
    config: SweeperConfig,
}

impl<R: DonorRepository> ExpirySweeper<R> {
    pub fn new(repository: Arc<R>, config: SweeperConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single sweep cycle
    ///
    /// # Returns
    /// * `Ok(count)` - Number of stale accounts deleted
    /// * `Err(DomainError)` - If the delete failed
    pub async fn run_sweep(&self) -> Result<u64, DomainError> {
        let deleted = self
            .repository
            .delete_unverified_expired(Utc::now())
            .await?;

        if deleted > 0 {
            info!("Cleaned up {} expired unverified donors", deleted);
        }

        Ok(deleted)
    }

    /// Start the sweeper as a background task
    ///
    /// Spawns a tokio task that fires at the configured cadence. A failed
    /// cycle is logged, never fatal.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Expiry sweeper is disabled");
            return;
        }

        let interval = Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Expiry sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            if self.config.align_to_midnight {
                let delay = seconds_until_next_midnight(Utc::now());
                tokio::time::sleep(Duration::from_secs(delay)).await;
            }

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_sweep().await {
                    error!("Sweep cycle failed: {}", e);
                }
            }
        });
    }
}

/// Seconds from `now` until the next 00:00 UTC
fn seconds_until_next_midnight(now: DateTime<Utc>) -> u64 {
    let elapsed_today =
        now.num_seconds_from_midnight() as u64 + u64::from(now.nanosecond() > 0);
    24 * 60 * 60 - elapsed_today
}
