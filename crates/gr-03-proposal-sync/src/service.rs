//! # Sync Scheduler
//!
//! Orchestrates sync runs: manual admin-triggered runs and automatic
//! timer ticks share one algorithm and one busy flag.

use crate::config::SyncConfig;
use crate::domain::SyncOutcome;
use crate::ports::GovernanceClient;
use gr_01_authorization::AuthorizationGate;
use gr_02_proposals::{ProposalStore, ALLOWED_TOPICS};
use parking_lot::RwLock;
use shared_types::{EngineError, EngineResult, Principal, Timestamp};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Pulls proposals from the governance authority into the store.
pub struct SyncScheduler {
    config: SyncConfig,
    gate: AuthorizationGate,
    governance: Arc<dyn GovernanceClient>,
    proposals: Arc<RwLock<ProposalStore>>,
    /// Guards against overlapping runs across suspension points.
    busy: AtomicBool,
}

impl SyncScheduler {
    /// Create a scheduler over the authority client and proposal store.
    pub fn new(
        config: SyncConfig,
        gate: AuthorizationGate,
        governance: Arc<dyn GovernanceClient>,
        proposals: Arc<RwLock<ProposalStore>>,
    ) -> Self {
        Self {
            config,
            gate,
            governance,
            proposals,
            busy: AtomicBool::new(false),
        }
    }

    /// True while a run is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Manually trigger a sync run. Admin only.
    ///
    /// # Errors
    /// - 401/404/403 per the authorization gate
    /// - 409 if a run is already in flight
    /// - 500 if the authority fails mid-run; proposals upserted before
    ///   the failure remain (upsert is idempotent), and retrying from
    ///   scratch is safe
    pub async fn sync(&self, caller: &Principal, now: Timestamp) -> EngineResult<SyncOutcome> {
        self.gate.require_admin(caller)?;

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(EngineError::conflict("a sync run is already in progress"));
        }

        let result = self.drain_backlog().await;
        self.busy.store(false, Ordering::Release);

        let synced_count = result?;
        let completed_count = self.proposals.write().run_lifecycle_check(now) as u64;
        Ok(SyncOutcome {
            synced_count,
            completed_count,
        })
    }

    /// Timer tick: sync if idle, then run the lifecycle check.
    ///
    /// A tick that finds a run in flight is a silent no-op; a tick whose
    /// run fails logs and reports nothing. The lifecycle check runs on
    /// every tick regardless of sync traffic.
    pub async fn run_tick(&self, now: Timestamp) -> Option<SyncOutcome> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("tick skipped: sync already in progress");
            // The lifecycle check is not tied to sync
            self.proposals.write().run_lifecycle_check(now);
            return None;
        }

        let result = self.drain_backlog().await;
        self.busy.store(false, Ordering::Release);

        let completed_count = self.proposals.write().run_lifecycle_check(now) as u64;
        match result {
            Ok(synced_count) => Some(SyncOutcome {
                synced_count,
                completed_count,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "scheduled sync run failed");
                None
            }
        }
    }

    /// Spawn the recurring timer that drives `run_tick`.
    pub fn spawn_timer(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        let interval = Duration::from_secs(self.config.interval_secs);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                self.run_tick(unix_now()).await;
            }
        })
    }

    /// Page through the authority until a short page, upserting every
    /// item. Returns the number of newly ingested proposals.
    async fn drain_backlog(&self) -> EngineResult<u64> {
        let page_size = self.config.page_size;
        let mut offset = 0u64;
        let mut synced = 0u64;

        loop {
            // Suspension point: no lock is held across this await
            let page = self
                .governance
                .list_proposals(&ALLOWED_TOPICS, page_size, offset)
                .await?;
            let page_len = page.len();

            {
                let mut store = self.proposals.write();
                for fields in page {
                    if store.upsert(fields) {
                        synced += 1;
                    }
                }
            }

            if page_len < page_size as usize {
                break;
            }
            offset += page_len as u64;
        }

        tracing::info!(synced, "sync run drained authority backlog");
        Ok(synced)
    }
}

/// Wall-clock seconds since the epoch, for timer-driven ticks.
fn unix_now() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
