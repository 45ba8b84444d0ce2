//! Single-owner store for the loaded collections.
//!
//! Fetches never touch shared state directly. Each completed fetch becomes
//! a [`StateUpdate`] sent over a channel to one owner task, which is the only
//! writer of the canonical collections and publishes immutable
//! [`StatsSnapshot`]s through a `watch` channel. Readers hold [`StatsView`]s.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::{
    error::{MatchupError, Result},
    models::{PlayerSeasonRecord, TeamWeekStats},
    source::StatsProvider,
};


/// Immutable view of both collections at one point in time.
#[derive(Debug, Clone, Default)]
pub struct StatsSnapshot {
    pub players: Arc<Vec<PlayerSeasonRecord>>,
    pub teams: Arc<Vec<TeamWeekStats>>,
    /// Incremented on every applied update.
    pub generation: u64,
}

/// Replacement for one collection. Updates never merge.
#[derive(Debug)]
pub enum StateUpdate {
    Players(Vec<PlayerSeasonRecord>),
    Teams(Vec<TeamWeekStats>),
}

struct Envelope {
    update: StateUpdate,
    applied: oneshot::Sender<u64>,
}

/// Result of one half of a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOutcome {
    Loaded { records: usize },
    Failed { error: String },
}

impl FetchOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub players: FetchOutcome,
    pub teams: FetchOutcome,
}

/// Read-only handle on the published snapshots.
#[derive(Debug, Clone)]
pub struct StatsView {
    rx: watch::Receiver<StatsSnapshot>,
}

impl StatsView {
    pub fn current(&self) -> StatsSnapshot {
        self.rx.borrow().clone()
    }

    /// Wait for the next published snapshot.
    pub async fn changed(&mut self) -> Result<StatsSnapshot> {
        self.rx
            .changed()
            .await
            .map_err(|_| MatchupError::StoreClosed)?;
        Ok(self.rx.borrow_and_update().clone())
    }
}

/// Handle to the owner task. Must be created inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct StatsStore {
    updates: mpsc::UnboundedSender<Envelope>,
    view: watch::Receiver<StatsSnapshot>,
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("update", &self.update)
            .finish_non_exhaustive()
    }
}

fn apply_update(view: &watch::Sender<StatsSnapshot>, update: StateUpdate) -> u64 {
    let mut generation = 0;
    view.send_modify(|snapshot| {
        match update {
            StateUpdate::Players(players) => snapshot.players = Arc::new(players),
            StateUpdate::Teams(teams) => snapshot.teams = Arc::new(teams),
        }
        snapshot.generation += 1;
        generation = snapshot.generation;
    });
    generation
}

impl StatsStore {
    /// Start the owner task with empty collections.
    pub fn spawn() -> Self {
        let (updates, mut inbox) = mpsc::unbounded_channel::<Envelope>();
        let (publisher, view) = watch::channel(StatsSnapshot::default());

        tokio::spawn(async move {
            while let Some(Envelope { update, applied }) = inbox.recv().await {
                let generation = apply_update(&publisher, update);
                // The sender may have given up waiting; the update stands.
                let _ = applied.send(generation);
            }
            debug!("state owner stopped");
        });

        Self { updates, view }
    }

    pub fn view(&self) -> StatsView {
        StatsView {
            rx: self.view.clone(),
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        self.view.borrow().clone()
    }

    /// Hand one update to the owner and wait until it is published.
    /// Returns the generation of the snapshot that carries it.
    pub async fn apply(&self, update: StateUpdate) -> Result<u64> {
        let (applied, ack) = oneshot::channel();
        self.updates
            .send(Envelope { update, applied })
            .map_err(|_| MatchupError::StoreClosed)?;
        ack.await.map_err(|_| MatchupError::StoreClosed)
    }

    /// Fetch both payloads concurrently. Each completion is applied as soon
    /// as it lands, independently of the other. A failed fetch empties its
    /// collection.
    pub async fn refresh<P: StatsProvider>(&self, provider: &P) -> RefreshReport {
        let players = async {
            match provider.fetch_players().await {
                Ok(players) => {
                    let records = players.len();
                    self.settle("players", StateUpdate::Players(players), records)
                        .await
                }
                Err(e) => {
                    warn!(error = %e, "quarterback fetch failed; clearing players");
                    self.fail("players", StateUpdate::Players(Vec::new()), e)
                        .await
                }
            }
        };

        let teams = async {
            match provider.fetch_team_stats().await {
                Ok(teams) => {
                    let records = teams.len();
                    self.settle("teams", StateUpdate::Teams(teams), records)
                        .await
                }
                Err(e) => {
                    warn!(error = %e, "team stats fetch failed; clearing teams");
                    self.fail("teams", StateUpdate::Teams(Vec::new()), e).await
                }
            }
        };

        let (players, teams) = tokio::join!(players, teams);
        RefreshReport { players, teams }
    }

    async fn settle(&self, what: &str, update: StateUpdate, records: usize) -> FetchOutcome {
        match self.apply(update).await {
            Ok(generation) => {
                info!(collection = what, records, generation, "collection replaced");
                FetchOutcome::Loaded { records }
            }
            Err(e) => FetchOutcome::Failed {
                error: e.to_string(),
            },
        }
    }

    async fn fail(&self, what: &str, reset: StateUpdate, error: MatchupError) -> FetchOutcome {
        if let Err(e) = self.apply(reset).await {
            warn!(collection = what, error = %e, "could not clear collection");
        }
        FetchOutcome::Failed {
            error: error.to_string(),
        }
    }
}
