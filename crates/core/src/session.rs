//! Client-side game state for one mounted game view.
//!
//! The browser drives this with two timers: a fast poll that feeds scoring
//! signals in, and a slow cycle that rotates the pose queue and emits score
//! reports. Nothing here performs I/O; callers turn the returned requests
//! into HTTP calls and feed replies back.

use tracing::debug;

use crate::config::ClientConfig;
use crate::cycle::{CycleClock, Progress};
use crate::pending::PendingScore;
use crate::pose::Pose;
use crate::prng::Prng;
use crate::protocol::{CurrentPoseRequest, UpdateScoreRequest, UpdateScoreResponse};
use crate::queue::PoseQueue;
use crate::tier::ScoringTier;
use crate::time::{Duration, Instant};

/// Slot index that animates out when the queue advances.
pub const LEAD_SLOT: usize = 0;

#[derive(Debug, Clone)]
pub struct GameSession {
    queue: PoseQueue,
    removing: Option<usize>,
    tier: Option<ScoringTier>,
    score: i64,
    pending: PendingScore,
    clock: CycleClock,
    rng: Prng,
    rotations: u64,
}

impl GameSession {
    pub fn new(seed: u64, now: Instant, slow_cycle: Duration) -> Self {
        Self {
            queue: PoseQueue::seeded(),
            removing: None,
            tier: None,
            score: 0,
            pending: PendingScore::new(),
            clock: CycleClock::new(now, slow_cycle),
            rng: Prng::new(seed),
            rotations: 0,
        }
    }

    pub fn from_config(cfg: &ClientConfig, seed: u64, now: Instant) -> Self {
        Self::new(seed, now, cfg.slow_cycle())
    }

    pub fn queue(&self) -> &PoseQueue {
        &self.queue
    }

    pub fn removing(&self) -> Option<usize> {
        self.removing
    }

    pub fn tier(&self) -> Option<ScoringTier> {
        self.tier
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn pending(&self) -> Option<i64> {
        self.pending.peek()
    }

    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    pub fn progress(&self, now: Instant) -> Progress {
        self.clock.progress(now)
    }

    /// Fast-poll result. Updates the displayed tier and the pending report.
    pub fn observe_scoring_effect(&mut self, raw: Option<i64>) -> Option<ScoringTier> {
        self.tier = raw.and_then(ScoringTier::from_signal);
        self.pending.observe(raw);
        self.tier
    }

    /// Slow-cycle tick. Marks the lead slot as leaving, restarts the countdown
    /// and takes the pending contribution if one is reportable.
    ///
    /// The queue itself advances in [`GameSession::finish_rotation`], after
    /// the removal animation.
    pub fn begin_cycle(&mut self, now: Instant) -> Option<UpdateScoreRequest> {
        self.removing = Some(LEAD_SLOT);
        self.clock.restart(now);
        let report = self
            .pending
            .take()
            .map(|scoring_effect| UpdateScoreRequest { scoring_effect });
        debug!(?report, "cycle started");
        report
    }

    /// Manual advance: same animation as a cycle, without reporting a score.
    pub fn begin_skip(&mut self) {
        self.removing = Some(LEAD_SLOT);
    }

    /// Completes a rotation started by a cycle or a skip. Returns the new lead pose.
    pub fn finish_rotation(&mut self) -> Pose {
        let dropped = self.queue.rotate(&mut self.rng);
        self.removing = None;
        self.rotations += 1;
        debug!(
            dropped = dropped.name(),
            lead = self.queue.lead().name(),
            "pose queue rotated"
        );
        self.queue.lead()
    }

    /// Replaces the whole queue with fresh random poses.
    pub fn refresh(&mut self) -> Pose {
        self.queue.refresh(&mut self.rng);
        self.queue.lead()
    }

    /// The backend owns the score; its reply replaces ours verbatim.
    pub fn apply_score(&mut self, reply: &UpdateScoreResponse) {
        self.score = reply.score;
    }

    pub fn lead_report(&self) -> CurrentPoseRequest {
        CurrentPoseRequest {
            pose_value: self.queue.lead(),
        }
    }
}
