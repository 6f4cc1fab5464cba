//! Drives a session the way the browser timers do and checks what a player sees.

use physio::protocol::{UpdateScoreRequest, UpdateScoreResponse};
use physio::time::{Duration, Instant};
use physio::{ClientConfig, GameSession, Pose, ScoringTier};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn first_cycle_shows_next_three_poses() {
    let cfg = ClientConfig::default();
    let t0 = Instant::now();
    let mut session = GameSession::from_config(&cfg, 7, t0);

    assert_eq!(
        session.queue().visible(),
        &[Pose::DownwardDog, Pose::TreePose, Pose::Warrior1]
    );

    session.begin_cycle(t0 + cfg.slow_cycle());
    // Removal animation in flight: nothing has moved yet.
    assert_eq!(session.removing(), Some(0));
    assert_eq!(session.queue().lead(), Pose::DownwardDog);

    session.finish_rotation();
    let slots = session.queue().slots();
    assert_eq!(&slots[..3], &[Pose::TreePose, Pose::Warrior1, Pose::Warrior2]);
    assert_eq!(session.queue().visible(), &slots[..3]);
    assert_eq!(session.removing(), None);
}

#[test]
fn fast_polls_between_cycles_report_the_last_value() {
    let cfg = ClientConfig::default();
    let t0 = Instant::now();
    let mut session = GameSession::from_config(&cfg, 7, t0);

    // 49 fast polls inside one cycle; the backend's signal climbs then settles.
    let signals = [1, 1, 2, 2, 3, 3, 4, 2];
    for tick in 1..50u64 {
        let raw = signals[(tick as usize) % signals.len()];
        session.observe_scoring_effect(Some(raw));
        let p = session.progress(t0 + ms(tick * u64::from(cfg.fast_poll_ms)));
        assert!(p.bar_width() <= 100.0 && p.bar_width() >= 0.0);
    }
    let last = signals[49 % signals.len()];
    assert_eq!(
        session.tier(),
        ScoringTier::from_signal(last),
        "display follows the most recent poll"
    );

    let report = session.begin_cycle(t0 + cfg.slow_cycle());
    assert_eq!(report, Some(UpdateScoreRequest { scoring_effect: last }));

    session.apply_score(&UpdateScoreResponse {
        score: 10,
        scoring_effect: Some(last),
    });
    assert_eq!(session.score(), 10);
}

#[test]
fn unreachable_backend_keeps_rotating_and_freezes_score() {
    let cfg = ClientConfig::default();
    let t0 = Instant::now();
    let mut session = GameSession::from_config(&cfg, 99, t0);

    session.observe_scoring_effect(Some(3));
    assert!(session.begin_cycle(t0 + ms(5000)).is_some());
    session.finish_rotation();

    // Backend goes away: fast polls fail, so nothing new is observed.
    for n in 2..6u64 {
        assert_eq!(session.begin_cycle(t0 + ms(5000 * n)), None);
        session.finish_rotation();
    }

    assert_eq!(session.rotations(), 5);
    assert_eq!(session.score(), 0);
    assert_eq!(session.queue().slots().len(), 4);
    // Displayed tier stays at the last successful poll.
    assert_eq!(session.tier(), Some(ScoringTier::Great));
}
