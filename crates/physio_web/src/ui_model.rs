//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! route inventory and the view helpers on the host.

use physio::ScoringTier;

pub const BACKGROUND_IMAGE: &str = "/bg.svg";
pub const REFRESH_ICON: &str = "/start.svg";
pub const APP_TITLE: &str = "Phys.io";

/// Width of the countdown bar track, in CSS pixels.
pub const PROGRESS_TRACK_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Game,
    Leaderboard,
}

impl AppRoute {
    /// Router segment; the game sits at the root.
    pub fn segment(self) -> &'static str {
        match self {
            AppRoute::Game => "",
            AppRoute::Leaderboard => "leaderboard",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.segment())
    }

    pub fn label(self) -> &'static str {
        match self {
            AppRoute::Game => "Home",
            AppRoute::Leaderboard => "Leaderboard",
        }
    }

    /// Where the navigation link on this page points.
    pub fn nav_target(self) -> AppRoute {
        match self {
            AppRoute::Game => AppRoute::Leaderboard,
            AppRoute::Leaderboard => AppRoute::Game,
        }
    }
}

/// Holds at most one outstanding one-shot timer. Dropping a handle cancels
/// its timer, so [`TimerSlot::take`] on teardown stops a pending callback.
#[derive(Debug)]
pub struct TimerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> TimerSlot<H> {
    /// Stores `handle` and returns the one it displaces, if any.
    pub fn arm(&mut self, handle: H) -> Option<H> {
        self.handle.replace(handle)
    }

    pub fn take(&mut self) -> Option<H> {
        self.handle.take()
    }
}

pub fn slot_class(idx: usize, removing: Option<usize>) -> &'static str {
    if removing == Some(idx) {
        "pose-slot removed"
    } else {
        "pose-slot"
    }
}

/// Inline style for the countdown bar fill; `width` is a 0..=100 percentage
/// of the track.
pub fn progress_bar_style(width: f64) -> String {
    let px = PROGRESS_TRACK_PX * width.clamp(0.0, 100.0) / 100.0;
    format!("width: {px:.1}px;")
}

pub fn tier_style(tier: ScoringTier) -> String {
    format!("color: {};", tier.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(AppRoute::Game.path(), "/");
        assert_eq!(AppRoute::Leaderboard.path(), "/leaderboard");
        for r in [AppRoute::Game, AppRoute::Leaderboard] {
            assert!(!r.segment().starts_with('/'));
            assert!(!r.label().trim().is_empty());
        }
    }

    #[test]
    fn pages_link_to_each_other() {
        assert_eq!(AppRoute::Game.nav_target(), AppRoute::Leaderboard);
        assert_eq!(AppRoute::Leaderboard.nav_target(), AppRoute::Game);
        assert_eq!(AppRoute::Leaderboard.nav_target().label(), "Home");
    }

    #[derive(Debug)]
    struct CountedHandle(std::rc::Rc<std::cell::Cell<u32>>);

    impl Drop for CountedHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn timer_slot_hands_back_displaced_handle() {
        let mut slot = TimerSlot::default();
        assert_eq!(slot.arm(1u32), None);
        assert_eq!(slot.arm(2), Some(1));
        assert_eq!(slot.take(), Some(2));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn teardown_drops_the_pending_handle() {
        let cancelled = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut slot = TimerSlot::default();
        slot.arm(CountedHandle(cancelled.clone()));
        assert_eq!(cancelled.get(), 0);

        drop(slot.take());
        assert_eq!(cancelled.get(), 1);
        assert!(slot.take().is_none());
    }

    #[test]
    fn only_the_removing_slot_is_marked() {
        assert_eq!(slot_class(0, Some(0)), "pose-slot removed");
        assert_eq!(slot_class(1, Some(0)), "pose-slot");
        assert_eq!(slot_class(0, None), "pose-slot");
    }

    #[test]
    fn progress_style_clamps() {
        assert_eq!(progress_bar_style(100.0), "width: 100.0px;");
        assert_eq!(progress_bar_style(42.0), "width: 42.0px;");
        assert_eq!(progress_bar_style(-5.0), "width: 0.0px;");
        assert_eq!(progress_bar_style(250.0), "width: 100.0px;");
    }

    #[test]
    fn tier_style_uses_tier_color() {
        assert_eq!(tier_style(ScoringTier::Perfect), "color: #00FFE5;");
    }
}
