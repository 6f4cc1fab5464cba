/// Feedback tier derived from the backend's `scoringEffect` signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringTier {
    Miss,
    Okay,
    Great,
    Perfect,
}

impl ScoringTier {
    /// Maps the raw signal to a tier. Anything outside 1..=4 (including the
    /// backend's idle value 0) means "no feedback".
    pub fn from_signal(raw: i64) -> Option<ScoringTier> {
        match raw {
            1 => Some(ScoringTier::Miss),
            2 => Some(ScoringTier::Okay),
            3 => Some(ScoringTier::Great),
            4 => Some(ScoringTier::Perfect),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringTier::Miss => "X",
            ScoringTier::Okay => "Okay",
            ScoringTier::Great => "Great!",
            ScoringTier::Perfect => "PERFECT!",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoringTier::Miss => "#FF0000",
            ScoringTier::Okay => "#FF8800",
            ScoringTier::Great => "#00FF80",
            ScoringTier::Perfect => "#00FFE5",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoringTier::Miss => "tier tier-miss",
            ScoringTier::Okay => "tier tier-okay",
            ScoringTier::Great => "tier tier-great",
            ScoringTier::Perfect => "tier tier-perfect",
        }
    }
}
