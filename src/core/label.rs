use std::fmt;
use crate::models::{MatchLabel, PresentationTier};

pub const EXCELLENT_THRESHOLD: u8 = 85;
pub const GOOD_THRESHOLD: u8 = 70;
pub const MODERATE_THRESHOLD: u8 = 50;

/// Map a score onto its label band
///
/// Each band includes its lower bound, so the four bands partition
/// `0..=100` without gaps.
pub fn classify(score: u8) -> MatchLabel {
    if score >= EXCELLENT_THRESHOLD {
        MatchLabel::Excellent
    } else if score >= GOOD_THRESHOLD {
        MatchLabel::Good
    } else if score >= MODERATE_THRESHOLD {
        MatchLabel::Moderate
    } else {
        MatchLabel::Low
    }
}

impl MatchLabel {
    pub fn text(&self) -> &'static str {
        match self {
            MatchLabel::Excellent => "Excellent Match",
            MatchLabel::Good => "Good Match",
            MatchLabel::Moderate => "Moderate Match",
            MatchLabel::Low => "Low Match",
        }
    }

    pub fn tier(&self) -> PresentationTier {
        match self {
            MatchLabel::Excellent => PresentationTier::Success,
            MatchLabel::Good => PresentationTier::Primary,
            MatchLabel::Moderate => PresentationTier::Accent,
            MatchLabel::Low => PresentationTier::Muted,
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
