//! Segmented strength meter.
//!
//! Maps a strength score to how many bars are lit and in which tier. The
//! meter uses its own thresholds (10/20/40), separate from the
//! Weak/Medium/Strong rating.

use std::fmt;

use crate::{Error, Result};

pub const DEFAULT_BARS: usize = 4;

const TWO_BARS_MIN: i32 = 10;
const THREE_BARS_MIN: i32 = 20;
const ALL_BARS_MIN: i32 = 40;

/// Severity tier of the lit bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Danger,
    Warning,
    Safe,
}

impl Tier {
    pub fn name(self) -> &'static str {
        match self {
            Tier::Danger => "danger",
            Tier::Warning => "warning",
            Tier::Safe => "safe",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lit bar count and tier for one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarState {
    pub lit: usize,
    pub total: usize,
    pub tier: Tier,
}

impl BarState {
    /// Per-bar view, left to right: `Some(tier)` when lit, `None` when dark.
    pub fn segments(&self) -> impl Iterator<Item = Option<Tier>> + '_ {
        (0..self.total).map(move |i| (i < self.lit).then_some(self.tier))
    }
}

/// A meter with a fixed number of bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    total: usize,
}

impl Meter {
    pub fn new(total: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::NoBars);
        }
        Ok(Self { total })
    }

    pub fn state(&self, score: i32) -> BarState {
        let (lit, tier) = if score < TWO_BARS_MIN {
            (1, Tier::Danger)
        } else if score < THREE_BARS_MIN {
            (2, Tier::Warning)
        } else if score < ALL_BARS_MIN {
            (3, Tier::Warning)
        } else {
            (self.total, Tier::Safe)
        };

        BarState {
            lit: lit.min(self.total),
            total: self.total,
            tier,
        }
    }
}

impl Default for Meter {
    fn default() -> Self {
        Self {
            total: DEFAULT_BARS,
        }
    }
}

/// Bar state for `score` on a meter of `total` bars.
pub fn bar_state(score: i32, total: usize) -> Result<BarState> {
    Ok(Meter::new(total)?.state(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_tier(score: i32) -> (usize, Tier) {
        let s = Meter::default().state(score);
        (s.lit, s.tier)
    }

    #[test]
    fn tiers() {
        assert_eq!(lit_tier(-10), (1, Tier::Danger));
        assert_eq!(lit_tier(0), (1, Tier::Danger));
        assert_eq!(lit_tier(9), (1, Tier::Danger));
        assert_eq!(lit_tier(10), (2, Tier::Warning));
        assert_eq!(lit_tier(19), (2, Tier::Warning));
        assert_eq!(lit_tier(20), (3, Tier::Warning));
        assert_eq!(lit_tier(39), (3, Tier::Warning));
        assert_eq!(lit_tier(40), (4, Tier::Safe));
        assert_eq!(lit_tier(100), (4, Tier::Safe));
    }

    #[test]
    fn safe_lights_every_bar() {
        let s = bar_state(40, 7).unwrap();
        assert_eq!(s.lit, 7);
        assert_eq!(s.total, 7);
    }

    #[test]
    fn small_meters_cap_lit_count() {
        let s = bar_state(25, 2).unwrap();
        assert_eq!((s.lit, s.tier), (2, Tier::Warning));
        let s = bar_state(0, 1).unwrap();
        assert_eq!((s.lit, s.tier), (1, Tier::Danger));
    }

    #[test]
    fn zero_bars_rejected() {
        assert!(matches!(bar_state(50, 0), Err(Error::NoBars)));
        assert!(Meter::new(0).is_err());
    }

    #[test]
    fn segments_left_to_right() {
        let segs: Vec<_> = bar_state(15, 4).unwrap().segments().collect();
        assert_eq!(
            segs,
            vec![Some(Tier::Warning), Some(Tier::Warning), None, None]
        );
    }
}
