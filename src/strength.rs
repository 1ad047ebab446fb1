//! Password strength scoring.
//!
//! The score is a sum of fixed bonuses and penalties over independent
//! content checks. It is not clamped. The three-way [`Strength`] rating
//! and the bar [`meter`](crate::meter) read the same score against
//! different thresholds.

use std::fmt;

use crate::meter::{BarState, Meter};
use crate::pass::CharClass;

const STEP: i32 = 10;

const LENGTH_TIERS: [usize; 3] = [8, 12, 16];
const LETTER_RUN: usize = 4;
const DIGIT_RUN: usize = 3;
const REPEAT_RUN: usize = 3;

const MEDIUM_MIN: i32 = 30;
const STRONG_MIN: i32 = 50;

/// Score a password.
pub fn score(password: &str) -> i32 {
    let chars: Vec<char> = password.chars().collect();
    let mut score = 0;

    for tier in LENGTH_TIERS {
        if chars.len() >= tier {
            score += STEP;
        }
    }

    if chars.iter().any(|c| c.is_ascii_lowercase()) {
        score += STEP;
    }
    if chars.iter().any(|c| c.is_ascii_uppercase()) {
        score += STEP;
    }
    if chars.iter().any(|c| c.is_ascii_digit()) {
        score += STEP;
    }
    if chars
        .iter()
        .any(|&c| CharClass::of(c) == Some(CharClass::Symbol))
    {
        score += STEP;
    }

    if has_repeat(&chars) {
        score -= STEP;
    }
    if longest_run(&chars, |c| c.is_ascii_alphabetic()) >= LETTER_RUN {
        score += STEP;
    }
    if longest_run(&chars, |c| c.is_ascii_digit()) >= DIGIT_RUN {
        score += STEP;
    }

    score
}

/// Any character repeated three times in a row. Line terminators never
/// count as the repeated character.
fn has_repeat(chars: &[char]) -> bool {
    chars.windows(REPEAT_RUN).any(|w| {
        !matches!(w[0], '\n' | '\r' | '\u{2028}' | '\u{2029}') && w.iter().all(|&c| c == w[0])
    })
}

/// Length of the longest run of consecutive chars matching `pred`.
fn longest_run(chars: &[char], pred: impl Fn(&char) -> bool) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in chars {
        if pred(c) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Qualitative strength rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn from_score(score: i32) -> Self {
        if score < MEDIUM_MIN {
            Strength::Weak
        } else if score < STRONG_MIN {
            Strength::Medium
        } else {
            Strength::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    /// Style class name for renderers.
    pub fn class_name(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score, rating and bar state for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub score: i32,
    pub strength: Strength,
    pub bars: BarState,
}

/// Assess a password against the default four-bar meter.
pub fn assess(password: &str) -> Assessment {
    assess_with(password, &Meter::default())
}

pub fn assess_with(password: &str, meter: &Meter) -> Assessment {
    let score = score(password);
    Assessment {
        score,
        strength: Strength::from_score(score),
        bars: meter.state(score),
    }
}
