use rand::SeedableRng;
use rand::rngs::StdRng;

use passgauge::{Meter, Strength, Tier, assess, assess_with, bar_state, generate, score};

#[test]
fn repeated_lowercase_scores_twenty() {
    let a = assess("aaaaaaaa");
    assert_eq!(a.score, 20);
    assert_eq!(a.strength, Strength::Weak);
    // 20 sits on the lower edge of the three-bar band
    assert_eq!((a.bars.lit, a.bars.tier), (3, Tier::Warning));
}

#[test]
fn rating_and_meter_use_separate_thresholds() {
    let score = 35;
    assert_eq!(Strength::from_score(score), Strength::Medium);
    let bars = bar_state(score, 4).unwrap();
    assert_eq!((bars.lit, bars.tier), (3, Tier::Warning));

    // Medium rating with every bar lit
    assert_eq!(Strength::from_score(40), Strength::Medium);
    let bars = bar_state(40, 4).unwrap();
    assert_eq!((bars.lit, bars.tier), (4, Tier::Safe));

    // Weak rating with three bars
    assert_eq!(Strength::from_score(25), Strength::Weak);
    let bars = bar_state(25, 4).unwrap();
    assert_eq!((bars.lit, bars.tier), (3, Tier::Warning));
}

#[test]
fn scoring_is_pure() {
    for pw in ["", "aaaaaaaa", "Tr0ub4dor&3", "correct horse battery staple"] {
        assert_eq!(score(pw), score(pw));
        assert_eq!(assess(pw), assess(pw));
    }
}

#[test]
fn strong_generated_password() {
    let mut rng = StdRng::seed_from_u64(31);
    let p = generate(&mut rng, 32, true, true, true).unwrap();
    let a = assess(p.as_str());
    // length tiers plus the repaired digit and symbol
    assert!(a.score >= 50, "{}", a.score);
    assert_eq!(a.strength, Strength::Strong);
    assert_eq!(a.bars.lit, 4);
}

#[test]
fn custom_meter_width() {
    let meter = Meter::new(6).unwrap();
    let a = assess_with("Abcdefgh123!xyzQ", &meter);
    assert_eq!(a.score, 90);
    assert_eq!((a.bars.lit, a.bars.total, a.bars.tier), (6, 6, Tier::Safe));
}

#[test]
fn score_range_extremes() {
    assert_eq!(score("!!!"), 0);
    assert_eq!(score("..."), -10);
    assert_eq!(score("Abcdefgh123!xyzQ"), 90);
}
