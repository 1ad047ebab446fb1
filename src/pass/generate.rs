//! Password generation.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::charset::{CharClass, CharsetSpec};
use crate::{Error, Result};

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in characters. Generated passwords are ASCII, so this is
    /// also the byte length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generate a password of `length` characters.
///
/// Lowercase letters are always drawn from. When digits or symbols are
/// requested and none were drawn, one character is overwritten with a
/// member of the missing class. Uppercase has no such guarantee.
///
/// A one-character password cannot hold both a digit and a symbol. If the
/// drawn character is a digit or symbol it is kept and the other class is
/// skipped; otherwise the digit is injected.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    include_digits: bool,
    include_symbols: bool,
    include_uppercase: bool,
) -> Result<Password> {
    let spec = CharsetSpec::new(include_digits, include_symbols, include_uppercase);
    generate_with(rng, length, &spec)
}

/// Generate a password from an explicit [`CharsetSpec`].
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    spec: &CharsetSpec,
) -> Result<Password> {
    if length == 0 {
        return Err(Error::InvalidLength(length));
    }

    let chars = spec.build();
    let mut buf = Vec::with_capacity(length);
    let mut has_digit = false;
    let mut has_symbol = false;

    for _ in 0..length {
        let c = random_byte(&chars, rng);
        match CharClass::of(c as char) {
            Some(CharClass::Digit) => has_digit = true,
            Some(CharClass::Symbol) => has_symbol = true,
            _ => {}
        }
        buf.push(c);
    }

    let mut missing = Vec::with_capacity(2);
    if spec.digits && !has_digit {
        missing.push(CharClass::Digit);
    }
    if spec.symbols && !has_symbol {
        missing.push(CharClass::Symbol);
    }

    if !missing.is_empty() {
        repair(rng, &mut buf, spec, &missing);
    }

    debug!(
        length,
        charset = chars.len(),
        repaired = missing.len(),
        "generated password"
    );

    // Safety: every byte comes from the ASCII pools in `charset`.
    Ok(Password(unsafe { String::from_utf8_unchecked(buf) }))
}

/// Overwrite one position per missing class with a random member of it.
///
/// Injected positions are never reused, and a position holding the only
/// digit or symbol is never overwritten. The only uppercase letter is
/// overwritten only when no other position is available.
fn repair<R: Rng + ?Sized>(rng: &mut R, buf: &mut [u8], spec: &CharsetSpec, missing: &[CharClass]) {
    let mut locked = vec![false; buf.len()];

    for &class in missing {
        let candidates: Vec<usize> = (0..buf.len())
            .filter(|&i| !locked[i])
            .filter(|&i| !sole_member_of(buf, i, spec, &[CharClass::Digit, CharClass::Symbol]))
            .collect();
        let preferred: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&i| !sole_member_of(buf, i, spec, &[CharClass::Uppercase]))
            .collect();

        let pool = if preferred.is_empty() {
            &candidates
        } else {
            &preferred
        };

        let Some(&pos) = pool.choose(rng) else {
            debug!(?class, length = buf.len(), "password too short to inject class");
            continue;
        };

        buf[pos] = random_byte(class.pool(), rng);
        locked[pos] = true;
        debug!(?class, "injected missing character class");
    }
}

/// True when `buf[i]` is the only character of its class and that class is
/// one of `classes` and active in `spec`.
fn sole_member_of(buf: &[u8], i: usize, spec: &CharsetSpec, classes: &[CharClass]) -> bool {
    let Some(class) = CharClass::of(buf[i] as char) else {
        return false;
    };
    if !classes.contains(&class) || !spec.is_active(class) {
        return false;
    }
    buf.iter()
        .filter(|&&b| CharClass::of(b as char) == Some(class))
        .count()
        == 1
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::pass::charset::{DIGITS, SYMBOLS};

    fn count(p: &Password, class: CharClass) -> usize {
        p.as_str()
            .chars()
            .filter(|&c| CharClass::of(c) == Some(class))
            .count()
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate(&mut rng, 0, true, true, true),
            Err(Error::InvalidLength(0))
        ));
    }

    #[test]
    fn exact_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [1, 2, 3, 4, 8, 16, 33, 128] {
            let p = generate(&mut rng, length, true, true, true).unwrap();
            assert_eq!(p.len(), length);
        }
    }

    #[test]
    fn constant_rng_draws_first_char() {
        let mut rng = StepRng::new(0, 0);
        let p = generate(&mut rng, 6, false, false, true).unwrap();
        assert_eq!(p.as_str(), "aaaaaa");
    }

    #[test]
    fn injects_digit_then_symbol_at_distinct_positions() {
        let mut rng = StepRng::new(0, 0);
        let p = generate(&mut rng, 4, true, true, false).unwrap();
        assert_eq!(p.as_str(), "0!aa");
    }

    #[test]
    fn single_char_prefers_digit() {
        let mut rng = StepRng::new(0, 0);
        let p = generate(&mut rng, 1, true, true, false).unwrap();
        assert_eq!(p.as_str(), "0");
    }

    #[test]
    fn single_char_keeps_drawn_digit_or_symbol() {
        let spec = CharsetSpec::new(true, true, false);
        let mut rng = StdRng::seed_from_u64(8);

        let mut buf = b"5".to_vec();
        repair(&mut rng, &mut buf, &spec, &[CharClass::Symbol]);
        assert_eq!(&buf, b"5");

        let mut buf = b"!".to_vec();
        repair(&mut rng, &mut buf, &spec, &[CharClass::Digit]);
        assert_eq!(&buf, b"!");
    }

    #[test]
    fn single_char_is_digit_or_symbol() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..500 {
            let p = generate(&mut rng, 1, true, true, true).unwrap();
            let class = CharClass::of(p.as_str().chars().next().unwrap());
            assert!(
                matches!(class, Some(CharClass::Digit | CharClass::Symbol)),
                "{p:?}"
            );
        }
    }

    #[test]
    fn two_chars_hold_both_classes() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let p = generate(&mut rng, 2, true, true, true).unwrap();
            assert_eq!(count(&p, CharClass::Digit), 1, "{p:?}");
            assert_eq!(count(&p, CharClass::Symbol), 1, "{p:?}");
        }
    }

    #[test]
    fn sole_digit_is_protected() {
        let spec = CharsetSpec::new(true, true, false);
        let buf = b"a5a".to_vec();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut attempt = buf.clone();
            repair(&mut rng, &mut attempt, &spec, &[CharClass::Symbol]);
            assert_eq!(attempt[1], b'5');
            assert!(SYMBOLS.contains(&attempt[0]) || SYMBOLS.contains(&attempt[2]));
        }
    }

    #[test]
    fn sole_uppercase_overwritten_only_as_last_resort() {
        let spec = CharsetSpec::new(false, true, true);
        let mut rng = StepRng::new(0, 0);

        let mut buf = b"Ab".to_vec();
        repair(&mut rng, &mut buf, &spec, &[CharClass::Symbol]);
        assert_eq!(&buf, b"A!");

        let mut buf = b"A".to_vec();
        repair(&mut rng, &mut buf, &spec, &[CharClass::Symbol]);
        assert_eq!(&buf, b"!");
    }

    #[test]
    fn repair_draws_from_class_pool() {
        let spec = CharsetSpec::new(true, false, false);
        let mut rng = StdRng::seed_from_u64(11);
        let mut buf = b"abcd".to_vec();
        repair(&mut rng, &mut buf, &spec, &[CharClass::Digit]);
        assert_eq!(buf.iter().filter(|b| DIGITS.contains(b)).count(), 1);
    }

    #[test]
    fn debug_is_redacted() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = generate(&mut rng, 12, true, true, true).unwrap();
        let shown = format!("{p:?}");
        assert_eq!(shown, "Password(<12 chars>)");
        assert!(!shown.contains(p.as_str()));
    }
}
