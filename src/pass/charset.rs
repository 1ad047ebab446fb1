//! Character pools and the effective charset for password generation.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!?@#$%^&*()_-+=<>[]{}";

/// Character class of a pool member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Classify a character, `None` if it belongs to no pool.
    pub fn of(c: char) -> Option<Self> {
        if !c.is_ascii() {
            return None;
        }
        let b = c as u8;
        if b.is_ascii_lowercase() {
            Some(CharClass::Lowercase)
        } else if b.is_ascii_uppercase() {
            Some(CharClass::Uppercase)
        } else if b.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if SYMBOLS.contains(&b) {
            Some(CharClass::Symbol)
        } else {
            None
        }
    }

    pub fn pool(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }
}

/// Which optional pools are active. Lowercase is always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetSpec {
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharsetSpec {
    pub fn new(digits: bool, symbols: bool, uppercase: bool) -> Self {
        Self {
            uppercase,
            digits,
            symbols,
        }
    }

    /// Whether characters of `class` may appear in a generated password.
    pub fn is_active(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => true,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
        }
    }

    /// Build the effective charset: lowercase, then each active pool in
    /// uppercase, digit, symbol order.
    pub fn build(&self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(self.size());
        chars.extend_from_slice(LOWERCASE);

        if self.uppercase {
            chars.extend_from_slice(UPPERCASE);
        }
        if self.digits {
            chars.extend_from_slice(DIGITS);
        }
        if self.symbols {
            chars.extend_from_slice(SYMBOLS);
        }

        chars
    }

    /// Size of the effective charset.
    pub fn size(&self) -> usize {
        let mut size = LOWERCASE.len();
        if self.uppercase {
            size += UPPERCASE.len();
        }
        if self.digits {
            size += DIGITS.len();
        }
        if self.symbols {
            size += SYMBOLS.len();
        }
        size
    }
}

impl Default for CharsetSpec {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}
