//! Character composition of a password - which classes are present and how long it is.

/// Characters counted as symbols by the classifier.
pub const CLASSIFIER_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
/// Symbols the generator draws from. Every one of them is in [`CLASSIFIER_SYMBOLS`].
pub const GENERATOR_SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The four character classes the classifier looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharClass {
    /// Classifies a single character. Anything outside the four classes
    /// (whitespace, non-ASCII letters, `~`, backtick) yields `None`.
    pub fn of(c: char) -> Option<CharClass> {
        if c.is_ascii_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_ascii_uppercase() {
            Some(CharClass::Upper)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if CLASSIFIER_SYMBOLS.contains(c) {
            Some(CharClass::Symbol)
        } else {
            None
        }
    }

    /// Pool the generator uses when it has to inject this class.
    pub fn pool(self) -> &'static [u8] {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => GENERATOR_SYMBOLS,
        }
    }
}

/// Items of the requirements checklist shown next to the strength bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    MinLength,
    Digits,
    Uppercase,
    Symbols,
}

impl Requirement {
    pub fn label(self) -> &'static str {
        match self {
            Requirement::MinLength => "8+ chars",
            Requirement::Digits => "Numbers",
            Requirement::Uppercase => "Uppercase",
            Requirement::Symbols => "Symbols",
        }
    }
}

/// Composition flags derived from a password string.
///
/// Recomputed on every evaluation; never cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordComposition {
    /// Length in UTF-16 code units, so a character outside the Basic
    /// Multilingual Plane (most emoji) counts as two.
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl PasswordComposition {
    pub fn of(password: &str) -> Self {
        let mut composition = PasswordComposition::default();
        for c in password.chars() {
            composition.length += c.len_utf16();
            match CharClass::of(c) {
                Some(CharClass::Lower) => composition.has_lower = true,
                Some(CharClass::Upper) => composition.has_upper = true,
                Some(CharClass::Digit) => composition.has_digit = true,
                Some(CharClass::Symbol) => composition.has_symbol = true,
                None => {}
            }
        }
        composition
    }

    pub fn has(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.has_lower,
            CharClass::Upper => self.has_upper,
            CharClass::Digit => self.has_digit,
            CharClass::Symbol => self.has_symbol,
        }
    }

    /// True when all four classes are present.
    pub fn has_all_classes(&self) -> bool {
        self.has_lower && self.has_upper && self.has_digit && self.has_symbol
    }

    pub fn checklist(&self) -> [(Requirement, bool); 4] {
        [
            (Requirement::MinLength, self.length >= 8),
            (Requirement::Digits, self.has_digit),
            (Requirement::Uppercase, self.has_upper),
            (Requirement::Symbols, self.has_symbol),
        ]
    }
}
