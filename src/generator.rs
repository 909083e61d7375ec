//! Example password generator for the four strength levels.
//!
//! The generator produces practice passwords only. Randomness comes from any
//! [`rand::Rng`] and is not required to be cryptographically secure.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::composition::{CharClass, DIGITS, GENERATOR_SYMBOLS, LOWERCASE, UPPERCASE};
use crate::types::StrengthLevel;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid security level {0}: expected 1 to 4")]
    InvalidLevel(u8),
}

/// How a freshly drawn password is patched when it misses a required class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepairMode {
    /// Write each missing class into its own random position, never
    /// overwriting the only character of another class. Every class the
    /// classifier needs for the level is guaranteed.
    #[default]
    DistinctPositions,
    /// Overwrite the final character for each missing class in turn
    /// (digit, then uppercase, then symbol). A later repair can undo an
    /// earlier one, so coverage is not guaranteed.
    LastCharacter,
}

/// Character pool the generator samples from for `level`.
pub fn level_pool(level: StrengthLevel) -> Vec<u8> {
    match level {
        StrengthLevel::Basic => LOWERCASE.to_vec(),
        StrengthLevel::Intermediate => [LOWERCASE, DIGITS].concat(),
        StrengthLevel::Advanced | StrengthLevel::Expert => {
            [LOWERCASE, UPPERCASE, DIGITS, GENERATOR_SYMBOLS].concat()
        }
    }
}

/// Classes the classifier demands before it grants `level`.
pub fn required_classes(level: StrengthLevel) -> &'static [CharClass] {
    match level {
        StrengthLevel::Basic => &[CharClass::Lower],
        StrengthLevel::Intermediate => &[CharClass::Lower, CharClass::Digit],
        StrengthLevel::Advanced | StrengthLevel::Expert => &[
            CharClass::Lower,
            CharClass::Upper,
            CharClass::Digit,
            CharClass::Symbol,
        ],
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator {
    repair: RepairMode,
}

impl PasswordGenerator {
    pub fn new(repair: RepairMode) -> Self {
        Self { repair }
    }

    pub fn repair_mode(&self) -> RepairMode {
        self.repair
    }

    /// Generates a password for a raw level number.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidLevel`] for anything outside 1..=4.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        level: u8,
        rng: &mut R,
    ) -> Result<SecretString, GeneratorError> {
        let level = StrengthLevel::try_from(level).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password generation rejected: {}", _e);
        })?;
        Ok(self.generate_level(level, rng))
    }

    pub fn generate_level<R: Rng + ?Sized>(&self, level: StrengthLevel, rng: &mut R) -> SecretString {
        let chars = self.generate_chars(level, rng);
        SecretString::new(chars.into_iter().collect::<String>().into())
    }

    fn generate_chars<R: Rng + ?Sized>(&self, level: StrengthLevel, rng: &mut R) -> Vec<char> {
        let pool = level_pool(level);
        let mut chars: Vec<char> = (0..level.min_length())
            .map(|_| pick(&pool, rng))
            .collect();

        match self.repair {
            RepairMode::LastCharacter => repair_last_character(&mut chars, level, rng),
            RepairMode::DistinctPositions => repair_distinct_positions(&mut chars, level, rng),
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("generated {} password ({} chars)", level, chars.len());

        chars
    }
}

/// Generates a password for `level` with the default repair mode.
pub fn generate_password<R: Rng + ?Sized>(
    level: u8,
    rng: &mut R,
) -> Result<SecretString, GeneratorError> {
    PasswordGenerator::default().generate(level, rng)
}

fn pick<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> char {
    pool[rng.gen_range(0..pool.len())] as char
}

fn contains_class(chars: &[char], class: CharClass) -> bool {
    chars.iter().any(|&c| CharClass::of(c) == Some(class))
}

fn class_count(chars: &[char], class: CharClass) -> usize {
    chars.iter().filter(|&&c| CharClass::of(c) == Some(class)).count()
}

fn repair_last_character<R: Rng + ?Sized>(chars: &mut [char], level: StrengthLevel, rng: &mut R) {
    let Some(last) = chars.len().checked_sub(1) else {
        return;
    };
    if level >= StrengthLevel::Intermediate && !contains_class(chars, CharClass::Digit) {
        chars[last] = pick(DIGITS, rng);
    }
    if level >= StrengthLevel::Advanced {
        if !contains_class(chars, CharClass::Upper) {
            chars[last] = pick(UPPERCASE, rng);
        }
        if !contains_class(chars, CharClass::Symbol) {
            chars[last] = pick(GENERATOR_SYMBOLS, rng);
        }
    }
}

fn repair_distinct_positions<R: Rng + ?Sized>(
    chars: &mut [char],
    level: StrengthLevel,
    rng: &mut R,
) {
    let mut repaired: Vec<usize> = Vec::new();

    for &class in required_classes(level) {
        if contains_class(chars, class) {
            continue;
        }

        // Positions safe to overwrite: not already repaired, and not the
        // only character of its class.
        let view: &[char] = chars;
        let candidates: Vec<usize> = (0..view.len())
            .filter(|i| !repaired.contains(i))
            .filter(|&i| match CharClass::of(view[i]) {
                Some(current) => class_count(view, current) > 1,
                None => true,
            })
            .collect();

        if candidates.is_empty() {
            continue;
        }
        let position = candidates[rng.gen_range(0..candidates.len())];
        chars[position] = pick(class.pool(), rng);
        repaired.push(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::classify;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use secrecy::ExposeSecret;

    #[test]
    fn test_generate_lengths() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for (level, expected) in [(1u8, 8usize), (2, 10), (3, 12), (4, 16)] {
            let pwd = generate_password(level, &mut rng).unwrap();
            assert_eq!(pwd.expose_secret().chars().count(), expected);
        }
    }

    #[test]
    fn test_generate_invalid_levels() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            generate_password(0, &mut rng),
            Err(GeneratorError::InvalidLevel(0))
        ));
        assert!(matches!(
            generate_password(5, &mut rng),
            Err(GeneratorError::InvalidLevel(5))
        ));
    }

    #[test]
    fn test_level_one_is_lowercase_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let pwd = generate_password(1, &mut rng).unwrap();
            assert!(pwd.expose_secret().chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_level_two_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..50 {
            let pwd = generate_password(2, &mut rng).unwrap();
            let s = pwd.expose_secret();
            assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
            assert!(s.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_distinct_repair_reaches_requested_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let generator = PasswordGenerator::new(RepairMode::DistinctPositions);
        for level in StrengthLevel::ALL {
            for _ in 0..200 {
                let pwd = generator.generate_level(level, &mut rng);
                assert_eq!(classify(pwd.expose_secret()).level, level);
            }
        }
    }

    #[test]
    fn test_last_character_repair_adds_digit() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut chars: Vec<char> = "abcdefghij".chars().collect();
        repair_last_character(&mut chars, StrengthLevel::Intermediate, &mut rng);
        assert_eq!(&chars[..9], &"abcdefghi".chars().collect::<Vec<_>>()[..]);
        assert!(chars[9].is_ascii_digit());
    }

    #[test]
    fn test_last_character_repair_can_lose_uppercase() {
        // Uppercase is written to the last slot, then replaced by the symbol.
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut chars: Vec<char> = "abcdefghij12".chars().collect();
        repair_last_character(&mut chars, StrengthLevel::Advanced, &mut rng);
        assert!(!contains_class(&chars, CharClass::Upper));
        assert!(contains_class(&chars, CharClass::Symbol));
        assert_eq!(chars.len(), 12);
    }

    #[test]
    fn test_distinct_repair_fills_every_missing_class() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut chars: Vec<char> = "abcdefghijkl".chars().collect();
        repair_distinct_positions(&mut chars, StrengthLevel::Advanced, &mut rng);
        for class in required_classes(StrengthLevel::Advanced) {
            assert!(contains_class(&chars, *class), "missing {:?}", class);
        }
    }

    #[test]
    fn test_distinct_repair_keeps_sole_representative() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        // One lowercase letter, everything else digits.
        let mut chars: Vec<char> = "a999999999".chars().collect();
        repair_distinct_positions(&mut chars, StrengthLevel::Advanced, &mut rng);
        assert_eq!(chars[0], 'a');
        assert!(contains_class(&chars, CharClass::Upper));
        assert!(contains_class(&chars, CharClass::Symbol));
    }

    proptest! {
        #[test]
        fn generated_length_matches_level(seed in any::<u64>(), level in 1u8..=4) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let pwd = generate_password(level, &mut rng).unwrap();
            let expected = StrengthLevel::try_from(level).unwrap().min_length();
            prop_assert_eq!(pwd.expose_secret().chars().count(), expected);
        }

        #[test]
        fn legacy_repair_keeps_length(seed in any::<u64>(), level in 1u8..=4) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let generator = PasswordGenerator::new(RepairMode::LastCharacter);
            let pwd = generator.generate(level, &mut rng).unwrap();
            let expected = StrengthLevel::try_from(level).unwrap().min_length();
            prop_assert_eq!(pwd.expose_secret().chars().count(), expected);
        }

        #[test]
        fn out_of_range_levels_fail(level in 5u8..=u8::MAX) {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            prop_assert_eq!(generate_password(level, &mut rng).err(), Some(GeneratorError::InvalidLevel(level)));
        }
    }
}
