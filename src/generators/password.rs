// src/generators/password.rs
use thiserror::Error;
use crate::core::config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_WORD_BATCHES};
use crate::core::PolicyConfig;
use crate::generators::random::{RandomSource, ThreadRandom};
use crate::generators::validation::check_password;
use crate::utils::capitalize_first;
use crate::words::{WordList, WordListError, WordSource};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No compliant password after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    #[error("No word of {min}..={max} characters found in {batches} batches")]
    NoSuitableWord { min: usize, max: usize, batches: usize },

    #[error("Word source returned no words")]
    EmptyWordSource,

    #[error("Word list error: {0}")]
    WordList(#[from] WordListError),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Builds passwords of the form `Word` + number + special characters and
/// only hands back ones that pass the policy.
pub struct PasswordGenerator<W = WordList, R = ThreadRandom> {
    config: PolicyConfig,
    words: W,
    rng: R,
    max_attempts: usize,
    max_word_batches: usize,
}

impl PasswordGenerator {
    // Builtin dictionary and thread RNG
    pub fn new(config: PolicyConfig) -> Self {
        Self::with_sources(config, WordList::builtin(), ThreadRandom)
    }
}

impl<W: WordSource, R: RandomSource> PasswordGenerator<W, R> {
    pub fn with_sources(config: PolicyConfig, words: W, rng: R) -> Self {
        Self {
            config,
            words,
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_word_batches: DEFAULT_MAX_WORD_BATCHES,
        }
    }

    /// Cap on compose-and-validate rounds in `get_password`. Zero is raised to one.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Cap on word batches fetched while looking for a word that fits.
    pub fn max_word_batches(mut self, batches: usize) -> Self {
        self.max_word_batches = batches.max(1);
        self
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Return a password that satisfies the policy.
    ///
    /// Candidates failing validation are discarded and regenerated until the
    /// attempt cap is reached.
    pub fn get_password(&mut self) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generate_candidate()?;
            let report = check_password(&candidate, &self.config);
            if report.is_valid() {
                log::debug!("Password accepted on attempt {}", attempt);
                return Ok(candidate);
            }
            log::debug!("Attempt {} rejected: {}", attempt, report);
        }

        log::warn!("Gave up after {} attempts", self.max_attempts);
        Err(GenerationError::RetriesExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Compose one unvalidated candidate.
    pub fn generate_candidate(&mut self) -> Result<String> {
        let word = self.select_word()?;
        let number = self.rng.uniform_int(0, self.config.random_number_max());
        let specials = self.special_characters();
        Ok(format!("{}{}{}", capitalize_first(&word), number, specials))
    }

    /// Find a word whose length fits the policy's word window.
    ///
    /// Each batch is scanned once and the last fitting word wins. Batches are
    /// refetched until one contains a fit or the batch cap is hit.
    pub fn select_word(&mut self) -> Result<String> {
        let (min, max) = self.config.word_length_window();

        for batch_number in 1..=self.max_word_batches {
            let batch = self
                .words
                .words_for_entropy(self.config.password_byte_length(), &mut self.rng)?;
            if batch.is_empty() {
                return Err(GenerationError::EmptyWordSource);
            }

            let mut selected = None;
            for word in batch {
                let length = word.chars().count();
                if length >= min && length <= max {
                    selected = Some(word);
                }
            }

            match selected {
                Some(word) => return Ok(word),
                None => log::debug!("Batch {} had no word of {}..={} chars", batch_number, min, max),
            }
        }

        Err(GenerationError::NoSuitableWord {
            min,
            max,
            batches: self.max_word_batches,
        })
    }

    /// Draw the configured number of special characters, with replacement.
    pub fn special_characters(&mut self) -> String {
        let alphabet = self.config.special_characters();
        (0..self.config.num_special_characters())
            .map(|_| alphabet[self.rng.index(alphabet.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::random::SeededRandom;
    use crate::generators::validation::is_valid_password;
    use crate::models::PolicyOverrides;
    use std::cell::Cell;

    // Replays a fixed list of values, wrapping around
    struct ScriptedRandom {
        values: Vec<u64>,
        pos: usize,
    }

    impl ScriptedRandom {
        fn new(values: Vec<u64>) -> Self {
            Self { values, pos: 0 }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn uniform_int(&mut self, min: u64, max: u64) -> u64 {
            let value = self.values[self.pos % self.values.len()];
            self.pos += 1;
            value.clamp(min, max)
        }
    }

    // Hands out the same batch every time and counts calls
    struct FixedBatch {
        batch: Vec<String>,
        calls: Cell<usize>,
    }

    impl FixedBatch {
        fn new(words: &[&str]) -> Self {
            Self {
                batch: words.iter().map(|w| w.to_string()).collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl WordSource for FixedBatch {
        fn words_for_entropy(
            &self,
            _byte_length: usize,
            _rng: &mut dyn RandomSource,
        ) -> crate::words::Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.batch.clone())
        }

        fn all_words(&self) -> &[String] {
            &self.batch
        }
    }

    fn config_with(overrides: PolicyOverrides) -> PolicyConfig {
        PolicyConfig::resolve(Some(&overrides)).unwrap()
    }

    #[test]
    fn composes_word_number_and_specials() {
        let config = config_with(PolicyOverrides {
            special_characters: Some("#$%".to_string()),
            num_special_characters: Some(2),
            ..Default::default()
        });
        let words = FixedBatch::new(&["lighthouse"]);
        // number 42, then special indexes 1 and 2
        let rng = ScriptedRandom::new(vec![42, 1, 2]);
        let mut generator = PasswordGenerator::with_sources(config, words, rng);
        assert_eq!(generator.generate_candidate().unwrap(), "Lighthouse42$%");
    }

    #[test]
    fn number_suffix_is_not_padded() {
        let words = FixedBatch::new(&["lighthouse"]);
        let rng = ScriptedRandom::new(vec![7, 0]);
        let mut generator = PasswordGenerator::with_sources(PolicyConfig::default(), words, rng);
        assert_eq!(generator.generate_candidate().unwrap(), "Lighthouse7!");
    }

    #[test]
    fn keeps_mixed_case_after_first_letter() {
        let words = FixedBatch::new(&["macGregors"]);
        let rng = ScriptedRandom::new(vec![10, 0]);
        let mut generator = PasswordGenerator::with_sources(PolicyConfig::default(), words, rng);
        assert_eq!(generator.generate_candidate().unwrap(), "MacGregors10!");
    }

    #[test]
    fn last_fitting_word_in_batch_wins() {
        // default window is 8..=61
        let words = FixedBatch::new(&["lighthouse", "cat", "waterfall", "dog"]);
        let mut generator =
            PasswordGenerator::with_sources(PolicyConfig::default(), words, SeededRandom::new(5));
        assert_eq!(generator.select_word().unwrap(), "waterfall");
        assert_eq!(generator.words.calls.get(), 1);
    }

    #[test]
    fn unsatisfiable_word_window_is_bounded() {
        let words = FixedBatch::new(&["cat", "dog"]);
        let mut generator =
            PasswordGenerator::with_sources(PolicyConfig::default(), words, SeededRandom::new(5))
                .max_word_batches(3);
        let err = generator.select_word().unwrap_err();
        assert!(matches!(
            err,
            GenerationError::NoSuitableWord { min: 8, max: 61, batches: 3 }
        ));
        assert_eq!(generator.words.calls.get(), 3);
    }

    #[test]
    fn empty_batch_is_an_error() {
        let words = FixedBatch::new(&[]);
        let mut generator =
            PasswordGenerator::with_sources(PolicyConfig::default(), words, SeededRandom::new(5));
        assert!(matches!(generator.get_password(), Err(GenerationError::EmptyWordSource)));
    }

    fn three_digit_policy() -> PolicyConfig {
        // word window is 9..=60, so a nine-letter word with a one-digit
        // number comes out one char short
        config_with(PolicyOverrides {
            random_number_max: Some(999),
            min_password_length: Some(12),
            ..Default::default()
        })
    }

    #[test]
    fn retries_until_candidate_is_valid() {
        let words = FixedBatch::new(&["waterfall"]);
        // "Waterfall5!" is rejected, "Waterfall55!" passes
        let rng = ScriptedRandom::new(vec![5, 0, 55, 0]);
        let mut generator = PasswordGenerator::with_sources(three_digit_policy(), words, rng);
        assert_eq!(generator.get_password().unwrap(), "Waterfall55!");
        assert_eq!(generator.words.calls.get(), 2);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let words = FixedBatch::new(&["waterfall"]);
        let rng = ScriptedRandom::new(vec![3, 0]);
        let mut generator =
            PasswordGenerator::with_sources(three_digit_policy(), words, rng).max_attempts(4);
        assert!(matches!(
            generator.get_password(),
            Err(GenerationError::RetriesExhausted { attempts: 4 })
        ));
        assert_eq!(generator.words.calls.get(), 4);
    }

    #[test]
    fn generated_passwords_pass_validation() {
        let config = PolicyConfig::default();
        let mut generator = PasswordGenerator::with_sources(
            config.clone(),
            WordList::builtin(),
            SeededRandom::new(2024),
        );
        for _ in 0..200 {
            let password = generator.get_password().unwrap();
            assert!(is_valid_password(&password, &config), "{} failed", password);
        }
    }

    #[test]
    fn selected_words_stay_inside_window() {
        let config = config_with(PolicyOverrides {
            min_password_length: Some(12),
            max_password_length: Some(14),
            ..Default::default()
        });
        let (min, max) = config.word_length_window();
        assert_eq!((min, max), (10, 11));
        let mut generator =
            PasswordGenerator::with_sources(config, WordList::builtin(), SeededRandom::new(9));
        for _ in 0..100 {
            let word = generator.select_word().unwrap();
            let length = word.chars().count();
            assert!(length >= min && length <= max, "{} out of window", word);
        }
    }

    #[test]
    fn special_characters_cover_alphabet() {
        let config = config_with(PolicyOverrides {
            num_special_characters: Some(4),
            ..Default::default()
        });
        let alphabet: Vec<char> = config.special_characters().to_vec();
        let mut generator =
            PasswordGenerator::with_sources(config, WordList::builtin(), SeededRandom::new(77));
        let mut drawn = String::new();
        for _ in 0..2000 {
            drawn.push_str(&generator.special_characters());
        }
        assert_eq!(drawn.chars().count(), 8000);
        for c in alphabet {
            assert!(drawn.contains(c), "{} never drawn", c);
        }
    }

    #[test]
    fn default_generator_works() {
        let mut generator = PasswordGenerator::new(PolicyConfig::default());
        let password = generator.get_password().unwrap();
        assert!(is_valid_password(&password, generator.config()));
    }
}
