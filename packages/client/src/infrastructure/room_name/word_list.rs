//! Room names built from random words, e.g. `happyturtlesjumpquickly`.
//!
//! A name follows one of a few word-category patterns; each category is
//! filled with a random word and the words are concatenated without
//! separators. All words are lowercase ASCII so generated names are valid
//! room names as they are.

use std::sync::{Mutex, PoisonError};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::domain::RoomNameGenerator;

#[derive(Debug, Clone, Copy)]
enum WordCategory {
    Adjective,
    PluralNoun,
    Verb,
    Adverb,
}

use WordCategory::{Adjective, Adverb, PluralNoun, Verb};

const PATTERNS: &[&[WordCategory]] = &[
    &[Adjective, PluralNoun, Verb, Adverb],
    &[Adjective, Adjective, PluralNoun],
    &[PluralNoun, Verb, Adverb],
    &[Adjective, PluralNoun, Verb],
];

const ADJECTIVES: &[&str] = &[
    "happy", "blue", "brave", "calm", "clever", "eager", "gentle", "golden", "quiet", "rapid",
    "silent", "sunny", "tiny", "vast", "wild", "witty", "bright", "cosmic", "fuzzy", "lucky",
];

const PLURAL_NOUNS: &[&str] = &[
    "turtles", "foxes", "owls", "rivers", "comets", "pianos", "lanterns", "otters", "ideas",
    "meadows", "robots", "sparrows", "islands", "whales", "clouds", "pebbles", "poets",
    "engines", "tigers", "maples",
];

const VERBS: &[&str] = &[
    "jump", "sing", "glow", "drift", "wander", "dance", "whisper", "travel", "gather", "shine",
    "build", "listen", "climb", "float", "laugh", "meet", "orbit", "paint", "race", "swim",
];

const ADVERBS: &[&str] = &[
    "quickly", "softly", "boldly", "gladly", "happily", "loudly", "calmly", "gently", "freely",
    "brightly", "rarely", "slowly", "warmly", "wisely", "together", "often", "daily", "early",
    "abroad", "upward",
];

/// Room name generator drawing words from built-in lists
#[derive(Debug)]
pub struct WordListRoomNameGenerator {
    rng: Mutex<StdRng>,
}

impl WordListRoomNameGenerator {
    /// Generator seeded from the operating system's entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Generator producing a reproducible sequence of names
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for WordListRoomNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomNameGenerator for WordListRoomNameGenerator {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let pattern = PATTERNS.choose(&mut *rng).copied().unwrap_or(PATTERNS[0]);
        pattern
            .iter()
            .map(|category| {
                let words = match category {
                    Adjective => ADJECTIVES,
                    PluralNoun => PLURAL_NOUNS,
                    Verb => VERBS,
                    Adverb => ADVERBS,
                };
                words.choose(&mut *rng).copied().unwrap_or_default()
            })
            .collect()
    }
}
