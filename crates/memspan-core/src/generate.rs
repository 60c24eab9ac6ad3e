//! Seeded quiz generation.
//!
//! All randomness flows through a single `ChaCha8Rng` so a supplied seed
//! string reproduces the exact same quiz, and reproducibility tests never
//! depend on ambient generator state.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::PoolError;
use crate::model::{Problem, Quiz, FALSE_PICKS, PROBLEM_COUNT, TRUE_PICKS, WORD_COUNT};
use crate::pools::Pools;

/// Builds quizzes over a validated pool set.
#[derive(Debug, Clone)]
pub struct Generator {
    pools: Pools,
}

impl Generator {
    /// Generator over the built-in pools.
    pub fn builtin() -> Self {
        // The built-in pools satisfy the sampling preconditions by
        // construction, so no validation is needed here.
        Self {
            pools: Pools::builtin(),
        }
    }

    /// Generator over custom pools. Validates the sampling preconditions
    /// once, so `quiz` itself cannot fail.
    pub fn with_pools(pools: Pools) -> Result<Self, PoolError> {
        pools.validate()?;
        Ok(Self { pools })
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    /// Generate a quiz. The same seed always reproduces the same quiz;
    /// without a seed the quiz is drawn from thread-local entropy.
    pub fn quiz(&self, seed: Option<&str>) -> Quiz {
        let mut rng = seeded_rng(seed);

        let mut judgments: Vec<(String, bool)> = self
            .pools
            .true_statements
            .choose_multiple(&mut rng, TRUE_PICKS)
            .map(|s| (s.clone(), true))
            .collect();
        judgments.extend(
            self.pools
                .false_statements
                .choose_multiple(&mut rng, FALSE_PICKS)
                .map(|s| (s.clone(), false)),
        );
        judgments.shuffle(&mut rng);

        // Sampled order doubles as the presentation/recall gold order.
        let words: Vec<String> = self
            .pools
            .words
            .choose_multiple(&mut rng, WORD_COUNT)
            .cloned()
            .collect();

        let mut problems = Vec::with_capacity(PROBLEM_COUNT);
        let (mut ji, mut wi) = (0, 0);
        for ordinal in 1..=PROBLEM_COUNT as u8 {
            if ordinal % 2 == 1 {
                let (statement, truth) = judgments[ji].clone();
                ji += 1;
                problems.push(Problem::Judgment {
                    ordinal,
                    statement,
                    truth,
                });
            } else {
                let word = words[wi].clone();
                wi += 1;
                problems.push(Problem::WordPrompt { ordinal, word });
            }
        }
        Quiz::new(problems)
    }
}

/// Fold an arbitrary seed string into RNG seed bytes.
fn seed_bytes(seed: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..8].copy_from_slice(&(seed.len() as u64).to_le_bytes());
    for (i, b) in seed.bytes().enumerate() {
        out[i % 32] = out[i % 32].rotate_left(5) ^ b;
    }
    out
}

fn seeded_rng(seed: Option<&str>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::from_seed(seed_bytes(s)),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}
