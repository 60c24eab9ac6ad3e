//! Statement and word pools a quiz is drawn from.

use std::collections::HashSet;

use crate::error::PoolError;
use crate::model::{FALSE_PICKS, TRUE_PICKS, WORD_COUNT};

/// Built-in statements whose truth value is `true`.
pub const TRUE_STATEMENTS: [&str; 6] = [
    "바다는 소금물이다.",
    "고양이는 포유류이다.",
    "서울은 대한민국의 수도이다.",
    "얼음은 물보다 가볍다.",
    "나무는 광합성을 한다.",
    "사람의 심장은 좌측 흉부 쪽에 있다.",
];

/// Built-in statements whose truth value is `false`.
pub const FALSE_STATEMENTS: [&str; 6] = [
    "해는 서쪽에서 뜬다.",
    "달은 낮에만 뜬다.",
    "물의 끓는점은 50도이다.",
    "사람은 잠을 자지 않아도 산다.",
    "고양이는 파충류이다.",
    "서울은 일본의 수도이다.",
];

/// Built-in word pool for the memorization prompts.
pub const WORD_POOL: [&str; 20] = [
    "나무",
    "구름",
    "연필",
    "시계",
    "바다",
    "달",
    "책",
    "꽃",
    "고래",
    "바람",
    "산",
    "강",
    "도시",
    "별",
    "비",
    "눈",
    "모래",
    "우산",
    "사과",
    "해바라기",
];

/// The three pools as an explicit value.
#[derive(Debug, Clone)]
pub struct Pools {
    pub true_statements: Vec<String>,
    pub false_statements: Vec<String>,
    pub words: Vec<String>,
}

impl Pools {
    /// The built-in pool set.
    pub fn builtin() -> Self {
        Self {
            true_statements: TRUE_STATEMENTS.iter().map(|s| s.to_string()).collect(),
            false_statements: FALSE_STATEMENTS.iter().map(|s| s.to_string()).collect(),
            words: WORD_POOL.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check the fixed sampling preconditions.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.true_statements.len() < TRUE_PICKS {
            return Err(PoolError::TooSmall {
                pool: "true statement",
                need: TRUE_PICKS,
                have: self.true_statements.len(),
            });
        }
        if self.false_statements.len() < FALSE_PICKS {
            return Err(PoolError::TooSmall {
                pool: "false statement",
                need: FALSE_PICKS,
                have: self.false_statements.len(),
            });
        }
        if self.words.len() < WORD_COUNT {
            return Err(PoolError::TooSmall {
                pool: "word",
                need: WORD_COUNT,
                have: self.words.len(),
            });
        }
        let mut seen = HashSet::new();
        for word in &self.words {
            if !seen.insert(word.as_str()) {
                return Err(PoolError::DuplicateWord { word: word.clone() });
            }
        }
        Ok(())
    }
}

impl Default for Pools {
    fn default() -> Self {
        Self::builtin()
    }
}
