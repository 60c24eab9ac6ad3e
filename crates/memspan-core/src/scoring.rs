//! Recall and judgment scoring.
//!
//! Pure functions over recorded answers; nothing here mutates session
//! state, so scores can be recomputed at any time.

use serde::{Deserialize, Serialize};

use crate::session::AnswerRecord;

/// Marker used when a recall slot was left blank.
pub const NOT_SUBMITTED: &str = "not submitted";

/// One scored recall slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallEntry {
    /// Even ordinal the word was shown at.
    pub ordinal: u8,
    /// The word presented during the quiz.
    pub gold: String,
    /// Trimmed submission; `None` when nothing but whitespace was entered.
    pub submitted: Option<String>,
    /// Exact, case-sensitive match against the gold word.
    pub correct: bool,
}

impl RecallEntry {
    /// The submission, or the explicit blank marker.
    pub fn submitted_or_marker(&self) -> &str {
        self.submitted.as_deref().unwrap_or(NOT_SUBMITTED)
    }
}

/// Subscores of a finished session. Each is bounded by 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub judgment: u32,
    pub recall: u32,
}

impl Scores {
    /// Combined score out of 10.
    pub fn total(self) -> u32 {
        self.judgment + self.recall
    }
}

/// Score recalled words against the gold words.
///
/// Submissions map positionally onto the gold order; missing entries count
/// as empty. Each submission is trimmed, then compared with case-sensitive
/// exact equality. Blank submissions are always incorrect.
pub fn score_recall(gold: &[String], submitted: &[String]) -> Vec<RecallEntry> {
    gold.iter()
        .enumerate()
        .map(|(i, g)| {
            let trimmed = submitted.get(i).map(|s| s.trim()).unwrap_or("");
            RecallEntry {
                ordinal: (i as u8 + 1) * 2,
                gold: g.clone(),
                submitted: (!trimmed.is_empty()).then(|| trimmed.to_string()),
                correct: trimmed == g.as_str(),
            }
        })
        .collect()
}

/// Count correct judgment answers. Word prompts carry no correctness.
pub fn judgment_score(answers: &[AnswerRecord]) -> u32 {
    answers
        .iter()
        .filter(|r| matches!(r, AnswerRecord::Judgment { correct: true, .. }))
        .count() as u32
}

/// Count correct recall entries.
pub fn recall_score(entries: &[RecallEntry]) -> u32 {
    entries.iter().filter(|e| e.correct).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Choice;

    fn gold() -> Vec<String> {
        ["나무", "구름", "연필", "시계", "바다"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn perfect_recall_scores_five() {
        let entries = score_recall(&gold(), &gold());
        assert_eq!(recall_score(&entries), 5);
        assert_eq!(
            entries.iter().map(|e| e.ordinal).collect::<Vec<_>>(),
            vec![2, 4, 6, 8, 10]
        );
        assert!(entries.iter().all(|e| e.correct));
    }

    #[test]
    fn blank_first_slot_is_not_submitted() {
        let gold: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let submitted: Vec<String> = ["", "x", "y", "z", "w"].iter().map(|s| s.to_string()).collect();
        let entries = score_recall(&gold, &submitted);

        assert_eq!(recall_score(&entries), 0);
        assert_eq!(entries[0].submitted, None);
        assert_eq!(entries[0].submitted_or_marker(), NOT_SUBMITTED);
        for entry in &entries[1..] {
            assert!(entry.submitted.is_some());
            assert!(!entry.correct);
        }
    }

    #[test]
    fn submissions_are_trimmed_before_comparison() {
        let entries = score_recall(&gold(), &[" 나무 ".to_string()]);
        assert!(entries[0].correct);
        assert_eq!(entries[0].submitted.as_deref(), Some("나무"));
        // Whitespace-only trims down to a blank.
        let entries = score_recall(&gold(), &["   ".to_string()]);
        assert!(!entries[0].correct);
        assert_eq!(entries[0].submitted, None);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let gold = vec!["Apple".to_string()];
        let entries = score_recall(&gold, &["apple".to_string()]);
        assert!(!entries[0].correct);
        let entries = score_recall(&gold, &["Apple".to_string()]);
        assert!(entries[0].correct);
    }

    #[test]
    fn short_submission_pads_as_blank() {
        let entries = score_recall(&gold(), &[]);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.submitted.is_none() && !e.correct));
    }

    #[test]
    fn judgment_score_counts_only_correct_judgments() {
        let answers = vec![
            AnswerRecord::Judgment {
                ordinal: 1,
                statement: "s1".into(),
                chosen: Choice::True,
                truth: true,
                correct: true,
            },
            AnswerRecord::WordShown {
                ordinal: 2,
                word: "나무".into(),
            },
            AnswerRecord::Judgment {
                ordinal: 3,
                statement: "s2".into(),
                chosen: Choice::True,
                truth: false,
                correct: false,
            },
        ];
        assert_eq!(judgment_score(&answers), 1);
    }

    #[test]
    fn total_adds_both_subscores() {
        let scores = Scores {
            judgment: 3,
            recall: 5,
        };
        assert_eq!(scores.total(), 8);
    }
}
