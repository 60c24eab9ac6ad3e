//! The quiz session state machine.
//!
//! A session walks three phases: `Quiz` (answer ten problems in order),
//! `Recall` (retype the five presented words), `Result` (scored,
//! read-only). Inputs that do not fit the current phase are ignored
//! rather than surfaced as errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generate::Generator;
use crate::model::{Choice, Identity, Problem, Quiz, PROBLEM_COUNT, WORD_COUNT};
use crate::report::SessionReport;
use crate::scoring::{judgment_score, recall_score, score_recall, RecallEntry, Scores};

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Quiz,
    Recall,
    Result,
}

/// One recorded interaction with a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerRecord {
    /// A judged true/false statement.
    Judgment {
        ordinal: u8,
        statement: String,
        chosen: Choice,
        truth: bool,
        correct: bool,
    },
    /// A word prompt the user acknowledged. Informational only.
    WordShown { ordinal: u8, word: String },
}

/// Inputs a session accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Answer the current judgment problem.
    Choose(Choice),
    /// Acknowledge the current word prompt.
    Acknowledge,
    /// Submit the recalled words, mapped positionally to the even ordinals.
    SubmitRecall(Vec<String>),
    /// Discard the session and start over with a fresh quiz.
    Restart { seed: Option<String> },
}

/// Configuration for a new session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Optional seed for reproducible generation.
    pub seed: Option<String>,
    /// Annotative identity attached to exported reports.
    pub identity: Identity,
}

/// A single in-memory quiz session.
///
/// Owned by the caller and mutated through [`SessionState::apply`];
/// there is no global storage.
#[derive(Debug, Clone)]
pub struct SessionState {
    generator: Generator,
    quiz: Quiz,
    position: usize,
    answers: Vec<AnswerRecord>,
    gold_words: Vec<String>,
    recall_buffer: Vec<String>,
    recall: Vec<RecallEntry>,
    scores: Option<Scores>,
    phase: Phase,
    identity: Identity,
    session_id: Uuid,
    started_at: DateTime<Utc>,
}

impl SessionState {
    /// Start a session over the built-in pools.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_generator(Generator::builtin(), config)
    }

    /// Start a session over a custom generator.
    pub fn with_generator(generator: Generator, config: SessionConfig) -> Self {
        let quiz = generator.quiz(config.seed.as_deref());
        let gold_words = quiz.words();
        Self {
            generator,
            quiz,
            position: 0,
            answers: Vec::with_capacity(PROBLEM_COUNT),
            gold_words,
            recall_buffer: vec![String::new(); WORD_COUNT],
            recall: Vec::new(),
            scores: None,
            phase: Phase::Quiz,
            identity: config.identity,
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Zero-based position within the quiz, 0 through 10.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// The presented words in gold order.
    pub fn gold_words(&self) -> &[String] {
        &self.gold_words
    }

    /// The raw recall submissions, one slot per word prompt.
    pub fn recall_buffer(&self) -> &[String] {
        &self.recall_buffer
    }

    pub fn recall(&self) -> &[RecallEntry] {
        &self.recall
    }

    pub fn scores(&self) -> Option<Scores> {
        self.scores
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The problem awaiting input, if the session is mid-quiz.
    pub fn current_problem(&self) -> Option<&Problem> {
        match self.phase {
            Phase::Quiz => self.quiz.problem(self.position),
            Phase::Recall | Phase::Result => None,
        }
    }

    /// Project the finished session into a report. `None` until the
    /// session reaches `Result`.
    pub fn report(&self) -> Option<SessionReport> {
        SessionReport::from_session(self)
    }

    /// Feed one input into the state machine.
    ///
    /// Inputs that do not fit the current phase, or the current problem
    /// type, are no-ops: no side effect, no transition.
    pub fn apply(&mut self, input: SessionInput) {
        match (self.phase, input) {
            (_, SessionInput::Restart { seed }) => self.restart(seed.as_deref()),
            (Phase::Quiz, SessionInput::Choose(chosen)) => self.answer_judgment(chosen),
            (Phase::Quiz, SessionInput::Acknowledge) => self.acknowledge_word(),
            (Phase::Recall, SessionInput::SubmitRecall(entries)) => self.submit_recall(entries),
            (phase, input) => {
                tracing::debug!(?phase, ?input, "ignoring input outside the current phase");
            }
        }
    }

    fn answer_judgment(&mut self, chosen: Choice) {
        let Some(Problem::Judgment {
            ordinal,
            statement,
            truth,
        }) = self.current_problem()
        else {
            tracing::debug!(position = self.position, "choice on a non-judgment problem");
            return;
        };
        let record = AnswerRecord::Judgment {
            ordinal: *ordinal,
            statement: statement.clone(),
            chosen,
            truth: *truth,
            correct: chosen.as_bool() == *truth,
        };
        self.answers.push(record);
        self.advance();
    }

    fn acknowledge_word(&mut self) {
        let Some(Problem::WordPrompt { ordinal, word }) = self.current_problem() else {
            tracing::debug!(position = self.position, "acknowledge on a non-word problem");
            return;
        };
        let record = AnswerRecord::WordShown {
            ordinal: *ordinal,
            word: word.clone(),
        };
        self.answers.push(record);
        self.advance();
    }

    fn advance(&mut self) {
        self.position += 1;
        // Once all ten problems are answered the recall phase begins
        // without any further input.
        if self.position >= PROBLEM_COUNT {
            self.phase = Phase::Recall;
        }
    }

    fn submit_recall(&mut self, mut entries: Vec<String>) {
        // Missing entries score as blanks; extras are dropped.
        entries.resize(WORD_COUNT, String::new());
        self.recall_buffer = entries;
        self.recall = score_recall(&self.gold_words, &self.recall_buffer);
        self.scores = Some(Scores {
            judgment: judgment_score(&self.answers),
            recall: recall_score(&self.recall),
        });
        self.phase = Phase::Result;
    }

    fn restart(&mut self, seed: Option<&str>) {
        let identity = std::mem::take(&mut self.identity);
        let generator = self.generator.clone();
        *self = Self::with_generator(
            generator,
            SessionConfig {
                seed: seed.map(str::to_owned),
                identity,
            },
        );
    }
}
