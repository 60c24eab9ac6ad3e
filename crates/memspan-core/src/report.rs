//! Session report: a pure projection of a finished session, with JSON
//! persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Choice, Identity};
use crate::scoring::{RecallEntry, Scores};
use crate::session::{AnswerRecord, Phase, SessionState};

/// One judgment row of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentRow {
    pub ordinal: u8,
    pub statement: String,
    /// What the user selected.
    pub chosen: Choice,
    /// The correct choice.
    pub answer: Choice,
    pub correct: bool,
}

/// A complete report over one finished session.
///
/// Projection mutates nothing and is idempotent: the session id and start
/// timestamp are minted when the session starts, so projecting the same
/// terminal state twice yields identical reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session identifier, minted when the session started.
    pub session_id: Uuid,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// Annotative identity supplied at session start.
    pub identity: Identity,
    /// One row per judgment problem, in presentation order.
    pub judgments: Vec<JudgmentRow>,
    /// One row per word prompt, in presentation order.
    pub recall: Vec<RecallEntry>,
    /// Judgment and recall subscores.
    pub scores: Scores,
}

impl SessionReport {
    /// Project a finished session. `None` until the session reaches
    /// `Result`.
    pub fn from_session(session: &SessionState) -> Option<Self> {
        if session.phase() != Phase::Result {
            return None;
        }
        let scores = session.scores()?;

        let judgments = session
            .answers()
            .iter()
            .filter_map(|record| match record {
                AnswerRecord::Judgment {
                    ordinal,
                    statement,
                    chosen,
                    truth,
                    correct,
                } => Some(JudgmentRow {
                    ordinal: *ordinal,
                    statement: statement.clone(),
                    chosen: *chosen,
                    answer: Choice::from_truth(*truth),
                    correct: *correct,
                }),
                AnswerRecord::WordShown { .. } => None,
            })
            .collect();

        Some(Self {
            session_id: session.session_id(),
            started_at: session.started_at(),
            identity: session.identity().clone(),
            judgments,
            recall: session.recall().to_vec(),
            scores,
        })
    }

    /// Save the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
