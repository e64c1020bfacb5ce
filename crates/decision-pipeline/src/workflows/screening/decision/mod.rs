mod normalize;

pub use normalize::{normalize_confidence, normalize_decision};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::CandidateRecord;
use super::generation::prompt::decision_prompt;
use super::generation::{GenerationError, TextGenerator};
use super::parser::{split_lines, split_pair};
use super::record::is_reserved_field;

const DECISION_KEY: &str = "DECISION";
const CONFIDENCE_KEY: &str = "CONFIDENCE_SCORE";
const REASON_KEY: &str = "REASON";

/// Screening verdict. No other value can reach the downstream stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Hire,
    Review,
    Reject,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Hire => "Hire",
            Decision::Review => "Review",
            Decision::Reject => "Reject",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized reply from the decision step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub decision: Decision,
    pub confidence_score: u64,
    pub reason: Option<String>,
    /// Additional `KEY: value` pairs from the reply, in first-seen order.
    pub extra: Vec<(String, String)>,
}

impl DecisionOutcome {
    /// Scan every `KEY: value` line of a reply. Later duplicates overwrite earlier ones.
    ///
    /// A reply without a DECISION line is a rejection and a missing confidence reads
    /// as zero. Unrecognized keys pass through unless they would shadow a field owned
    /// by another stage.
    pub fn from_reply(reply: &str) -> Self {
        let mut decision = None;
        let mut confidence_score = None;
        let mut reason = None;
        let mut extra: Vec<(String, String)> = Vec::new();

        for line in split_lines(reply) {
            let Some((key, value)) = split_pair(line) else {
                continue;
            };

            match key.as_str() {
                "" => continue,
                DECISION_KEY => decision = Some(normalize_decision(value)),
                CONFIDENCE_KEY => confidence_score = Some(normalize_confidence(value)),
                REASON_KEY => reason = Some(value.to_string()),
                other if is_reserved_field(other) => {
                    debug!(key = other, "dropping decision key that shadows a pipeline field");
                }
                other => match extra.iter_mut().find(|(existing, _)| existing == other) {
                    Some(slot) => slot.1 = value.to_string(),
                    None => extra.push((other.to_string(), value.to_string())),
                },
            }
        }

        Self {
            decision: decision.unwrap_or(Decision::Reject),
            confidence_score: confidence_score.unwrap_or(0),
            reason,
            extra,
        }
    }
}

/// Asks the text service for a verdict on one candidate at a time.
pub struct DecisionClassifier<'g, G: ?Sized> {
    generator: &'g G,
}

impl<'g, G> DecisionClassifier<'g, G>
where
    G: TextGenerator + ?Sized,
{
    pub fn new(generator: &'g G) -> Self {
        Self { generator }
    }

    /// Classify a candidate. Service failures are returned untouched so the batch aborts.
    pub fn classify(&self, candidate: &CandidateRecord) -> Result<DecisionOutcome, GenerationError> {
        let prompt = decision_prompt(candidate);
        let reply = self.generator.generate(&prompt)?;
        let outcome = DecisionOutcome::from_reply(&reply);

        debug!(
            candidate = %candidate.name,
            decision = %outcome.decision,
            confidence = outcome.confidence_score,
            "decision normalized"
        );

        Ok(outcome)
    }
}
