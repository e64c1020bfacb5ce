use serde::Serialize;

use super::decision::{Decision, DecisionOutcome};
use super::rules::{Rule, RuleTable};

pub const LOW_CONFIDENCE_HIRE_THRESHOLD: u64 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub audit_required: bool,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskInput {
    pub decision: Decision,
    pub confidence_score: u64,
}

impl From<&DecisionOutcome> for RiskInput {
    fn from(outcome: &DecisionOutcome) -> Self {
        Self {
            decision: outcome.decision,
            confidence_score: outcome.confidence_score,
        }
    }
}

fn low_confidence_hire(input: &RiskInput) -> bool {
    input.decision == Decision::Hire && input.confidence_score < LOW_CONFIDENCE_HIRE_THRESHOLD
}

fn manual_review(input: &RiskInput) -> bool {
    input.decision == Decision::Review
}

const RISK_RULES: &[Rule<RiskInput, RiskAssessment>] = &[
    Rule {
        name: "low-confidence-hire",
        applies: low_confidence_hire,
        outcome: RiskAssessment {
            level: RiskLevel::High,
            audit_required: true,
            reason: "Hire decision with low confidence",
        },
    },
    Rule {
        name: "manual-review",
        applies: manual_review,
        outcome: RiskAssessment {
            level: RiskLevel::Medium,
            audit_required: true,
            reason: "Manual review required",
        },
    },
];

pub static RISK_TABLE: RuleTable<RiskInput, RiskAssessment> = RuleTable::new(
    RISK_RULES,
    "acceptable-risk",
    RiskAssessment {
        level: RiskLevel::Low,
        audit_required: false,
        reason: "Decision within acceptable risk",
    },
);

pub fn assess_risk(input: RiskInput) -> RiskAssessment {
    *RISK_TABLE.evaluate(&input)
}
