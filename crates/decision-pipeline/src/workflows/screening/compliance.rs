use serde::Serialize;

use super::decision::Decision;
use super::risk::RiskLevel;
use super::rules::{Rule, RuleTable};

pub const POLICY_CONFIDENCE_THRESHOLD: u64 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceStatus {
    Compliant,
    Conditional,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::Conditional => "Conditional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceAssessment {
    pub status: ComplianceStatus,
    pub score: u8,
    pub escalation_required: bool,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceInput {
    pub decision: Decision,
    pub confidence_score: u64,
    pub risk_level: RiskLevel,
}

fn meets_hiring_policy(input: &ComplianceInput) -> bool {
    input.decision == Decision::Hire
        && input.confidence_score >= POLICY_CONFIDENCE_THRESHOLD
        && input.risk_level == RiskLevel::Low
}

fn needs_manual_approval(input: &ComplianceInput) -> bool {
    input.decision == Decision::Review
}

const COMPLIANCE_RULES: &[Rule<ComplianceInput, ComplianceAssessment>] = &[
    Rule {
        name: "hiring-policy",
        applies: meets_hiring_policy,
        outcome: ComplianceAssessment {
            status: ComplianceStatus::Compliant,
            score: 95,
            escalation_required: false,
            reason: "Meets hiring policy thresholds",
        },
    },
    Rule {
        name: "manual-approval",
        applies: needs_manual_approval,
        outcome: ComplianceAssessment {
            status: ComplianceStatus::Conditional,
            score: 70,
            escalation_required: true,
            reason: "Manual approval required",
        },
    },
];

// Hires that miss the policy rule (confidence or risk) land here too and carry the
// rejection-policy reason. Pending product clarification.
pub static COMPLIANCE_TABLE: RuleTable<ComplianceInput, ComplianceAssessment> = RuleTable::new(
    COMPLIANCE_RULES,
    "rejection-policy",
    ComplianceAssessment {
        status: ComplianceStatus::Compliant,
        score: 85,
        escalation_required: false,
        reason: "Within rejection policy",
    },
);

pub fn assess_compliance(input: ComplianceInput) -> ComplianceAssessment {
    *COMPLIANCE_TABLE.evaluate(&input)
}
