use serde::Serialize;

use super::risk::RiskLevel;
use super::rules::{Rule, RuleTable};
use super::sla::SlaStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertSeverity {
    Critical,
    High,
    Low,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            AlertSeverity::Critical => "Critical",
            AlertSeverity::High => "High",
            AlertSeverity::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EscalationLevel {
    Director,
    Manager,
    None,
}

impl EscalationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            EscalationLevel::Director => "Director",
            EscalationLevel::Manager => "Manager",
            EscalationLevel::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertDirective {
    pub required: bool,
    pub severity: AlertSeverity,
    pub escalation: EscalationLevel,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertInput {
    pub sla_status: SlaStatus,
    pub risk_level: RiskLevel,
}

fn high_risk_breach(input: &AlertInput) -> bool {
    input.sla_status == SlaStatus::Breached && input.risk_level == RiskLevel::High
}

fn breach(input: &AlertInput) -> bool {
    input.sla_status == SlaStatus::Breached
}

const ALERT_RULES: &[Rule<AlertInput, AlertDirective>] = &[
    Rule {
        name: "high-risk-breach",
        applies: high_risk_breach,
        outcome: AlertDirective {
            required: true,
            severity: AlertSeverity::Critical,
            escalation: EscalationLevel::Director,
            reason: "High risk SLA breach",
        },
    },
    Rule {
        name: "sla-breach",
        applies: breach,
        outcome: AlertDirective {
            required: true,
            severity: AlertSeverity::High,
            escalation: EscalationLevel::Manager,
            reason: "SLA breach detected",
        },
    },
];

pub static ALERT_TABLE: RuleTable<AlertInput, AlertDirective> = RuleTable::new(
    ALERT_RULES,
    "no-action",
    AlertDirective {
        required: false,
        severity: AlertSeverity::Low,
        escalation: EscalationLevel::None,
        reason: "No action required",
    },
);

pub fn escalate(input: AlertInput) -> AlertDirective {
    *ALERT_TABLE.evaluate(&input)
}
