use crate::workflows::screening::alerts::{escalate, AlertInput, AlertSeverity, EscalationLevel, ALERT_TABLE};
use crate::workflows::screening::compliance::{
    assess_compliance, ComplianceInput, ComplianceStatus, COMPLIANCE_TABLE,
};
use crate::workflows::screening::decision::Decision;
use crate::workflows::screening::risk::{assess_risk, RiskInput, RiskLevel, RISK_TABLE};
use crate::workflows::screening::sla::SlaStatus;
use crate::workflows::screening::workflow::{
    assign_workflow, OwnerTeam, WorkflowAction, WorkflowStage,
};

#[test]
fn workflow_follows_the_decision() {
    let hire = assign_workflow(Decision::Hire);
    assert_eq!(hire.action, WorkflowAction::InterviewPipeline);
    assert_eq!(hire.stage, WorkflowStage::Interview);
    assert_eq!(hire.owner, OwnerTeam::Hr);

    let review = assign_workflow(Decision::Review);
    assert_eq!(review.stage.label(), "Manual Review");
    assert_eq!(review.owner.label(), "Hiring Manager");

    let reject = assign_workflow(Decision::Reject);
    assert_eq!(reject.action.label(), "Archive / Reject");
    assert_eq!(reject.stage, WorkflowStage::Closed);
    assert_eq!(reject.owner.label(), "System");
}

#[test]
fn low_confidence_hire_is_high_risk() {
    let input = RiskInput {
        decision: Decision::Hire,
        confidence_score: 60,
    };

    assert_eq!(RISK_TABLE.matched(&input), "low-confidence-hire");
    let risk = assess_risk(input);
    assert_eq!(risk.level, RiskLevel::High);
    assert!(risk.audit_required);
    assert_eq!(risk.reason, "Hire decision with low confidence");
}

#[test]
fn risk_threshold_is_inclusive_for_hires() {
    let risk = assess_risk(RiskInput {
        decision: Decision::Hire,
        confidence_score: 70,
    });
    assert_eq!(risk.level, RiskLevel::Low);
    assert!(!risk.audit_required);

    let review = assess_risk(RiskInput {
        decision: Decision::Review,
        confidence_score: 99,
    });
    assert_eq!(review.level, RiskLevel::Medium);

    let reject = assess_risk(RiskInput {
        decision: Decision::Reject,
        confidence_score: 0,
    });
    assert_eq!(reject.reason, "Decision within acceptable risk");
}

#[test]
fn confident_low_risk_hire_meets_policy() {
    let compliance = assess_compliance(ComplianceInput {
        decision: Decision::Hire,
        confidence_score: 75,
        risk_level: RiskLevel::Low,
    });

    assert_eq!(compliance.status, ComplianceStatus::Compliant);
    assert_eq!(compliance.score, 95);
    assert!(!compliance.escalation_required);
}

#[test]
fn hire_outside_policy_falls_through_to_rejection_policy() {
    let input = ComplianceInput {
        decision: Decision::Hire,
        confidence_score: 80,
        risk_level: RiskLevel::Medium,
    };

    assert_eq!(COMPLIANCE_TABLE.matched(&input), "rejection-policy");
    let compliance = assess_compliance(input);
    assert_eq!(compliance.status, ComplianceStatus::Compliant);
    assert_eq!(compliance.score, 85);
    assert!(!compliance.escalation_required);
    assert_eq!(compliance.reason, "Within rejection policy");
}

#[test]
fn review_needs_conditional_approval() {
    let compliance = assess_compliance(ComplianceInput {
        decision: Decision::Review,
        confidence_score: 50,
        risk_level: RiskLevel::Medium,
    });

    assert_eq!(compliance.status.label(), "Conditional");
    assert_eq!(compliance.score, 70);
    assert!(compliance.escalation_required);
}

#[test]
fn alerts_escalate_by_breach_and_risk() {
    let critical = escalate(AlertInput {
        sla_status: SlaStatus::Breached,
        risk_level: RiskLevel::High,
    });
    assert!(critical.required);
    assert_eq!(critical.severity, AlertSeverity::Critical);
    assert_eq!(critical.escalation, EscalationLevel::Director);

    let breach = escalate(AlertInput {
        sla_status: SlaStatus::Breached,
        risk_level: RiskLevel::Medium,
    });
    assert_eq!(breach.severity, AlertSeverity::High);
    assert_eq!(breach.escalation, EscalationLevel::Manager);

    let quiet = AlertInput {
        sla_status: SlaStatus::OnTrack,
        risk_level: RiskLevel::High,
    };
    assert_eq!(ALERT_TABLE.matched(&quiet), "no-action");
    let quiet = escalate(quiet);
    assert!(!quiet.required);
    assert_eq!(quiet.escalation.label(), "None");
}

#[test]
fn tables_list_rules_in_priority_order() {
    let names: Vec<_> = ALERT_TABLE.names().collect();
    assert_eq!(names, vec!["high-risk-breach", "sla-breach", "no-action"]);
}
