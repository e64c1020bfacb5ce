use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::alerts::AlertDirective;
use super::compliance::ComplianceAssessment;
use super::decision::DecisionOutcome;
use super::domain::{yes_no, CandidateField, CandidateRecord, FieldValue};
use super::risk::RiskAssessment;
use super::sla::SlaRecord;
use super::workflow::WorkflowAssignment;

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Every field name a stage owns. Pass-through keys from the decision reply may not reuse these.
pub const RESERVED_FIELDS: &[&str] = &[
    "NAME",
    "ROLE",
    "SKILLS",
    "YEARS_EXPERIENCE",
    "TOOLS",
    "DECISION",
    "CONFIDENCE_SCORE",
    "REASON",
    "WORKFLOW_ACTION",
    "WORKFLOW_STAGE",
    "OWNER_TEAM",
    "RISK_LEVEL",
    "AUDIT_FLAG",
    "AUDIT_REASON",
    "COMPLIANCE_STATUS",
    "COMPLIANCE_SCORE",
    "ESCALATION_REQUIRED",
    "COMPLIANCE_REASON",
    "CREATED_AT",
    "SLA_HOURS",
    "ELAPSED_HOURS",
    "SLA_STATUS",
    "SLA_REASON",
    "ALERT_REQUIRED",
    "ALERT_SEVERITY",
    "ESCALATION_LEVEL",
    "ALERT_REASON",
];

pub fn is_reserved_field(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}

/// One candidate with every stage's output attached.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub candidate: CandidateRecord,
    pub decision: DecisionOutcome,
    pub workflow: WorkflowAssignment,
    pub risk: RiskAssessment,
    pub compliance: ComplianceAssessment,
    pub sla: SlaRecord,
    pub alert: AlertDirective,
}

impl MergedRecord {
    /// Flatten into `(column, value)` pairs. Optional decision fields are omitted when absent.
    pub fn fields(&self) -> Vec<(String, FieldValue)> {
        let mut fields: Vec<(String, FieldValue)> = CandidateField::ALL
            .into_iter()
            .map(|field| (field.key().to_string(), self.candidate.get(field).into()))
            .collect();

        let mut push = |key: &str, value: FieldValue| fields.push((key.to_string(), value));

        push("DECISION", self.decision.decision.label().into());
        push(
            "CONFIDENCE_SCORE",
            FieldValue::Integer(self.decision.confidence_score),
        );
        if let Some(reason) = &self.decision.reason {
            push("REASON", reason.as_str().into());
        }
        for (key, value) in &self.decision.extra {
            push(key.as_str(), value.as_str().into());
        }

        push("WORKFLOW_ACTION", self.workflow.action.label().into());
        push("WORKFLOW_STAGE", self.workflow.stage.label().into());
        push("OWNER_TEAM", self.workflow.owner.label().into());

        push("RISK_LEVEL", self.risk.level.label().into());
        push("AUDIT_FLAG", yes_no(self.risk.audit_required).into());
        push("AUDIT_REASON", self.risk.reason.into());

        push("COMPLIANCE_STATUS", self.compliance.status.label().into());
        push(
            "COMPLIANCE_SCORE",
            FieldValue::Integer(u64::from(self.compliance.score)),
        );
        push(
            "ESCALATION_REQUIRED",
            yes_no(self.compliance.escalation_required).into(),
        );
        push("COMPLIANCE_REASON", self.compliance.reason.into());

        push(
            "CREATED_AT",
            self.sla.created_at.format(CREATED_AT_FORMAT).to_string().into(),
        );
        push("SLA_HOURS", FieldValue::Integer(u64::from(self.sla.sla_hours)));
        push("ELAPSED_HOURS", FieldValue::Integer(self.sla.elapsed_hours));
        push("SLA_STATUS", self.sla.status.label().into());
        push("SLA_REASON", self.sla.reason.into());

        push("ALERT_REQUIRED", yes_no(self.alert.required).into());
        push("ALERT_SEVERITY", self.alert.severity.label().into());
        push("ESCALATION_LEVEL", self.alert.escalation.label().into());
        push("ALERT_REASON", self.alert.reason.into());

        fields
    }

    pub fn get(&self, key: &str) -> Option<FieldValue> {
        self.fields()
            .into_iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }
}

impl Serialize for MergedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Completed,
    NoData,
}

/// Ordered output of one pipeline run, in candidate emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningBatch {
    records: Vec<MergedRecord>,
}

impl ScreeningBatch {
    pub fn new(records: Vec<MergedRecord>) -> Self {
        Self { records }
    }

    pub fn status(&self) -> BatchStatus {
        if self.records.is_empty() {
            BatchStatus::NoData
        } else {
            BatchStatus::Completed
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[MergedRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MergedRecord> {
        self.records
    }

    /// Union of column names across all records, in first-seen order.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for record in &self.records {
            for (key, _) in record.fields() {
                if !columns.contains(&key) {
                    columns.push(key);
                }
            }
        }
        columns
    }

    /// Rows aligned to [`columns`](Self::columns); absent fields are `None`.
    pub fn rows(&self) -> (Vec<String>, Vec<Vec<Option<FieldValue>>>) {
        let columns = self.columns();
        let rows = self
            .records
            .iter()
            .map(|record| {
                let mut fields = record.fields();
                columns
                    .iter()
                    .map(|column| {
                        fields
                            .iter()
                            .position(|(key, _)| key == column)
                            .map(|index| fields.swap_remove(index).1)
                    })
                    .collect()
            })
            .collect();
        (columns, rows)
    }
}
