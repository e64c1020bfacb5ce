//! Screening pipeline for synthetic candidate data.
//!
//! Raw text from the generative service is parsed into candidate blocks, then each
//! candidate passes through decision, workflow routing, risk, compliance, SLA and
//! alert stages in that fixed order. Every stage after the decision is a pure rule
//! table except SLA tracking, which draws a synthetic record age.

pub mod alerts;
pub mod compliance;
pub mod decision;
pub mod domain;
pub mod export;
pub mod generation;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod risk;
pub mod rules;
pub mod sla;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use alerts::{escalate, AlertDirective, AlertInput, AlertSeverity, EscalationLevel};
pub use compliance::{assess_compliance, ComplianceAssessment, ComplianceInput, ComplianceStatus};
pub use decision::{Decision, DecisionClassifier, DecisionOutcome};
pub use domain::{CandidateField, CandidateRecord, DataType, FieldValue, InputError, RecordCount};
pub use export::{
    to_csv_bytes, to_xlsx_bytes, write_csv, write_xlsx, ExportError, DEFAULT_CSV_FILE_NAME,
    DEFAULT_XLSX_FILE_NAME,
};
pub use generation::{GenerationError, OpenAiClient, TextGenerator};
pub use parser::parse_records;
pub use pipeline::{BatchRequest, PipelineError, ScreeningPipeline};
pub use record::{BatchStatus, MergedRecord, ScreeningBatch};
pub use risk::{assess_risk, RiskAssessment, RiskInput, RiskLevel};
pub use sla::{
    AgeSource, Clock, FixedAge, FixedClock, RandomAge, SlaRecord, SlaStatus, SlaTracker,
    SystemClock,
};
pub use workflow::{assign_workflow, OwnerTeam, WorkflowAction, WorkflowAssignment, WorkflowStage};
