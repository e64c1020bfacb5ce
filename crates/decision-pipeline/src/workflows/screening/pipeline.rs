use tracing::{debug, info, warn};

use super::alerts::{escalate, AlertInput};
use super::compliance::{assess_compliance, ComplianceInput};
use super::decision::DecisionClassifier;
use super::domain::{CandidateRecord, DataType, RecordCount};
use super::generation::prompt::generation_prompt;
use super::generation::{GenerationError, TextGenerator};
use super::parser::parse_records;
use super::record::{MergedRecord, ScreeningBatch};
use super::risk::{assess_risk, RiskInput};
use super::sla::{AgeSource, Clock, RandomAge, SlaTracker, SystemClock};
use super::workflow::assign_workflow;

/// Batch parameters collected by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequest {
    pub data_type: DataType,
    pub count: RecordCount,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("text generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Threads generated candidates through decision, workflow, risk, compliance, SLA and
/// alert stages, strictly in that order and one record at a time.
pub struct ScreeningPipeline<G, C = SystemClock, A = RandomAge> {
    generator: G,
    sla: SlaTracker<C, A>,
}

impl<G> ScreeningPipeline<G>
where
    G: TextGenerator,
{
    pub fn new(generator: G) -> Self {
        Self::with_sla_tracker(generator, SlaTracker::system())
    }
}

impl<G, C, A> ScreeningPipeline<G, C, A>
where
    G: TextGenerator,
    C: Clock,
    A: AgeSource,
{
    pub fn with_sla_tracker(generator: G, sla: SlaTracker<C, A>) -> Self {
        Self { generator, sla }
    }

    /// Generate raw candidate text for `request` and screen whatever parses out of it.
    ///
    /// Any text service failure aborts the whole batch; no partial results are returned.
    pub fn run(&mut self, request: BatchRequest) -> Result<ScreeningBatch, PipelineError> {
        info!(
            data_type = %request.data_type,
            count = request.count.get(),
            "generating candidate batch"
        );

        let prompt = generation_prompt(request.data_type, request.count);
        let raw = self.generator.generate(&prompt)?;
        let candidates = parse_records(&raw);

        debug!(parsed = candidates.len(), "parsed candidate records");
        self.screen(candidates)
    }

    /// Screen already-parsed candidates.
    pub fn screen(
        &mut self,
        candidates: Vec<CandidateRecord>,
    ) -> Result<ScreeningBatch, PipelineError> {
        if candidates.is_empty() {
            warn!("no data generated");
            return Ok(ScreeningBatch::default());
        }

        let classifier = DecisionClassifier::new(&self.generator);
        let mut records = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let decision = classifier.classify(&candidate)?;
            let workflow = assign_workflow(decision.decision);
            let risk = assess_risk(RiskInput::from(&decision));
            let compliance = assess_compliance(ComplianceInput {
                decision: decision.decision,
                confidence_score: decision.confidence_score,
                risk_level: risk.level,
            });
            let sla = self.sla.evaluate(workflow.stage);
            let alert = escalate(AlertInput {
                sla_status: sla.status,
                risk_level: risk.level,
            });

            debug!(
                candidate = %candidate.name,
                stage = workflow.stage.label(),
                risk = risk.level.label(),
                sla = sla.status.label(),
                alert = alert.severity.label(),
                "candidate screened"
            );

            records.push(MergedRecord {
                candidate,
                decision,
                workflow,
                risk,
                compliance,
                sla,
                alert,
            });
        }

        info!(records = records.len(), "screening batch complete");
        Ok(ScreeningBatch::new(records))
    }
}
