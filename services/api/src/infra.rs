use decision_pipeline::config::GenerationConfig;
use decision_pipeline::workflows::screening::{GenerationError, OpenAiClient, TextGenerator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) generator: Arc<dyn TextGenerator>,
}

/// Live client unless `offline` is set. A missing key is reported up front; requests
/// still reach the client and fail there.
pub(crate) fn build_generator(config: &GenerationConfig, offline: bool) -> Arc<dyn TextGenerator> {
    if offline {
        return Arc::new(CannedGenerator::default());
    }

    if config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; generation requests will fail");
    }
    Arc::new(OpenAiClient::new(config.clone()))
}

const SAMPLE_CANDIDATES: &[&str] = &[
    "NAME: Priya Natarajan\nROLE: Junior Data Analyst\nSKILLS: SQL, Python, data cleaning\nYEARS_EXPERIENCE: 2\nTOOLS: Excel, Power BI",
    "NAME: Marco Velez\nROLE: Junior Data Analyst\nSKILLS: Statistics, dashboards\nYEARS_EXPERIENCE: 1\nTOOLS: Google Sheets, Tableau",
    "NAME: Hana Kobayashi\nROLE: Junior Data Analyst\nSKILLS: Python, pandas, A/B testing\nYEARS_EXPERIENCE: 3\nTOOLS: Jupyter, Looker",
    "NAME: Tomasz Wilk\nROLE: Junior Data Analyst\nSKILLS: Customer support\nYEARS_EXPERIENCE: 0\nTOOLS: Zendesk",
    "NAME: Amara Okafor\nROLE: Junior Data Analyst\nSKILLS: SQL, reporting\nYEARS_EXPERIENCE: 2\nTOOLS: Excel, Metabase",
];

const DECISION_REPLIES: &[&str] = &[
    "DECISION: Hire\nCONFIDENCE_SCORE: 88\nREASON: Strong SQL and analysis tooling",
    "DECISION: Review\nCONFIDENCE_SCORE: 6\nREASON: Some skills match, experience is thin",
    "DECISION: Hire\nCONFIDENCE_SCORE: 65\nREASON: Good Python, limited reporting exposure",
    "DECISION: Reject\nCONFIDENCE_SCORE: 20\nREASON: Skills unrelated to the role",
    "DECISION: Review\nCONFIDENCE_SCORE: 55\nREASON: Solid basics, needs a second opinion",
];

/// Offline stand-in for the text service. Candidate prompts get a fixed set of records
/// sized to the requested count; decision prompts cycle through canned verdicts.
#[derive(Debug, Default)]
pub(crate) struct CannedGenerator {
    decisions: AtomicUsize,
}

impl CannedGenerator {
    fn requested_count(prompt: &str) -> usize {
        prompt
            .lines()
            .find_map(|line| line.trim().strip_prefix("- Create "))
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|count| count.parse().ok())
            .unwrap_or(SAMPLE_CANDIDATES.len())
    }
}

impl TextGenerator for CannedGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if prompt.contains("CANDIDATE DATA:") {
            let index = self.decisions.fetch_add(1, Ordering::Relaxed);
            return Ok(DECISION_REPLIES[index % DECISION_REPLIES.len()].to_string());
        }

        let count = Self::requested_count(prompt).min(SAMPLE_CANDIDATES.len());
        Ok(SAMPLE_CANDIDATES[..count].join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decision_pipeline::workflows::screening::generation::prompt::generation_prompt;
    use decision_pipeline::workflows::screening::{parse_records, DataType, RecordCount};

    #[test]
    fn canned_generator_honours_requested_count() {
        let generator = CannedGenerator::default();
        let prompt = generation_prompt(DataType::Resume, RecordCount::new(3).expect("count"));

        let text = generator.generate(&prompt).expect("canned text");

        assert_eq!(parse_records(&text).len(), 3);
    }

    #[test]
    fn canned_generator_cycles_decisions() {
        let generator = CannedGenerator::default();
        let first = generator.generate("CANDIDATE DATA:\nNAME: A").expect("reply");
        let second = generator.generate("CANDIDATE DATA:\nNAME: B").expect("reply");

        assert!(first.starts_with("DECISION: Hire"));
        assert!(second.starts_with("DECISION: Review"));
    }
}
