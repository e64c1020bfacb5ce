use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::workflows::screening::domain::CandidateRecord;
use crate::workflows::screening::generation::{GenerationError, TextGenerator};
use crate::workflows::screening::pipeline::ScreeningPipeline;
use crate::workflows::screening::sla::{AgeSource, FixedClock, SlaTracker};

/// Replays queued replies in order and records every prompt it receives.
#[derive(Default)]
pub(super) struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub(super) fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let generator = Self::default();
        for reply in replies {
            generator.push(Ok(reply.into()));
        }
        generator
    }

    pub(super) fn push(&self, reply: Result<String, GenerationError>) {
        self.replies
            .lock()
            .expect("reply mutex poisoned")
            .push_back(reply);
    }

    pub(super) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt mutex poisoned").clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.to_string());
        self.replies
            .lock()
            .expect("reply mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Transport("script exhausted".to_string())))
    }
}

/// Hands out a fixed sequence of ages, repeating the last one.
pub(super) struct ScriptedAges {
    ages: VecDeque<u32>,
    last: u32,
}

impl ScriptedAges {
    pub(super) fn new(ages: &[u32]) -> Self {
        Self {
            ages: ages.iter().copied().collect(),
            last: 0,
        }
    }
}

impl AgeSource for ScriptedAges {
    fn draw_hours(&mut self, max_hours: u32) -> u32 {
        if let Some(next) = self.ages.pop_front() {
            self.last = next;
        }
        self.last.min(max_hours)
    }
}

pub(super) fn evaluation_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn pipeline_with_ages<'g>(
    generator: &'g ScriptedGenerator,
    ages: &[u32],
) -> ScreeningPipeline<&'g ScriptedGenerator, FixedClock, ScriptedAges> {
    ScreeningPipeline::with_sla_tracker(
        generator,
        SlaTracker::new(FixedClock(evaluation_instant()), ScriptedAges::new(ages)),
    )
}

pub(super) fn analyst() -> CandidateRecord {
    CandidateRecord {
        name: "A".to_string(),
        role: "Analyst".to_string(),
        skills: "SQL".to_string(),
        years_experience: "3".to_string(),
        tools: "Excel".to_string(),
    }
}

pub(super) fn candidate_block(name: &str, years: &str) -> String {
    format!(
        "NAME: {name}\nROLE: Junior Data Analyst\nSKILLS: SQL, Python\nYEARS_EXPERIENCE: {years}\nTOOLS: Excel, Tableau\n"
    )
}
