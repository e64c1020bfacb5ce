//! Simulated service-level tracking.
//!
//! There is no real lifecycle history behind a generated record, so the tracker
//! back-dates each one by a random whole-hour age and checks that age against the
//! stage's SLA window. Both the clock and the age source are injectable.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::rules::{Rule, RuleTable};
use super::workflow::WorkflowStage;

pub const MAX_SYNTHETIC_AGE_HOURS: u32 = 72;
pub const INTERVIEW_SLA_HOURS: u32 = 24;
pub const DEFAULT_SLA_HOURS: u32 = 48;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of synthetic record ages, in whole hours within `0..=max_hours`.
pub trait AgeSource {
    fn draw_hours(&mut self, max_hours: u32) -> u32;
}

/// Uniform ages from a PRNG.
#[derive(Debug, Clone)]
pub struct RandomAge<R = SmallRng> {
    rng: R,
}

impl RandomAge<SmallRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomAge<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> AgeSource for RandomAge<R> {
    fn draw_hours(&mut self, max_hours: u32) -> u32 {
        self.rng.gen_range(0..=max_hours)
    }
}

/// Always reports the same age, clamped to the allowed range.
#[derive(Debug, Clone, Copy)]
pub struct FixedAge(pub u32);

impl AgeSource for FixedAge {
    fn draw_hours(&mut self, max_hours: u32) -> u32 {
        self.0.min(max_hours)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlaStatus {
    Breached,
    #[serde(rename = "On Track")]
    OnTrack,
}

impl SlaStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SlaStatus::Breached => "Breached",
            SlaStatus::OnTrack => "On Track",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlaVerdict {
    pub status: SlaStatus,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlaInput {
    pub elapsed_hours: u64,
    pub sla_hours: u32,
}

fn window_exceeded(input: &SlaInput) -> bool {
    input.elapsed_hours > u64::from(input.sla_hours)
}

const SLA_RULES: &[Rule<SlaInput, SlaVerdict>] = &[Rule {
    name: "window-exceeded",
    applies: window_exceeded,
    outcome: SlaVerdict {
        status: SlaStatus::Breached,
        reason: "Elapsed time exceeds SLA window",
    },
}];

pub static SLA_TABLE: RuleTable<SlaInput, SlaVerdict> = RuleTable::new(
    SLA_RULES,
    "on-track",
    SlaVerdict {
        status: SlaStatus::OnTrack,
        reason: "Within SLA window",
    },
);

pub const fn sla_hours_for(stage: WorkflowStage) -> u32 {
    match stage {
        WorkflowStage::Interview => INTERVIEW_SLA_HOURS,
        WorkflowStage::ManualReview | WorkflowStage::Closed => DEFAULT_SLA_HOURS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlaRecord {
    pub created_at: DateTime<Utc>,
    pub sla_hours: u32,
    pub elapsed_hours: u64,
    pub status: SlaStatus,
    pub reason: &'static str,
}

pub struct SlaTracker<C, A> {
    clock: C,
    ages: A,
}

impl SlaTracker<SystemClock, RandomAge> {
    pub fn system() -> Self {
        Self::new(SystemClock, RandomAge::from_entropy())
    }
}

impl<C, A> SlaTracker<C, A>
where
    C: Clock,
    A: AgeSource,
{
    pub fn new(clock: C, ages: A) -> Self {
        Self { clock, ages }
    }

    /// Draw a fresh age for a record in `stage`. Every call re-samples.
    pub fn evaluate(&mut self, stage: WorkflowStage) -> SlaRecord {
        let now = self.clock.now();
        let age = self.ages.draw_hours(MAX_SYNTHETIC_AGE_HOURS);
        let created_at = now - Duration::hours(i64::from(age));
        let elapsed_hours = (now - created_at).num_hours().max(0) as u64;
        let sla_hours = sla_hours_for(stage);

        let verdict = SLA_TABLE.evaluate(&SlaInput {
            elapsed_hours,
            sla_hours,
        });

        SlaRecord {
            created_at,
            sla_hours,
            elapsed_hours,
            status: verdict.status,
            reason: verdict.reason,
        }
    }
}
