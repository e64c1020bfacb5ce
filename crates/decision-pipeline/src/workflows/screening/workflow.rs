use serde::Serialize;

use super::decision::Decision;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkflowAction {
    #[serde(rename = "Send to HR Interview Pipeline")]
    InterviewPipeline,
    #[serde(rename = "Send to Manual Review Queue")]
    ManualReviewQueue,
    #[serde(rename = "Archive / Reject")]
    Archive,
}

impl WorkflowAction {
    pub const fn label(self) -> &'static str {
        match self {
            WorkflowAction::InterviewPipeline => "Send to HR Interview Pipeline",
            WorkflowAction::ManualReviewQueue => "Send to Manual Review Queue",
            WorkflowAction::Archive => "Archive / Reject",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkflowStage {
    Interview,
    #[serde(rename = "Manual Review")]
    ManualReview,
    Closed,
}

impl WorkflowStage {
    pub const fn label(self) -> &'static str {
        match self {
            WorkflowStage::Interview => "Interview",
            WorkflowStage::ManualReview => "Manual Review",
            WorkflowStage::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OwnerTeam {
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Hiring Manager")]
    HiringManager,
    System,
}

impl OwnerTeam {
    pub const fn label(self) -> &'static str {
        match self {
            OwnerTeam::Hr => "HR",
            OwnerTeam::HiringManager => "Hiring Manager",
            OwnerTeam::System => "System",
        }
    }
}

/// Routing result; a function of the decision alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowAssignment {
    pub action: WorkflowAction,
    pub stage: WorkflowStage,
    pub owner: OwnerTeam,
}

pub fn assign_workflow(decision: Decision) -> WorkflowAssignment {
    match decision {
        Decision::Hire => WorkflowAssignment {
            action: WorkflowAction::InterviewPipeline,
            stage: WorkflowStage::Interview,
            owner: OwnerTeam::Hr,
        },
        Decision::Review => WorkflowAssignment {
            action: WorkflowAction::ManualReviewQueue,
            stage: WorkflowStage::ManualReview,
            owner: OwnerTeam::HiringManager,
        },
        Decision::Reject => WorkflowAssignment {
            action: WorkflowAction::Archive,
            stage: WorkflowStage::Closed,
            owner: OwnerTeam::System,
        },
    }
}
