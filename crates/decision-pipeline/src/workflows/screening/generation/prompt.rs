use crate::workflows::screening::domain::{CandidateRecord, DataType, RecordCount};

const STRUCTURE_HINT: &str = "Output ONLY this structure.
Repeat it for each record.

NAME:
ROLE:
SKILLS:
YEARS_EXPERIENCE:
TOOLS:
";

const DECISION_RULES: &str = "You are a strict AI decision engine for HR screening.

Decision Rules:
- Hire: Strong skill match AND experience >= 2 years
- Review: Partial skill match OR experience between 1–2 years
- Reject: Weak skill match OR experience < 1 year

Confidence Score Rules:
- Hire: 75–95
- Review: 45–74
- Reject: 10–44

Output ONLY this structure:

DECISION:
CONFIDENCE_SCORE:
REASON:
";

fn opener(data_type: DataType) -> &'static str {
    match data_type {
        DataType::Resume => "Create synthetic resumes for a Junior Data Analyst.",
        DataType::SupportTicket => {
            "Create synthetic customer support tickets for an e-commerce app."
        }
        DataType::Invoice => "Create synthetic invoices for a small IT services company.",
    }
}

/// Prompt asking the text service for `count` candidate blocks.
pub fn generation_prompt(data_type: DataType, count: RecordCount) -> String {
    format!(
        "{}\n\nRules:\n- Create {} unique records\n- No real people or companies\n- Keep answers short and clean\n\n{}",
        opener(data_type),
        count.get(),
        STRUCTURE_HINT
    )
}

/// Screening prompt populated with a single candidate's fields.
pub fn decision_prompt(candidate: &CandidateRecord) -> String {
    format!(
        "{DECISION_RULES}\nCANDIDATE DATA:\nNAME: {}\nROLE: {}\nSKILLS: {}\nYEARS_EXPERIENCE: {}\nTOOLS: {}\n",
        candidate.name,
        candidate.role,
        candidate.skills,
        candidate.years_experience,
        candidate.tools
    )
}
