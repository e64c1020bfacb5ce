use tracing::debug;

use super::domain::{CandidateField, CandidateRecord};

/// Line terminators recognized in generated text, beyond `\n`.
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines on every Unicode line boundary, treating `\r\n` as one break.
///
/// A terminator at the very end does not produce a trailing empty line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let has_lines = !text.is_empty();
    let body = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix(is_line_break))
        .unwrap_or(text);

    body.split("\r\n")
        .flat_map(|chunk| chunk.split(is_line_break))
        .filter(move |_| has_lines)
}

/// Split a `KEY: value` line on its first colon, uppercasing and trimming the key.
pub(crate) fn split_pair(line: &str) -> Option<(String, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim().to_uppercase(), value.trim()))
}

/// Accumulates recognized keys until a full candidate block is present.
#[derive(Debug, Default)]
struct PartialCandidate {
    slots: [Option<String>; 5],
}

impl PartialCandidate {
    fn set(&mut self, field: CandidateField, value: &str) {
        self.slots[field.index()] = Some(value.to_string());
    }

    fn distinct(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn take_complete(&mut self) -> Option<CandidateRecord> {
        if self.distinct() != CandidateField::ALL.len() {
            return None;
        }

        let [name, role, skills, years_experience, tools] = std::mem::take(&mut self.slots);
        Some(CandidateRecord {
            name: name.unwrap_or_default(),
            role: role.unwrap_or_default(),
            skills: skills.unwrap_or_default(),
            years_experience: years_experience.unwrap_or_default(),
            tools: tools.unwrap_or_default(),
        })
    }
}

/// Recover candidate blocks from freeform generated text.
///
/// A record closes as soon as all five recognized keys have been seen; repeated keys
/// overwrite the pending value and never close a block early. Any trailing partial
/// block is dropped.
pub fn parse_records(text: &str) -> Vec<CandidateRecord> {
    let mut records = Vec::new();
    let mut current = PartialCandidate::default();

    for line in split_lines(text) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = split_pair(line) {
            if let Some(field) = CandidateField::from_key(&key) {
                current.set(field, value);
            }
        }

        if let Some(record) = current.take_complete() {
            records.push(record);
        }
    }

    let leftover = current.distinct();
    if leftover > 0 {
        debug!(leftover, "discarding incomplete trailing candidate block");
    }

    records
}
