use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five keys a generated candidate block must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CandidateField {
    Name,
    Role,
    Skills,
    YearsExperience,
    Tools,
}

impl CandidateField {
    pub const ALL: [CandidateField; 5] = [
        CandidateField::Name,
        CandidateField::Role,
        CandidateField::Skills,
        CandidateField::YearsExperience,
        CandidateField::Tools,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            CandidateField::Name => "NAME",
            CandidateField::Role => "ROLE",
            CandidateField::Skills => "SKILLS",
            CandidateField::YearsExperience => "YEARS_EXPERIENCE",
            CandidateField::Tools => "TOOLS",
        }
    }

    /// Match an already uppercased key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A flat candidate block recovered from generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub role: String,
    pub skills: String,
    pub years_experience: String,
    pub tools: String,
}

impl CandidateRecord {
    pub fn get(&self, field: CandidateField) -> &str {
        match field {
            CandidateField::Name => &self.name,
            CandidateField::Role => &self.role,
            CandidateField::Skills => &self.skills,
            CandidateField::YearsExperience => &self.years_experience,
            CandidateField::Tools => &self.tools,
        }
    }
}

/// Kind of synthetic data requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Resume,
    SupportTicket,
    Invoice,
}

impl DataType {
    pub const fn label(self) -> &'static str {
        match self {
            DataType::Resume => "Resume",
            DataType::SupportTicket => "Support Ticket",
            DataType::Invoice => "Invoice",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DataType {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "resume" => Ok(DataType::Resume),
            "supportticket" | "ticket" => Ok(DataType::SupportTicket),
            "invoice" => Ok(DataType::Invoice),
            _ => Err(InputError::UnknownDataType(raw.to_string())),
        }
    }
}

/// Number of records requested per batch, bounded to what the generator is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordCount(u8);

impl RecordCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u32) -> Result<Self, InputError> {
        if (u32::from(Self::MIN)..=u32::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InputError::RecordCountOutOfRange(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for RecordCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl<'de> Deserialize<'de> for RecordCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u32::deserialize(deserializer)?;
        RecordCount::new(raw).map_err(serde::de::Error::custom)
    }
}

impl FromStr for RecordCount {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| InputError::InvalidRecordCount(raw.to_string()))?;
        RecordCount::new(value)
    }
}

/// Rejected batch parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown data type '{0}' (expected resume, support-ticket or invoice)")]
    UnknownDataType(String),
    #[error("record count {0} outside the supported range 1..=5")]
    RecordCountOutOfRange(u32),
    #[error("record count '{0}' is not a whole number")]
    InvalidRecordCount(String),
}

/// Cell value handed to the export boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(u64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Integer(value)
    }
}

pub(crate) const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
