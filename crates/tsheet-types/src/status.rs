use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Outcome of comparing one field across the ideal and input documents.
///
/// The wire form is the snake_case name; the set is closed and any other
/// string fails to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Both values present and equal after normalization.
    Same,
    /// Both values present and different after normalization.
    Changed,
    /// The ideal document has a value, the input document does not.
    MissingInInput,
    /// The input document has a value, the ideal document does not.
    ExtraInInput,
    /// Neither document has a value.
    NotFoundInBoth,
}

impl FieldStatus {
    pub const ALL: [FieldStatus; 5] = [
        FieldStatus::Same,
        FieldStatus::Changed,
        FieldStatus::MissingInInput,
        FieldStatus::ExtraInInput,
        FieldStatus::NotFoundInBoth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Changed => "changed",
            Self::MissingInInput => "missing_in_input",
            Self::ExtraInInput => "extra_in_input",
            Self::NotFoundInBoth => "not_found_in_both",
        }
    }

    /// Returns `true` for statuses that indicate the documents disagree.
    pub fn is_difference(&self) -> bool {
        matches!(self, Self::Changed | Self::MissingInInput | Self::ExtraInInput)
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeError::UnknownStatus(s.to_string()))
    }
}

/// Per-status field counts for one comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub same: usize,
    pub changed: usize,
    pub missing_in_input: usize,
    pub extra_in_input: usize,
    pub not_found_in_both: usize,
}

impl StatusCounts {
    /// Count one more field with the given status.
    pub fn record(&mut self, status: FieldStatus) {
        self.total += 1;
        match status {
            FieldStatus::Same => self.same += 1,
            FieldStatus::Changed => self.changed += 1,
            FieldStatus::MissingInInput => self.missing_in_input += 1,
            FieldStatus::ExtraInInput => self.extra_in_input += 1,
            FieldStatus::NotFoundInBoth => self.not_found_in_both += 1,
        }
    }

    /// Number of fields where the documents disagree.
    pub fn differences(&self) -> usize {
        self.changed + self.missing_in_input + self.extra_in_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        let json = serde_json::to_string(&FieldStatus::MissingInInput).unwrap();
        assert_eq!(json, "\"missing_in_input\"");
        let parsed: FieldStatus = serde_json::from_str("\"not_found_in_both\"").unwrap();
        assert_eq!(parsed, FieldStatus::NotFoundInBoth);
    }

    #[test]
    fn as_str_matches_serde() {
        for status in FieldStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(serde_json::from_str::<FieldStatus>("\"different\"").is_err());
        assert_eq!(
            "Same".parse::<FieldStatus>(),
            Err(TypeError::UnknownStatus("Same".into()))
        );
    }

    #[test]
    fn from_str_roundtrip() {
        for status in FieldStatus::ALL {
            assert_eq!(status.as_str().parse::<FieldStatus>(), Ok(status));
        }
    }

    #[test]
    fn difference_statuses() {
        assert!(!FieldStatus::Same.is_difference());
        assert!(!FieldStatus::NotFoundInBoth.is_difference());
        assert!(FieldStatus::Changed.is_difference());
        assert!(FieldStatus::MissingInInput.is_difference());
        assert!(FieldStatus::ExtraInInput.is_difference());
    }

    #[test]
    fn counts_record() {
        let mut counts = StatusCounts::default();
        counts.record(FieldStatus::Same);
        counts.record(FieldStatus::Changed);
        counts.record(FieldStatus::Changed);
        counts.record(FieldStatus::NotFoundInBoth);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.changed, 2);
        assert_eq!(counts.differences(), 2);
    }
}
