use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tsheet_diff::{highlight_values, HighlightSegment, NormalizationPolicy};
use tsheet_types::{ComparisonResult, FieldName, FieldSet, FieldStatus, StatusCounts};

/// Top-level outcome tag carried by every response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Body of `POST /api/compare/fields`.
///
/// A missing key and an explicit `null` both mean "absent".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareFieldsRequest {
    pub ideal_fields: Option<FieldSet>,
    pub input_fields: Option<FieldSet>,
}

/// One row of `differences`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub ideal: Option<String>,
    pub input: Option<String>,
    pub status: FieldStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<HighlightSegment>>,
}

/// Field name → [`DiffEntry`] map that keeps insertion order on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Differences(Vec<(FieldName, DiffEntry)>);

impl Differences {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DiffEntry> {
        self.0
            .iter()
            .find(|(field, _)| field.as_str() == name)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &DiffEntry)> {
        self.0.iter().map(|(field, entry)| (field, entry))
    }
}

impl From<ComparisonResult> for Differences {
    fn from(result: ComparisonResult) -> Self {
        Self(
            result
                .into_diffs()
                .into_iter()
                .map(|diff| {
                    let entry = DiffEntry {
                        ideal: diff.ideal_value,
                        input: diff.input_value,
                        status: diff.status,
                        highlights: None,
                    };
                    (diff.field, entry)
                })
                .collect(),
        )
    }
}

impl Serialize for Differences {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, entry) in &self.0 {
            map.serialize_entry(field, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Differences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DifferencesVisitor)
    }
}

struct DifferencesVisitor;

impl<'de> Visitor<'de> for DifferencesVisitor {
    type Value = Differences;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field names to diff entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(FieldName, DiffEntry)> = Vec::new();
        while let Some((field, entry)) = access.next_entry::<FieldName, DiffEntry>()? {
            if entries.iter().any(|(existing, _)| *existing == field) {
                return Err(serde::de::Error::custom(format!(
                    "duplicate field in differences: {field}"
                )));
            }
            entries.push((field, entry));
        }
        Ok(Differences(entries))
    }
}

/// The `comparison` object consumed by the UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Fields extracted from the ideal document; empty if it was absent.
    pub ideal_fields: FieldSet,
    /// Fields extracted from the input document; empty if it was absent.
    pub input_fields: FieldSet,
    pub differences: Differences,
    pub summary: StatusCounts,
}

impl ComparisonReport {
    pub fn new(ideal_fields: FieldSet, input_fields: FieldSet, result: ComparisonResult) -> Self {
        let summary = result.summary();
        Self {
            ideal_fields,
            input_fields,
            differences: Differences::from(result),
            summary,
        }
    }

    /// Attach word-level highlights to every `changed` entry.
    pub fn with_highlights(mut self, policy: &NormalizationPolicy) -> Self {
        for (_, entry) in &mut self.differences.0 {
            if entry.status != FieldStatus::Changed {
                continue;
            }
            if let (Some(ideal), Some(input)) = (&entry.ideal, &entry.input) {
                entry.highlights = Some(highlight_values(policy, ideal, input));
            }
        }
        self
    }
}

/// Successful comparison response: `{"status": "success", "comparison": {..}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareEnvelope {
    pub status: ResponseStatus,
    pub comparison: ComparisonReport,
}

impl CompareEnvelope {
    pub fn success(comparison: ComparisonReport) -> Self {
        Self {
            status: ResponseStatus::Success,
            comparison,
        }
    }
}

/// Error response: `{"status": "error", "code": .., "detail": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub code: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            code: code.into(),
            detail: detail.into(),
        }
    }
}
