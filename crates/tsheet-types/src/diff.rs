//! Comparison output types.

use serde::{Deserialize, Serialize};

use crate::field::FieldName;
use crate::status::{FieldStatus, StatusCounts};

/// Comparison outcome for a single field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiff {
    /// The aligned field name.
    pub field: FieldName,
    /// The value from the ideal document, verbatim.
    pub ideal_value: Option<String>,
    /// The value from the input document, verbatim.
    pub input_value: Option<String>,
    /// How the two values relate.
    pub status: FieldStatus,
}

impl FieldDiff {
    pub fn new(
        field: FieldName,
        ideal_value: Option<String>,
        input_value: Option<String>,
        status: FieldStatus,
    ) -> Self {
        Self {
            field,
            ideal_value,
            input_value,
            status,
        }
    }
}

/// Ordered per-field comparison of one (ideal, input) document pair.
///
/// Entries are held in alignment order, one per field name. The ordering is
/// fixed by whoever builds the result; this type only preserves it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    diffs: Vec<FieldDiff>,
}

impl ComparisonResult {
    /// Wrap diffs that are already ordered and unique by field name.
    pub fn from_ordered(diffs: Vec<FieldDiff>) -> Self {
        debug_assert!(
            diffs.windows(2).all(|w| w[0].field != w[1].field),
            "adjacent duplicate field names"
        );
        Self { diffs }
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Diffs in result order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDiff> {
        self.diffs.iter()
    }

    /// Look up a field's diff by (normalized) name.
    pub fn get(&self, name: &str) -> Option<&FieldDiff> {
        self.diffs.iter().find(|d| d.field.as_str() == name)
    }

    /// Field names in result order.
    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.diffs.iter().map(|d| &d.field)
    }

    pub fn summary(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for diff in &self.diffs {
            counts.record(diff.status);
        }
        counts
    }

    /// Returns `true` if no field is a difference.
    pub fn is_identical(&self) -> bool {
        !self.diffs.iter().any(|d| d.status.is_difference())
    }

    pub fn into_diffs(self) -> Vec<FieldDiff> {
        self.diffs
    }
}

impl<'a> IntoIterator for &'a ComparisonResult {
    type Item = &'a FieldDiff;
    type IntoIter = std::slice::Iter<'a, FieldDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(name: &str, status: FieldStatus) -> FieldDiff {
        FieldDiff::new(FieldName::new(name).unwrap(), None, None, status)
    }

    #[test]
    fn empty_result() {
        let result = ComparisonResult::default();
        assert!(result.is_empty());
        assert!(result.is_identical());
        assert_eq!(result.summary(), StatusCounts::default());
    }

    #[test]
    fn preserves_order() {
        let result = ComparisonResult::from_ordered(vec![
            diff("b", FieldStatus::Same),
            diff("a", FieldStatus::Changed),
        ]);
        let names: Vec<&str> = result.field_names().map(FieldName::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn lookup_and_counts() {
        let result = ComparisonResult::from_ordered(vec![
            diff("amount", FieldStatus::Changed),
            diff("company", FieldStatus::Same),
            diff("date", FieldStatus::NotFoundInBoth),
            diff("tenure", FieldStatus::MissingInInput),
        ]);
        assert_eq!(result.get("company").unwrap().status, FieldStatus::Same);
        assert!(result.get("missing").is_none());
        assert_eq!(result.summary().changed, 1);
        assert_eq!(result.summary().differences(), 2);
        assert!(!result.is_identical());

        let summary = result.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.not_found_in_both, 1);
        assert_eq!(summary.missing_in_input, 1);
    }

    #[test]
    fn same_and_absent_is_identical() {
        let result = ComparisonResult::from_ordered(vec![
            diff("a", FieldStatus::Same),
            diff("b", FieldStatus::NotFoundInBoth),
        ]);
        assert!(result.is_identical());
    }
}
