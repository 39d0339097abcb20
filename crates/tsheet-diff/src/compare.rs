//! Comparison orchestration: align, then classify each aligned field.

use tsheet_types::{ComparisonResult, FieldSet};

use crate::align::align;
use crate::classify::Classifier;
use crate::error::{DiffError, DiffResult};
use crate::normalize::NormalizationPolicy;

/// Runs the align/classify pipeline under one normalization policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Comparator {
    classifier: Classifier,
}

impl Comparator {
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self {
            classifier: Classifier::new(policy),
        }
    }

    pub fn policy(&self) -> &NormalizationPolicy {
        self.classifier.policy()
    }

    /// Compare two possibly-absent field sets.
    ///
    /// A single absent side is treated as an empty field set. Fails with
    /// [`DiffError::InvalidInput`] only when both sides are absent.
    pub fn compare(
        &self,
        ideal: Option<&FieldSet>,
        input: Option<&FieldSet>,
    ) -> DiffResult<ComparisonResult> {
        if ideal.is_none() && input.is_none() {
            return Err(DiffError::InvalidInput);
        }
        let empty = FieldSet::new();
        Ok(self.compare_sets(ideal.unwrap_or(&empty), input.unwrap_or(&empty)))
    }

    /// Compare two field sets. Result order is the aligner's order.
    pub fn compare_sets(&self, ideal: &FieldSet, input: &FieldSet) -> ComparisonResult {
        let diffs = align(ideal, input)
            .into_iter()
            .map(|name| {
                let ideal_value = ideal.value(name.as_str());
                let input_value = input.value(name.as_str());
                self.classifier.classify(name, ideal_value, input_value)
            })
            .collect();
        ComparisonResult::from_ordered(diffs)
    }
}

/// Compare two possibly-absent field sets under the default policy.
pub fn compare(ideal: Option<&FieldSet>, input: Option<&FieldSet>) -> DiffResult<ComparisonResult> {
    Comparator::default().compare(ideal, input)
}
