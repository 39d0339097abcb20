//! Per-field status classification.
//!
//! Statuses are evaluated in a fixed precedence order:
//!
//! 1. `not_found_in_both` -- neither value is present
//! 2. `missing_in_input` -- only the ideal value is present
//! 3. `extra_in_input` -- only the input value is present
//! 4. `same` -- both present and equal under the [`NormalizationPolicy`]
//! 5. `changed` -- both present and not equal
//!
//! A value is present when it is `Some` and not blank after trimming, so two
//! empty strings classify as `not_found_in_both`, never `same`.

use tsheet_types::{FieldDiff, FieldName, FieldStatus};

use crate::normalize::NormalizationPolicy;

/// Assigns statuses to field value pairs under a fixed policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Classifier {
    policy: NormalizationPolicy,
}

impl Classifier {
    pub fn new(policy: NormalizationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &NormalizationPolicy {
        &self.policy
    }

    /// The status of a value pair.
    pub fn status(&self, ideal: Option<&str>, input: Option<&str>) -> FieldStatus {
        match (self.policy.present(ideal), self.policy.present(input)) {
            (None, None) => FieldStatus::NotFoundInBoth,
            (Some(_), None) => FieldStatus::MissingInInput,
            (None, Some(_)) => FieldStatus::ExtraInInput,
            (Some(a), Some(b)) if a == b => FieldStatus::Same,
            (Some(_), Some(_)) => FieldStatus::Changed,
        }
    }

    /// Classify one field, keeping both values verbatim in the diff.
    pub fn classify(
        &self,
        field: FieldName,
        ideal: Option<&str>,
        input: Option<&str>,
    ) -> FieldDiff {
        let status = self.status(ideal, input);
        FieldDiff::new(
            field,
            ideal.map(str::to_owned),
            input.map(str::to_owned),
            status,
        )
    }
}

/// Classify one field under the default policy.
pub fn classify(field: FieldName, ideal: Option<&str>, input: Option<&str>) -> FieldDiff {
    Classifier::default().classify(field, ideal, input)
}
