//! Value normalization applied before equality checks.
//!
//! Surrounding whitespace is always trimmed. Collapsing internal whitespace
//! and case folding are policy switches, both on by default. Numeric and
//! currency formats are never reinterpreted: `$5M` and `$5,000,000` differ.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Rules for canonicalizing field values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationPolicy {
    /// Replace every run of internal whitespace with a single space.
    pub collapse_whitespace: bool,
    /// Compare values without regard to letter case.
    pub case_insensitive: bool,
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            case_insensitive: true,
        }
    }
}

impl NormalizationPolicy {
    /// Trim only. Values must otherwise match exactly.
    pub fn strict() -> Self {
        Self {
            collapse_whitespace: false,
            case_insensitive: false,
        }
    }

    /// Canonical form of a value under this policy.
    pub fn normalize<'a>(&self, value: &'a str) -> Cow<'a, str> {
        let trimmed = value.trim();
        let collapsed: Cow<'a, str> = if self.collapse_whitespace && needs_collapse(trimmed) {
            Cow::Owned(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
        } else {
            Cow::Borrowed(trimmed)
        };
        if !self.case_insensitive {
            return collapsed;
        }
        let folded = collapsed.to_lowercase();
        if folded == *collapsed {
            collapsed
        } else {
            Cow::Owned(folded)
        }
    }

    /// `Some(canonical)` if the value is present and not blank.
    pub fn present<'a>(&self, value: Option<&'a str>) -> Option<Cow<'a, str>> {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| self.normalize(v))
    }

    /// Returns `true` if two present values are equal under this policy.
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        self.normalize(a) == self.normalize(b)
    }
}

fn needs_collapse(s: &str) -> bool {
    let mut previous_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if previous_space || ch != ' ' {
                return true;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
    }
    false
}
