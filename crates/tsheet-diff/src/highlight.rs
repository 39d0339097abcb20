//! Word-level highlighting of changed values.
//!
//! Uses the `similar` crate to diff the normalized forms of two values word
//! by word, so a UI can mark exactly which tokens differ.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

use crate::normalize::NormalizationPolicy;

/// How a segment relates the ideal value to the input value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Present in both values.
    Equal,
    /// Present only in the ideal value.
    Removed,
    /// Present only in the input value.
    Added,
}

/// A run of text sharing one [`SegmentKind`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub kind: SegmentKind,
    pub text: String,
}

/// Diff two values word by word after normalizing them with `policy`.
///
/// Adjacent changes of the same kind are merged into one segment. Identical
/// values produce a single `Equal` segment; two blank values produce none.
pub fn highlight_values(
    policy: &NormalizationPolicy,
    ideal: &str,
    input: &str,
) -> Vec<HighlightSegment> {
    let old = policy.normalize(ideal);
    let new = policy.normalize(input);
    let diff = TextDiff::from_words(old.as_ref(), new.as_ref());

    let mut segments: Vec<HighlightSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Equal,
            ChangeTag::Delete => SegmentKind::Removed,
            ChangeTag::Insert => SegmentKind::Added,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(HighlightSegment {
                kind,
                text: change.value().to_string(),
            }),
        }
    }
    segments
}
