//! Field alignment: the ordered union of two field sets' names.
//!
//! Names are already normalized by [`FieldSet`]; alignment trusts them and
//! does no fuzzy matching. Output order is lexicographic by normalized name.

use std::collections::BTreeSet;

use tsheet_types::{FieldName, FieldSet};

/// Merge the key sets of `ideal` and `input` into one sorted, deduplicated sequence.
pub fn align(ideal: &FieldSet, input: &FieldSet) -> Vec<FieldName> {
    let names: BTreeSet<&FieldName> = ideal.names().chain(input.names()).collect();
    names.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(keys: &[&str]) -> FieldSet {
        FieldSet::from_pairs(keys.iter().map(|k| (*k, Some("v")))).unwrap()
    }

    fn names(aligned: &[FieldName]) -> Vec<&str> {
        aligned.iter().map(FieldName::as_str).collect()
    }

    #[test]
    fn empty_inputs_yield_empty_sequence() {
        assert!(align(&FieldSet::new(), &FieldSet::new()).is_empty());
    }

    #[test]
    fn union_is_sorted_and_deduplicated() {
        let ideal = set(&["valuation", "company", "board_seats"]);
        let input = set(&["investor", "company", "valuation"]);
        let aligned = align(&ideal, &input);
        assert_eq!(
            names(&aligned),
            vec!["board_seats", "company", "investor", "valuation"]
        );
    }

    #[test]
    fn one_side_empty() {
        let ideal = set(&["b", "a"]);
        assert_eq!(names(&align(&ideal, &FieldSet::new())), vec!["a", "b"]);
        assert_eq!(names(&align(&FieldSet::new(), &ideal)), vec!["a", "b"]);
    }

    #[test]
    fn case_variants_align_after_normalization() {
        let ideal = set(&["Company"]);
        let input = set(&["  company"]);
        assert_eq!(names(&align(&ideal, &input)), vec!["company"]);
    }

    #[test]
    fn separator_variants_do_not_merge() {
        let ideal = set(&["company name"]);
        let input = set(&["company_name"]);
        assert_eq!(align(&ideal, &input).len(), 2);
    }

    #[test]
    fn keys_without_values_still_align() {
        let ideal = FieldSet::from_pairs([("date", None::<&str>)]).unwrap();
        assert_eq!(names(&align(&ideal, &FieldSet::new())), vec!["date"]);
    }
}
