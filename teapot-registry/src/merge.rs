//! Merge & sort engine.
//!
//! Combines canonical registry entries with curated extension cases into
//! one ordered, deduplicated table. An extension case replaces a
//! canonical entry with the same code entirely: a vendor meaning governs
//! over a rarely-used registered one (418 being the famous example).

use std::collections::BTreeMap;

use crate::{
    case::Case,
    error::{Error, Result},
    overrides::NameOverrides,
    snapshot::CanonicalEntry,
};

/// The final ordered sequence of cases to render.
///
/// Invariant: strictly ascending by code, no duplicates. Checked at
/// construction so an invalid table can never reach the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTable {
    cases: Vec<Case>,
}

impl MergedTable {
    /// Build a table from cases, verifying the ordering invariant.
    pub fn new(cases: Vec<Case>) -> Result<Self> {
        for pair in cases.windows(2) {
            if pair[0].code() >= pair[1].code() {
                return Err(Error::invalid_merge_state(format!(
                    "code {} does not strictly precede code {}",
                    pair[0].code(),
                    pair[1].code()
                )));
            }
        }
        Ok(Self { cases })
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn iter(&self) -> impl Iterator<Item = &Case> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Merge canonical entries with extension cases into a [`MergedTable`].
///
/// Canonical entries are resolved through `overrides` and carry no
/// documentation lines. Any code present in `extras` replaces the
/// canonical case with the same code, name and comments both.
pub fn merge(
    canonical: &[CanonicalEntry],
    overrides: &NameOverrides,
    extras: &[Case],
) -> Result<MergedTable> {
    let mut by_code: BTreeMap<u16, Case> = BTreeMap::new();

    for entry in canonical {
        let name = overrides.resolve(entry.code, &entry.official_name);
        by_code.insert(entry.code, Case::undocumented(entry.code, name)?);
    }

    // Extension cases win entirely; canonical data for the code is dropped.
    for case in extras {
        by_code.insert(case.code(), case.clone());
    }

    MergedTable::new(by_code.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: u16, name: &str) -> CanonicalEntry {
        CanonicalEntry {
            code,
            official_name: name.to_string(),
        }
    }

    #[test]
    fn test_merge_sorts_ascending() {
        let extras = vec![
            Case::undocumented(530, "Site is frozen").unwrap(),
            Case::undocumented(418, "I'm A Teapot").unwrap(),
            Case::undocumented(499, "nginx Client Closed Request").unwrap(),
        ];

        let table = merge(&[], &NameOverrides::new(), &extras).unwrap();

        let codes: Vec<u16> = table.iter().map(Case::code).collect();
        assert_eq!(codes, vec![418, 499, 530]);
    }

    #[test]
    fn test_extra_case_replaces_canonical() {
        let canonical = vec![entry(418, "I'm a teapot")];
        let extras =
            vec![Case::new(418, "I'm A Teapot", ["Returned by tea pots requested to brew coffee"])
                .unwrap()];

        let table = merge(&canonical, &NameOverrides::new(), &extras).unwrap();

        assert_eq!(table.len(), 1);
        let case = &table.cases()[0];
        assert_eq!(case.name(), "I'm A Teapot");
        assert_eq!(
            case.comment_lines(),
            ["Returned by tea pots requested to brew coffee"]
        );
    }

    #[test]
    fn test_override_resolves_canonical_name() {
        let canonical = vec![entry(306, "(Unused)"), entry(305, "Use Proxy")];
        let mut overrides = NameOverrides::new();
        overrides.insert(306, "Switch Proxy");

        let table = merge(&canonical, &overrides, &[]).unwrap();

        assert_eq!(table.cases()[0].name(), "Use Proxy");
        assert_eq!(table.cases()[1].name(), "Switch Proxy");
        // Overrides touch the name only; canonical cases stay undocumented.
        assert!(table.cases()[1].comment_lines().is_empty());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let canonical = vec![entry(200, "OK"), entry(418, "(Unused)")];
        let extras = vec![Case::undocumented(418, "I'm A Teapot").unwrap()];

        let first = merge(&canonical, &NameOverrides::new(), &extras).unwrap();
        let second = merge(&canonical, &NameOverrides::new(), &extras).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_canonical_union_with_extras() {
        let canonical = vec![entry(200, "OK"), entry(404, "Not Found")];
        let extras = vec![Case::undocumented(599, "Network Connect Timeout Error").unwrap()];

        let table = merge(&canonical, &NameOverrides::new(), &extras).unwrap();

        let codes: Vec<u16> = table.iter().map(Case::code).collect();
        assert_eq!(codes, vec![200, 404, 599]);
    }

    #[test]
    fn test_table_rejects_unsorted_cases() {
        let cases = vec![
            Case::undocumented(500, "Internal Server Error").unwrap(),
            Case::undocumented(200, "OK").unwrap(),
        ];

        let err = MergedTable::new(cases).unwrap_err();
        assert!(matches!(*err, Error::InvalidMergeState { .. }));
    }

    #[test]
    fn test_table_rejects_duplicate_codes() {
        let cases = vec![
            Case::undocumented(200, "OK").unwrap(),
            Case::undocumented(200, "Still OK").unwrap(),
        ];

        let err = MergedTable::new(cases).unwrap_err();
        assert!(matches!(*err, Error::InvalidMergeState { .. }));
    }
}
