//! # Fixture Contract Tests
//!
//! These tests pin the external contract of the dataset: the record
//! count, the id space, full population of every position, the evidence
//! id conventions, one fully-pinned sample record, and field-for-field
//! JSON round-trip equality. Downstream consumers import the collection
//! as-is; a failure here means their expectations are broken.

use std::collections::HashSet;

use moot_fixtures::{argument_cases, find_case, ArgumentCase, Position, ARGUMENT_CASE_COUNT};

// ---------------------------------------------------------------------------
// Record count and id space
// ---------------------------------------------------------------------------

#[test]
fn test_collection_contains_exactly_five_records() {
    assert_eq!(argument_cases().len(), ARGUMENT_CASE_COUNT);
}

#[test]
fn test_ids_unique_and_equal_expected_set() {
    let ids: HashSet<&str> = argument_cases().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), argument_cases().len(), "duplicate case ids");
    let expected: HashSet<&str> = ["1", "2", "3", "4", "5"].into_iter().collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_every_id_is_a_working_lookup_key() {
    for case in argument_cases() {
        let found = find_case(case.id.as_str()).expect("id should resolve");
        assert!(std::ptr::eq(found, case));
    }
}

// ---------------------------------------------------------------------------
// Position population
// ---------------------------------------------------------------------------

fn assert_fully_populated(case_id: &str, side: &str, position: &Position) {
    assert!(
        !position.main_argument.is_empty(),
        "case {case_id} {side}: empty mainArgument"
    );
    assert!(
        !position.details.is_empty(),
        "case {case_id} {side}: empty details"
    );
    assert!(
        !position.evidence.is_empty(),
        "case {case_id} {side}: empty evidence"
    );
    assert!(
        !position.caselaw.is_empty(),
        "case {case_id} {side}: empty caselaw"
    );
}

#[test]
fn test_both_positions_fully_populated_on_every_record() {
    for case in argument_cases() {
        assert_fully_populated(case.id.as_str(), "appellant", &case.appellant);
        assert_fully_populated(case.id.as_str(), "respondent", &case.respondent);
    }
}

// ---------------------------------------------------------------------------
// Evidence id conventions
// ---------------------------------------------------------------------------

#[test]
fn test_evidence_ids_unique_within_each_position() {
    for case in argument_cases() {
        for position in [&case.appellant, &case.respondent] {
            let mut seen = HashSet::new();
            for item in &position.evidence {
                assert!(
                    seen.insert(item.id.as_str()),
                    "case {}: duplicate evidence id {}",
                    case.id,
                    item.id
                );
            }
        }
    }
}

#[test]
fn test_appellant_and_respondent_evidence_ids_disjoint() {
    for case in argument_cases() {
        let appellant: HashSet<&str> = case
            .appellant
            .evidence
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        let respondent: HashSet<&str> = case
            .respondent
            .evidence
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert!(
            appellant.is_disjoint(&respondent),
            "case {}: evidence ids overlap between sides",
            case.id
        );
    }
}

// ---------------------------------------------------------------------------
// Pinned sample record
// ---------------------------------------------------------------------------

#[test]
fn test_record_two_matches_pinned_scenario() {
    let case = find_case("2").expect("record 2 should exist");
    assert_eq!(case.issue, "Patent Validity");
    assert_eq!(case.category.as_str(), "intellectual property");

    let first = &case.appellant.evidence[0];
    assert_eq!(first.id.as_str(), "C3");
    assert_eq!(first.desc, "Technical specifications");
}

// ---------------------------------------------------------------------------
// Interchange round-trip
// ---------------------------------------------------------------------------

#[test]
fn test_json_round_trip_preserves_every_field() {
    let original = argument_cases();
    let json = serde_json::to_string(original).expect("serialization should succeed");
    let parsed: Vec<ArgumentCase> =
        serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(parsed.as_slice(), original);
}

#[test]
fn test_serialized_records_use_external_field_names() {
    let value = serde_json::to_value(argument_cases()).expect("serialization should succeed");
    let record = &value[0];
    for key in ["id", "issue", "category", "appellant", "respondent"] {
        assert!(record.get(key).is_some(), "missing key {key:?}");
    }
    let appellant = record["appellant"].as_object().expect("appellant object");
    for key in ["mainArgument", "details", "evidence", "caselaw"] {
        assert!(appellant.contains_key(key), "missing key {key:?}");
    }
}
