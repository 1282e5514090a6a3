//! Tests for the selection resolver

extern crate std;

use crate::convert::selection::{resolve, SelectionSpec};
use crate::heic::errors::HeicError;

#[test]
fn test_literal_list_preserves_order_and_duplicates() {
    let spec = SelectionSpec::Indices(vec![2, 0, 2, 1]);
    let resolved = resolve(&spec, 3).unwrap();

    std::assert_eq!(resolved.indices(), &[2, 0, 2, 1]);
    std::assert!(!resolved.is_single());
}

#[test]
fn test_single_index_is_single_intent() {
    let spec = SelectionSpec::Indices(vec![0]);
    let resolved = resolve(&spec, 5).unwrap();

    std::assert_eq!(resolved.indices(), &[0]);
    std::assert!(resolved.is_single());
}

#[test]
fn test_all_sentinel_resolves_to_full_range() {
    let resolved = resolve(&SelectionSpec::All, 4).unwrap();
    std::assert_eq!(resolved.indices(), &[0, 1, 2, 3]);
    std::assert!(!resolved.is_single());
}

#[test]
fn test_all_sentinel_over_one_image_is_single() {
    // Intent follows the entry count, not the spelling of the request
    let resolved = resolve(&SelectionSpec::All, 1).unwrap();
    std::assert_eq!(resolved.indices(), &[0]);
    std::assert!(resolved.is_single());
}

#[test]
fn test_index_past_end_is_rejected() {
    let spec = SelectionSpec::Indices(vec![0, 3]);
    let result = resolve(&spec, 3);

    match result {
        Err(HeicError::SelectionOutOfRange { requested, total }) => {
            std::assert_eq!(requested, 3);
            std::assert_eq!(total, 3);
        }
        other => std::panic!("expected SelectionOutOfRange, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_negative_index_is_rejected() {
    let spec = SelectionSpec::Indices(vec![-2]);
    let result = resolve(&spec, 3);

    match result {
        Err(HeicError::SelectionOutOfRange { requested, total }) => {
            std::assert_eq!(requested, -2);
            std::assert_eq!(total, 3);
        }
        other => std::panic!("expected SelectionOutOfRange, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_requested_all_sentinel_maps_to_all() {
    std::assert_eq!(SelectionSpec::from_requested(Some(&[-1])), SelectionSpec::All);
}

#[test]
fn test_requested_literal_list_passes_through() {
    std::assert_eq!(
        SelectionSpec::from_requested(Some(&[2, 0, 2])),
        SelectionSpec::Indices(vec![2, 0, 2])
    );
}

#[test]
fn test_absent_or_empty_request_selects_first_image() {
    // The spec's index list is never empty, both cases fall back to [0]
    std::assert_eq!(
        SelectionSpec::from_requested(None),
        SelectionSpec::Indices(vec![0])
    );
    std::assert_eq!(
        SelectionSpec::from_requested(Some(&[])),
        SelectionSpec::Indices(vec![0])
    );
}

#[test]
fn test_resolution_is_fail_closed() {
    // One bad index rejects the whole list, valid entries included
    let spec = SelectionSpec::Indices(vec![0, 1, 99]);
    std::assert!(resolve(&spec, 2).is_err());
}
