//! Unit tests for Multiset, cardinality helpers, and equators.

use bagwise::equivalence::{DefaultEquator, Equator, FnEquator, by_key};
use bagwise::multiset::{cardinality, cardinality_map};
use bagwise::{CollectionError, Multiset};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_multiset_is_empty() {
    let multiset: Multiset<'_, i32> = Multiset::new();
    assert!(multiset.is_empty());
    assert_eq!(multiset.total_len(), 0);
    assert_eq!(multiset.distinct_len(), 0);
}

#[rstest]
fn test_from_sequence_counts_each_class() {
    let values = vec!["a", "b", "a", "c", "a"];
    let multiset = Multiset::from_sequence(&values, DefaultEquator).unwrap();
    assert_eq!(multiset.cardinality(&"a"), 3);
    assert_eq!(multiset.cardinality(&"b"), 1);
    assert_eq!(multiset.cardinality(&"z"), 0);
    assert_eq!(multiset.total_len(), 5);
}

#[rstest]
fn test_from_sequence_rejects_absent_input() {
    let absent: Option<Vec<i32>> = None;
    let result = Multiset::from_sequence(&absent, DefaultEquator);
    assert!(matches!(
        result,
        Err(CollectionError::InvalidArgument {
            argument: "sequence",
            ..
        })
    ));
}

#[rstest]
fn test_from_sequence_accepts_empty_input() {
    let empty: Vec<i32> = Vec::new();
    let multiset = Multiset::from_sequence(&empty, DefaultEquator).unwrap();
    assert!(multiset.is_empty());
}

// =============================================================================
// Insert and remove
// =============================================================================

#[rstest]
fn test_insert_returns_running_count() {
    let values = [4, 4, 4];
    let mut multiset = Multiset::new();
    let counts: Vec<usize> = values.iter().map(|value| multiset.insert(value)).collect();
    assert_eq!(counts, vec![1, 2, 3]);
}

#[rstest]
fn test_total_tracks_inserts_minus_removes() {
    let values = [1, 2, 2, 3];
    let mut multiset = Multiset::from_elements(&values, DefaultEquator);
    assert!(multiset.remove(&2));
    assert!(multiset.remove(&3));
    assert!(!multiset.remove(&3));
    assert!(!multiset.remove(&9));
    assert_eq!(multiset.total_len(), 2);
    assert_eq!(multiset.distinct_len(), 2);
    assert!(!multiset.contains(&3));
}

#[rstest]
fn test_is_sub_multiset_of() {
    let small = [1, 2];
    let large = [2, 1, 1];
    let small = Multiset::from_elements(&small, DefaultEquator);
    let large = Multiset::from_elements(&large, DefaultEquator);
    assert!(small.is_sub_multiset_of(&large));
    assert!(!large.is_sub_multiset_of(&small));
}

// =============================================================================
// Custom equators
// =============================================================================

#[rstest]
fn test_custom_equator_groups_consistently() {
    let modulo_three = FnEquator::new(
        |left: &u32, right: &u32| left % 3 == right % 3,
        |value: &u32| u64::from(value % 3),
    );
    let values = [1, 4, 7, 2, 5];
    let multiset = Multiset::from_elements(&values, modulo_three);
    assert_eq!(multiset.cardinality(&10), 3);
    assert_eq!(multiset.cardinality(&8), 2);
    assert_eq!(multiset.cardinality(&3), 0);
    let representatives: Vec<u32> = multiset.iter().map(|(value, _)| *value).collect();
    assert_eq!(representatives, vec![1, 2]);
}

#[rstest]
fn test_by_key_equator_laws() {
    let equator = by_key(|text: &&str| text.trim().to_string());
    let samples = [" a", "a ", "b", "a"];
    for left in &samples {
        assert!(equator.equate(left, left));
        for right in &samples {
            assert_eq!(equator.equate(left, right), equator.equate(right, left));
            if equator.equate(left, right) {
                assert_eq!(equator.hash(left), equator.hash(right));
            }
        }
    }
}

// =============================================================================
// Free functions
// =============================================================================

#[rstest]
#[case(1, 2)]
#[case(2, 1)]
#[case(9, 0)]
fn test_cardinality_cases(#[case] value: i32, #[case] expected: usize) {
    assert_eq!(cardinality(&value, &[1, 2, 1, 3], DefaultEquator), Ok(expected));
}

#[rstest]
fn test_cardinality_rejects_absent_sequence() {
    let absent: Option<[i32; 1]> = None;
    assert!(cardinality(&1, &absent, DefaultEquator).is_err());
}

#[rstest]
fn test_cardinality_map_counts_values() {
    let counts = cardinality_map(&["a", "b", "a"]).unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["a"], 2);
    assert_eq!(counts["b"], 1);
}
