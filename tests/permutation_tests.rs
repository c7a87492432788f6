#![cfg(feature = "permutation")]
//! Unit tests for the permutation generator.

use std::collections::HashSet;

use bagwise::CollectionError;
use bagwise::permutation::{Permutations, permutations};
use rstest::rstest;

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 6)]
#[case(4, 24)]
#[case(5, 120)]
fn test_yields_factorial_many_orderings(#[case] length: u32, #[case] expected: usize) {
    let input: Vec<u32> = (0..length).collect();
    assert_eq!(permutations(&input).unwrap().count(), expected);
}

#[rstest]
fn test_three_elements_in_adjacent_swap_order() {
    let orderings: Vec<Vec<char>> = permutations(&['a', 'b', 'c']).unwrap().collect();
    assert_eq!(
        orderings,
        vec![
            vec!['a', 'b', 'c'],
            vec!['a', 'c', 'b'],
            vec!['c', 'a', 'b'],
            vec!['c', 'b', 'a'],
            vec!['b', 'c', 'a'],
            vec!['b', 'a', 'c'],
        ]
    );
}

#[rstest]
fn test_consecutive_orderings_differ_by_one_adjacent_swap() {
    let orderings: Vec<Vec<u8>> = permutations(&[1, 2, 3, 4]).unwrap().collect();
    for pair in orderings.windows(2) {
        let differing: Vec<usize> = (0..4).filter(|&i| pair[0][i] != pair[1][i]).collect();
        assert_eq!(differing.len(), 2);
        assert_eq!(differing[1] - differing[0], 1);
    }
}

#[rstest]
fn test_every_ordering_is_distinct_and_complete() {
    let input = vec![10, 20, 30, 40];
    let orderings: HashSet<Vec<i32>> = permutations(&input).unwrap().collect();
    assert_eq!(orderings.len(), 24);
    for ordering in &orderings {
        let mut sorted = ordering.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }
}

#[rstest]
fn test_duplicate_values_are_permuted_positionally() {
    let orderings: Vec<Vec<i32>> = permutations(&[7, 7]).unwrap().collect();
    assert_eq!(orderings, vec![vec![7, 7], vec![7, 7]]);
}

#[rstest]
fn test_single_element_yields_itself_once() {
    let mut generator = permutations(&["solo"]).unwrap();
    assert_eq!(generator.next(), Some(vec!["solo"]));
    assert_eq!(generator.next(), None);
}

#[rstest]
fn test_exhausted_generator_stays_exhausted() {
    let mut generator = Permutations::new(vec![1, 2]);
    assert_eq!(generator.by_ref().count(), 2);
    assert_eq!(generator.next(), None);
    assert_eq!(generator.next(), None);
}

#[rstest]
fn test_returned_orderings_are_independent() {
    let mut generator = permutations(&[1, 2, 3]).unwrap();
    let mut first = generator.next().unwrap();
    first.clear();
    assert_eq!(generator.next(), Some(vec![1, 3, 2]));
}

#[rstest]
fn test_source_mutation_after_creation_is_not_observed() {
    let mut source = vec![1, 2];
    let generator = permutations(&source).unwrap();
    source.push(3);
    assert_eq!(generator.count(), 2);
}

#[rstest]
fn test_absent_input_is_rejected() {
    let absent: Option<Vec<i32>> = None;
    assert!(matches!(
        permutations(&absent),
        Err(CollectionError::InvalidArgument {
            operation: "permutations",
            argument: "sequence",
        })
    ));
}

#[rstest]
fn test_size_hint_matches_remaining() {
    let mut generator = permutations(&[1, 2, 3, 4]).unwrap();
    generator.next();
    generator.next();
    assert_eq!(generator.size_hint(), (22, Some(22)));
}
