#![cfg(feature = "search")]
//! Scenario tests for the search functions.
//!
//! Each test exercises the public API through the prelude, on the kind of
//! inputs a caller would actually hand it.

use lambars_search::prelude::*;
use rstest::rstest;
use std::collections::{LinkedList, VecDeque};

fn is_even(value: &i32) -> bool {
    value % 2 == 0
}

// =============================================================================
// Element/Index Search
// =============================================================================

mod element_search {
    use super::*;

    #[rstest]
    fn first_even_index() {
        assert_eq!(find_first_idx_by(is_even, &[1, 3, 4, 6, 9]), Some(2));
        assert_eq!(find_first_idx_by(is_even, &[1, 3, 5, 7, 9]), None);
    }

    #[rstest]
    fn last_even_index() {
        assert_eq!(find_last_idx_by(is_even, &[1, 3, 4, 6, 9]), Some(3));
        assert_eq!(find_last_idx_by(is_even, &[1, 3, 5, 7, 9]), None);
    }

    #[rstest]
    fn first_and_last_even_element() {
        assert_eq!(find_first_by(is_even, &[1, 3, 4, 6, 9]), Some(4));
        assert_eq!(find_last_by(is_even, &[1, 3, 4, 6, 9]), Some(6));
    }

    #[rstest]
    fn first_and_last_index_of_value() {
        assert_eq!(find_first_idx(&4, &[1, 3, 4, 4, 9]), Some(2));
        assert_eq!(find_last_idx(&4, &[1, 3, 4, 4, 9]), Some(3));
        assert_eq!(find_first_idx(&4, &[1, 3, 5, 7, 9]), None);
        assert_eq!(find_last_idx(&4, &[1, 3, 5, 7, 9]), None);
    }

    #[rstest]
    #[case::vec(find_last_idx_by(is_even, &vec![2, 1, 4, 1]))]
    #[case::deque(find_last_idx_by(is_even, &VecDeque::from(vec![2, 1, 4, 1])))]
    #[case::list(find_last_idx_by(is_even, &[2, 1, 4, 1].into_iter().collect::<LinkedList<_>>()))]
    #[case::slice(find_last_idx_by(is_even, &[2, 1, 4, 1][..]))]
    fn last_index_is_container_independent(#[case] found: Option<usize>) {
        assert_eq!(found, Some(2));
    }

    #[rstest]
    fn last_search_of_reversed_view_is_first_search() {
        let values = vec![1, 3, 4, 6, 9];
        let reversed = reverse(&values);

        assert_eq!(find_last_by(is_even, &reversed), find_first_by(is_even, &values));
        assert_eq!(find_last_idx_by(is_even, &reversed), Some(2));
    }

    #[rstest]
    fn search_leaves_input_untouched() {
        let values = vec![5, 8, 13];
        let before = values.clone();

        let _ = find_last_idx_by(is_even, &values);
        let _ = find_first_by(is_even, &values);

        assert_eq!(values, before);
    }
}

// =============================================================================
// Multi-Occurrence Index Search
// =============================================================================

mod multi_occurrence_search {
    use super::*;

    #[rstest]
    fn all_even_indices() {
        let indices: Vec<usize> = find_all_idxs_by(is_even, &[1, 3, 4, 6, 9]);
        assert_eq!(indices, vec![2, 3]);
    }

    #[rstest]
    fn all_indices_of_value_into_linked_list() {
        let indices: LinkedList<usize> = find_all_idxs_of(&4, &[1, 3, 4, 4, 9]);
        assert_eq!(indices.into_iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn empty_input_gives_empty_result() {
        let empty: Vec<i32> = Vec::new();
        let indices: VecDeque<usize> = find_all_idxs_by(is_even, &empty);
        assert!(indices.is_empty());
    }
}

// =============================================================================
// Subsequence Search
// =============================================================================

mod subsequence_search {
    use super::*;

    #[rstest]
    fn overlapping_laughter() {
        let found: Vec<usize> = find_all_instances_of("haha", "oh, hahaha!");
        assert_eq!(found, vec![4, 6]);
    }

    #[rstest]
    fn non_overlapping_laughter() {
        let found: Vec<usize> = find_all_instances_of_non_overlapping("haha", "oh, hahaha!");
        assert_eq!(found, vec![4]);
    }

    #[rstest]
    fn token_longer_than_haystack() {
        let found: Vec<usize> = find_all_instances_of("oh, hahaha!!", "oh, hahaha!");
        assert!(found.is_empty());

        let found: Vec<usize> = find_all_instances_of_non_overlapping(&[1, 2, 3], &[1, 2]);
        assert!(found.is_empty());
    }

    #[rstest]
    fn zero_length_token_matches_at_every_position() {
        let token: [u8; 0] = [];
        let found: Vec<usize> = find_all_instances_of(&token, &[9, 9]);
        assert_eq!(found, vec![0, 1, 2]);

        let found: Vec<usize> = find_all_instances_of_kmp(&token, &[9, 9]);
        assert_eq!(found, vec![0, 1, 2]);
    }

    #[rstest]
    #[case("aa", "aaa", vec![0, 1])]
    #[case("aa", "aaaaaa", vec![0, 1, 2, 3, 4])]
    #[case("aba", "ababa", vec![0, 2])]
    fn overlapping_occurrences_are_reported(
        #[case] token: &str,
        #[case] text: &str,
        #[case] expected: Vec<usize>,
    ) {
        let naive: Vec<usize> = find_all_instances_of(token, text);
        let kmp: Vec<usize> = find_all_instances_of_kmp(token, text);
        assert_eq!(naive, expected);
        assert_eq!(kmp, expected);
    }

    #[rstest]
    #[case("aa", "aaaaaa", vec![0, 2, 4])]
    #[case("aba", "ababa", vec![0])]
    #[case("aba", "abaaba", vec![0, 3])]
    fn greedy_non_overlapping_selection(
        #[case] token: &str,
        #[case] text: &str,
        #[case] expected: Vec<usize>,
    ) {
        let found: Vec<usize> = find_all_instances_of_non_overlapping(token, text);
        assert_eq!(found, expected);
    }

    #[rstest]
    fn byte_strings_are_sequences() {
        let found: Vec<usize> = find_all_instances_of(b"\r\n", b"GET / HTTP/1.1\r\nHost: x\r\n\r\n");
        assert_eq!(found, vec![14, 23, 25]);
    }
}
