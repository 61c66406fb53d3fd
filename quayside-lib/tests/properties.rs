//! Property tests for the pipeline stages.

use proptest::prelude::*;
use quayside_lib::model::{Identifiable, Record, TableRow};
use quayside_lib::table::{Column, Direction, SortMode, filter, paginate, sort, total_pages};

fn records(codes: &[String]) -> Vec<Record> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| Record::new(format!("r{}", i)).set("code", code.as_str()))
        .collect()
}

fn ids<'a>(rows: &[&'a Record]) -> Vec<&'a str> {
    rows.iter().copied().map(Identifiable::id).collect()
}

proptest! {
    #[test]
    fn prop_filter_is_ordered_subset(
        codes in prop::collection::vec("[a-zA-Z]{0,6}", 0..40),
        query in "[a-z]{0,3}",
    ) {
        let rows = records(&codes);
        let all: Vec<&Record> = rows.iter().collect();
        let matched = filter(&rows, &query);

        prop_assert!(matched.len() <= rows.len());
        // order preserved: positions in the input strictly increase
        let positions: Vec<usize> = matched
            .iter()
            .map(|m| all.iter().position(|r| r.id() == m.id()).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_empty_query_is_identity(codes in prop::collection::vec("[a-z]{0,6}", 0..40)) {
        let rows = records(&codes);
        let all: Vec<&Record> = rows.iter().collect();
        prop_assert_eq!(ids(&filter(&rows, "")), ids(&all));
    }

    #[test]
    fn prop_descending_reverses_ascending_without_ties(
        codes in prop::collection::hash_set("[a-z]{1,8}", 0..30),
    ) {
        let codes: Vec<String> = codes.into_iter().collect();
        let rows = records(&codes);
        let column = Column::new("code", "Code").sortable();

        let asc = sort(rows.iter().collect(), Some(&column), Direction::Asc);
        let mut desc = sort(rows.iter().collect(), Some(&column), Direction::Desc);
        desc.reverse();
        prop_assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn prop_sort_is_stable(codes in prop::collection::vec("[ab]{1}", 0..30)) {
        let rows = records(&codes);
        let column = Column::new("code", "Code").sortable();

        for direction in [Direction::Asc, Direction::Desc] {
            let sorted = sort(rows.iter().collect(), Some(&column), direction);
            for pair in sorted.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a.field("code") == b.field("code") {
                    let ia: usize = a.id()[1..].parse().unwrap();
                    let ib: usize = b.id()[1..].parse().unwrap();
                    prop_assert!(ia < ib);
                }
            }
        }
    }

    #[test]
    fn prop_sort_is_a_permutation(codes in prop::collection::vec(any::<i32>(), 0..30)) {
        let rows: Vec<Record> = codes
            .iter()
            .enumerate()
            .map(|(i, n)| Record::new(format!("r{}", i)).set("n", *n))
            .collect();
        let column = Column::new("n", "N").sortable().sort_mode(SortMode::Typed);

        let sorted = sort(rows.iter().collect(), Some(&column), Direction::Asc);
        prop_assert_eq!(sorted.len(), rows.len());
        let mut sorted_ids = ids(&sorted);
        let mut input_ids: Vec<&str> = rows.iter().map(|r| r.id()).collect();
        sorted_ids.sort_unstable();
        input_ids.sort_unstable();
        prop_assert_eq!(sorted_ids, input_ids);
    }

    #[test]
    fn prop_page_holds_at_most_page_size(
        len in 0usize..200,
        page in 0usize..30,
        page_size in 0usize..25,
    ) {
        let data: Vec<usize> = (0..len).collect();
        let refs: Vec<&usize> = data.iter().collect();
        let slice = paginate(&refs, page, page_size);

        prop_assert!(slice.len() <= page_size.max(1));
        prop_assert!(slice.page() >= 1 && slice.page() <= slice.total_pages());
        prop_assert_eq!(slice.total_pages(), total_pages(len, page_size));
        // never an out-of-range empty page while entries exist
        prop_assert_eq!(slice.is_empty(), len == 0);
    }

    #[test]
    fn prop_pages_concatenate_to_input(len in 0usize..120, page_size in 1usize..15) {
        let data: Vec<usize> = (0..len).collect();
        let refs: Vec<&usize> = data.iter().collect();

        let pages = total_pages(len, page_size);
        let joined: Vec<usize> = (1..=pages)
            .flat_map(|p| paginate(&refs, p, page_size).into_rows())
            .copied()
            .collect();
        prop_assert_eq!(joined, data);
    }
}

#[test]
fn test_total_pages_of_empty_input_is_one() {
    assert_eq!(total_pages(0, 1), 1);
    assert_eq!(total_pages(0, 50), 1);
}
