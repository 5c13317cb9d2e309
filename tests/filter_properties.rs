//! Property tests for the filter engine.

use proptest::prelude::*;
use todoboard::filter::{compute_view, total_pages, ViewState};
use todoboard::TodoRecord;

fn arb_date() -> impl Strategy<Value = String> {
    (2023i32..=2024, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

fn arb_records() -> impl Strategy<Value = Vec<TodoRecord>> {
    prop::collection::vec(("[a-zA-Z ]{0,20}", any::<bool>(), arb_date()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (text, completed, date))| TodoRecord::new(i as i64 + 1, text, completed, date))
            .collect()
    })
}

proptest! {
    #[test]
    fn search_matches_are_case_insensitive(records in arb_records(), needle in "[a-zA-Z]{1,3}", page in 1usize..5) {
        let state = ViewState {
            search_text: needle.clone(),
            current_page: page,
            ..ViewState::default()
        };
        let view = compute_view(&records, &state);

        for record in &view.page_records {
            prop_assert!(record.text.to_lowercase().contains(&needle.to_lowercase()));
        }
        let expected = records
            .iter()
            .filter(|r| r.text.to_lowercase().contains(&needle.to_lowercase()))
            .count();
        prop_assert_eq!(view.total_filtered, expected);
    }

    #[test]
    fn date_bounds_are_inclusive(records in arb_records(), a in arb_date(), b in arb_date()) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let state = ViewState {
            date_from: Some(from.clone()),
            date_to: Some(to.clone()),
            ..ViewState::default()
        };
        let view = compute_view(&records, &state);

        for record in &view.page_records {
            prop_assert!(record.created_date >= from && record.created_date <= to);
        }
    }

    #[test]
    fn pages_never_exceed_page_size(records in arb_records(), page in 1usize..6) {
        let state = ViewState { current_page: page, ..ViewState::default() };
        let view = compute_view(&records, &state);

        prop_assert!(view.page_records.len() <= state.page_size);
        if page > total_pages(view.total_filtered, state.page_size) {
            prop_assert!(view.page_records.is_empty());
        }
    }
}
