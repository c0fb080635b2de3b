//! Filter/pagination integration tests.
//!
//! Property tests cover the list engine over arbitrary herds; the fixed cases
//! walk through a realistic screen session.

use livestock_core::models::{AnimalRecord, AnimalType, Caravan, Production, Sex};
use livestock_core::view::{filter_animals, paginate, AnimalBrowser, AnimalFilters, ListState};
use livestock_core::parse_collection;
use proptest::prelude::*;

fn animal_strategy() -> impl Strategy<Value = AnimalRecord> {
    (
        "[a-zA-Z ]{0,8}",
        proptest::option::of(0i64..2000),
        proptest::option::of(prop_oneof![Just(Sex::Male), Just(Sex::Female)]),
        proptest::option::of(prop_oneof![
            Just(AnimalType::Production),
            Just(AnimalType::Replacement)
        ]),
    )
        .prop_map(|(name, caravan, sex, tipe)| AnimalRecord {
            id: String::new(),
            name,
            caravan: caravan.map(Caravan::Number),
            sex,
            tipe,
            productive: Some(Production::Producing),
            liters_produce: "1".into(),
            cant_children: 0,
            age: 0,
        })
}

fn herd_strategy() -> impl Strategy<Value = Vec<AnimalRecord>> {
    proptest::collection::vec(animal_strategy(), 0..40).prop_map(|mut herd| {
        for (i, animal) in herd.iter_mut().enumerate() {
            animal.id = i.to_string();
        }
        herd
    })
}

fn filters_strategy() -> impl Strategy<Value = AnimalFilters> {
    (
        prop_oneof![Just("all"), Just("production"), Just("replacement")],
        prop_oneof![Just("all"), Just("male"), Just("female")],
    )
        .prop_map(|(kind, sex)| AnimalFilters::parse(kind, sex))
}

fn contains_term(animal: &AnimalRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    animal.name.to_lowercase().contains(&term) || animal.caravan_text().to_lowercase().contains(&term)
}

fn ids(animals: &[&AnimalRecord]) -> Vec<String> {
    animals.iter().map(|a| a.id.clone()).collect()
}

proptest! {
    #[test]
    fn search_keeps_exactly_the_matching_records(
        herd in herd_strategy(),
        term in "[a-z0-9]{1,3}",
    ) {
        let found = filter_animals(&herd, &term, &AnimalFilters::default());
        let found_ids = ids(&found);

        for animal in &herd {
            let matched = contains_term(animal, &term);
            prop_assert_eq!(found_ids.contains(&animal.id), matched);
        }
    }

    #[test]
    fn filtering_is_idempotent(
        herd in herd_strategy(),
        term in "[a-z0-9]{0,2}",
        filters in filters_strategy(),
    ) {
        let once: Vec<AnimalRecord> = filter_animals(&herd, &term, &filters)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_animals(&once, &term, &filters);
        prop_assert_eq!(twice.len(), once.len());
        prop_assert_eq!(ids(&twice), once.iter().map(|a| a.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn page_metadata_is_consistent(
        herd in herd_strategy(),
        filters in filters_strategy(),
        page in 0usize..8,
        page_size in 1usize..10,
    ) {
        let result = paginate(&herd, "", &filters, page, page_size);
        let filtered = filter_animals(&herd, "", &filters).len();

        prop_assert_eq!(result.total_count, filtered);
        prop_assert_eq!(result.total_pages, (filtered + page_size - 1) / page_size);
        prop_assert!(result.items.len() <= page_size);
        prop_assert!(result.page >= 1);
        prop_assert!(result.page <= result.total_pages.max(1));
    }

    #[test]
    fn paginate_is_deterministic(
        herd in herd_strategy(),
        term in "[a-z0-9]{0,2}",
        filters in filters_strategy(),
        page in 1usize..5,
    ) {
        let first = paginate(&herd, &term, &filters, page, 8);
        let second = paginate(&herd, &term, &filters, page, 8);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn changing_search_or_filters_returns_to_page_one(
        start_page in 1usize..10,
        term in "[a-z]{1,4}",
        filters in filters_strategy(),
    ) {
        let mut state = ListState::new();
        state.set_page(start_page, 10);
        state.set_search(term);
        prop_assert_eq!(state.page(), 1);

        state.set_page(start_page, 10);
        if state.set_filters(filters) {
            prop_assert_eq!(state.page(), 1);
        } else {
            prop_assert_eq!(state.page(), start_page);
        }
    }
}

#[test]
fn test_list_screen_session() {
    let payload = r#"[
        {"id": 1, "name": "Lola", "caravan": 101, "sex": 1, "tipe": 0},
        {"id": 2, "name": "Toro", "caravan": "202", "sex": "0", "tipe": "1"},
        {"id": 3, "name": "Mora", "caravan": 0, "sex": 1, "tipe": 1},
        {"id": 4, "name": "Pinta", "caravan": 404, "sex": 1, "tipe": 0},
        {"id": 5, "name": "Negra", "caravan": 505, "sex": 1, "tipe": 0}
    ]"#;
    let animals: Vec<AnimalRecord> = parse_collection(payload).unwrap();

    let mut browser = AnimalBrowser::new(2);
    browser.replace_snapshot(animals);

    let page = browser.current_page();
    assert_eq!(page.total_pages, 3);
    assert_eq!(ids(&page.items), vec!["1", "2"]);

    browser.go_to_page(3);
    assert_eq!(ids(&browser.current_page().items), vec!["5"]);

    // Typing in the search box goes back to page 1
    browser.set_search("0");
    let page = browser.current_page();
    assert_eq!(page.page, 1);
    assert_eq!(page.total_count, 5);

    browser.set_filters(AnimalFilters::parse("production", "female"));
    let page = browser.current_page();
    assert_eq!(ids(&page.items), vec!["1", "4"]);
    assert_eq!(page.total_pages, 2);

    browser.reset();
    assert_eq!(browser.current_page().total_count, 5);
}

#[test]
fn test_non_array_payload_renders_empty_list() {
    let animals: Vec<AnimalRecord> = parse_collection(r#"{"message": "oops"}"#).unwrap();
    let mut browser = AnimalBrowser::new(8);
    browser.replace_snapshot(animals);

    let page = browser.current_page();
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}
