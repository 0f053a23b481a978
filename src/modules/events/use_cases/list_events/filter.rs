use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::list_events::query::EventQuery;

/// Events matching both the category selection and the search text, in catalog order.
///
/// The search is a case-insensitive substring match against the title or the
/// location. An empty search matches every event.
pub fn filter_events<'a>(catalog: &'a [Event], query: &EventQuery) -> Vec<&'a Event> {
    let needle = query.search.to_lowercase();
    catalog
        .iter()
        .filter(|event| query.category.matches(event.category))
        .filter(|event| {
            event.title.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod filter_events_tests {
    use super::*;
    use crate::modules::events::core::catalog::seed_catalog;
    use crate::modules::events::core::category::{Category, CategorySelection};
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Vec<Event> {
        seed_catalog()
    }

    fn ids(events: &[&Event]) -> Vec<u32> {
        events.iter().map(|e| e.id).collect()
    }

    #[rstest]
    fn it_should_return_the_whole_catalog_without_filters(catalog: Vec<Event>) {
        let result = filter_events(&catalog, &EventQuery::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn it_should_keep_catalog_order_for_a_category(catalog: Vec<Event>) {
        let result = filter_events(&catalog, &EventQuery::new(Category::Workshop, ""));
        assert_eq!(ids(&result), vec![2, 5]);
    }

    #[rstest]
    fn it_should_match_the_location_case_insensitively(catalog: Vec<Event>) {
        let result = filter_events(&catalog, &EventQuery::new(CategorySelection::All, "san"));
        assert_eq!(ids(&result), vec![1]);
    }

    #[rstest]
    #[case("FESTIVAL", vec![3])]
    #[case("2025", vec![1, 3])]
    #[case(", ca", vec![1, 3])]
    #[case("wine", vec![6])]
    #[case("nowhere", vec![])]
    fn it_should_match_title_or_location(
        catalog: Vec<Event>,
        #[case] search: &str,
        #[case] expected: Vec<u32>,
    ) {
        let result = filter_events(&catalog, &EventQuery::new(CategorySelection::All, search));
        assert_eq!(ids(&result), expected);
    }

    #[rstest]
    fn it_should_not_match_the_description(catalog: Vec<Event>) {
        let result = filter_events(&catalog, &EventQuery::new(CategorySelection::All, "investors"));
        assert!(result.is_empty());
    }

    #[rstest]
    fn it_should_combine_category_and_search(catalog: Vec<Event>) {
        // "ca" also hits "Chicago".
        let festival_ca = filter_events(&catalog, &EventQuery::new(Category::Festival, "ca"));
        assert_eq!(ids(&festival_ca), vec![3, 6]);

        let conference_in_ny = filter_events(&catalog, &EventQuery::new(Category::Conference, "new york"));
        assert!(conference_in_ny.is_empty());
    }

    #[rstest]
    fn it_should_return_nothing_for_an_unused_category(catalog: Vec<Event>) {
        assert!(filter_events(&catalog, &EventQuery::new(Category::Webinar, "")).is_empty());
    }

    #[rstest]
    fn it_should_only_return_events_satisfying_the_predicate(catalog: Vec<Event>) {
        let selections = std::iter::once(CategorySelection::All)
            .chain(Category::all().into_iter().map(CategorySelection::Only));
        let searches = ["", "a", "SAN", "tech", " ", "x", "expo", "TX"];
        for category in selections {
            for search in searches {
                let query = EventQuery::new(category, search);
                let result = filter_events(&catalog, &query);
                let needle = search.to_lowercase();
                for event in &result {
                    assert!(category.matches(event.category));
                    assert!(
                        search.is_empty()
                            || event.title.to_lowercase().contains(&needle)
                            || event.location.to_lowercase().contains(&needle)
                    );
                }
                assert_eq!(result, filter_events(&catalog, &query), "filter must be pure");
            }
        }
    }
}
