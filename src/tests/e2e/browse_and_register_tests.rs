use crate::modules::events::core::category::{Category, CategorySelection};
use crate::modules::events::page::EventsPage;
use crate::modules::events::use_cases::toggle_registration::command::ToggleRegistration;

fn visible_ids(page: &EventsPage) -> Vec<u32> {
    page.view().events.iter().map(|card| card.id).collect()
}

#[test]
fn browses_filters_and_registers_across_filter_changes() {
    let mut page = EventsPage::default();
    assert_eq!(page.view().stats, "Showing 6 events");

    page.select_category(CategorySelection::Only(Category::Workshop));
    assert_eq!(visible_ids(&page), vec![2, 5]);

    let outcome = page.toggle_registration(ToggleRegistration { event_id: 5 });
    assert_eq!(outcome.message, "Registration successful!");

    page.select_category(CategorySelection::All);
    page.search("SAN");
    assert_eq!(visible_ids(&page), vec![1]);
    page.toggle_registration(ToggleRegistration { event_id: 3 });

    page.search("");
    let view = page.view();
    let actions: Vec<_> = view.events.iter().map(|card| (card.id, card.action)).collect();
    assert_eq!(
        actions,
        vec![
            (1, "Register"),
            (2, "Register"),
            (3, "Cancel"),
            (4, "Register"),
            (5, "Cancel"),
            (6, "Register"),
        ]
    );
    assert_eq!(view.registered, vec![3, 5]);
}

#[test]
fn registering_then_cancelling_restores_the_registration_set() {
    let mut page = EventsPage::default();
    page.toggle_registration(ToggleRegistration { event_id: 1 });
    let before = page.registrations().clone();

    page.toggle_registration(ToggleRegistration { event_id: 3 });
    let cancelled = page.toggle_registration(ToggleRegistration { event_id: 3 });

    assert_eq!(cancelled.message, "Registration cancelled successfully!");
    assert_eq!(page.registrations(), &before);
}
