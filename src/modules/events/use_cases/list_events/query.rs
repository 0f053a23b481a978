use crate::modules::events::core::category::CategorySelection;

/// Filters applied to the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub category: CategorySelection,
    pub search: String,
}

impl EventQuery {
    pub fn new(category: impl Into<CategorySelection>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }
}
