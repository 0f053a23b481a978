use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::modules::event_form::handler::{DEFAULT_RESET_DELAY, EventFormHandler};
use crate::modules::events::page::EventsPage;
use crate::modules::navigation::navbar::Navbar;
use crate::shell::config::Config;

/// One session of every view, shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub navbar: Arc<Mutex<Navbar>>,
    pub events: Arc<Mutex<EventsPage>>,
    pub form: Arc<EventFormHandler>,
}

impl AppState {
    pub fn new(form_reset_delay: Duration) -> Self {
        Self {
            navbar: Arc::new(Mutex::new(Navbar::default())),
            events: Arc::new(Mutex::new(EventsPage::default())),
            form: Arc::new(EventFormHandler::new(form_reset_delay)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.form_reset_delay)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}
