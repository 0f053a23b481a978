pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod scheduler;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod catalog;
            pub mod category;
            pub mod event;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod state;
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod filter;
                pub mod query;
                pub mod view;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod toggle_registration {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod page;
    }
    pub mod event_form {
        pub mod core {
            pub mod decision;
            pub mod draft;
            pub mod events;
            pub mod evolve;
            pub mod field;
            pub mod intents;
            pub mod state;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod change_field {
                pub mod command;
                pub mod decide;
            }
            pub mod submit_event {
                pub mod command;
                pub mod decide;
            }
            pub mod reset_form {
                pub mod command;
                pub mod decide;
            }
        }
        pub mod handler;
        pub mod view;
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod navigation {
        pub mod navbar;
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
