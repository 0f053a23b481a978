// Composition root of the view host.
//
// Responsibilities
// - Read config from the environment.
// - Own one session of each view controller.
// - Expose the controllers over HTTP.

pub mod config;
pub mod http;
pub mod state;
