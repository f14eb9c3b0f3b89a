// Composition root for the persons service.
//
// - Read config from environment.
// - Instantiate the person store.
// - Wire the store into use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
