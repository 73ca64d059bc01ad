// Application and presentation layers.
// The binary in main.rs only loads configuration and calls `run`.

pub mod application;
pub mod presentation;

pub use presentation::server::{build_router, run};
pub use presentation::state::AppState;
