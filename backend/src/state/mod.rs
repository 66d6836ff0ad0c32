// State management module
// Holds the shared handles every request handler receives

pub mod app_state;

pub use app_state::AppState;
