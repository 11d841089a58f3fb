// App module for silverzone_tui
// Handles application state, navigation and the report fetch lifecycle

pub mod actions;
pub mod input;
pub mod report;
pub mod router;
pub mod session;
pub mod state;

pub use input::handle_input;
pub use state::App;
