pub mod actions;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod session;

pub use console::Console;
pub use session::Outcome;
