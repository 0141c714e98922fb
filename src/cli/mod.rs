//! Interactive command-line front end.
//!
//! - **args**: command-line arguments
//! - **loader**: reading records from a file or the terminal
//! - **session**: the menu loop driving searches

pub mod args;
pub mod loader;
pub mod session;

pub use args::Args;
pub use session::{MenuAction, Session};
