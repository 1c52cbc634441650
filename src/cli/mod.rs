//! Interactive shell
//!
//! The numbered menu, its prompt loops and the per-session state. Everything
//! that reads from the terminal lives here; the layers below only validate
//! and compute.

pub mod menu;
pub mod prompt;
pub mod shell;

pub use menu::{format_menu, Flow, MenuCommand};
pub use prompt::Prompter;
pub use shell::Shell;
