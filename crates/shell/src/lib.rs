//! `stockline-shell` — interactive console front end for the inventory.
//!
//! Reads menu choices and values line by line, calls into
//! `stockline-inventory`, and renders each result as text or JSON.

pub mod config;
pub mod input;
pub mod report;
pub mod session;

pub use config::{OutputMode, ShellConfig};
pub use input::{InputError, Prompter};
pub use report::{Action, Report};
pub use session::{MenuOption, Session};
