//! Terminal front end
//!
//! - **command**: line parsing into `ShellCommand`
//! - **executor**: runs a command against a `Glimmerly` session
//! - **render**: plain-text screens and tables

pub mod command;
pub mod executor;
pub mod render;

pub use command::{ParseError, ShellCommand, HELP};
pub use executor::{execute, Flow, ShellError};
pub use render::{feed_table, glimmer_table, nav_bar, profile_summary, render};
