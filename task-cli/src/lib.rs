//! Interactive shell over a [`task_list::TaskList`] that lives for one session.
pub mod command;
pub mod config;
pub mod render;
pub mod session;

pub use command::{Command, parse_line};
pub use config::Config;
pub use session::{Outcome, Session};
