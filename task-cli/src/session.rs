use crate::command::{Command, parse_line};
use crate::render;
use std::io::{BufRead, Write};
use task_list::TaskList;
use tracing::{debug, info, warn};

const INVALID_UTF8: &str = "error: input is not valid UTF-8";

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user before reading the next command.
    Continue(String),
    Quit,
}

/// An interactive session owning the task list for its whole lifetime.
pub struct Session {
    tasks: TaskList,
    prompt: String,
}

impl Session {
    pub fn new(tasks: TaskList, prompt: impl Into<String>) -> Self {
        Session {
            tasks,
            prompt: prompt.into(),
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Runs a single command to completion.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<Outcome> {
        debug!(?command, "Executing command");
        let out = match command {
            Command::Add { text } => match self.tasks.add_task(&text.concat()) {
                Some(id) => format!("Added task {id}\n{}", render::render_list(&self.tasks)),
                None => "Nothing to add\n".to_string(),
            },
            Command::Toggle { id } => {
                self.tasks.toggle_task(id);
                render::render_list(&self.tasks)
            }
            Command::CheckAll => {
                self.tasks.set_all_checked(true);
                render::render_list(&self.tasks)
            }
            Command::UncheckAll => {
                self.tasks.set_all_checked(false);
                render::render_list(&self.tasks)
            }
            Command::Mass => {
                self.tasks.toggle_all_checked();
                render::render_list(&self.tasks)
            }
            Command::Delete { id } => {
                self.tasks.delete_task(id);
                render::render_list(&self.tasks)
            }
            Command::ClearChecked => {
                self.tasks.delete_checked_tasks();
                render::render_list(&self.tasks)
            }
            Command::Count => format!("{}\n", self.tasks.count_checked()),
            Command::List { json: true } => render::render_json(self.tasks.tasks())?,
            Command::List { json: false } => render::render_list(&self.tasks),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(out))
    }

    /// Parses and runs one line of input. Parse errors are shown to the user.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<Outcome> {
        match parse_line(line) {
            Ok(command) => self.execute(command),
            Err(err) => Ok(Outcome::Continue(err.to_string())),
        }
    }

    /// Reads commands from `reader` until EOF or `quit`, writing output to `writer`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> anyhow::Result<()> {
        info!(tasks = self.tasks.len(), "Session started");
        write!(writer, "{}", render::render_list(&self.tasks))?;

        let mut buf = Vec::new();
        loop {
            write!(writer, "{}", self.prompt)?;
            writer.flush()?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                warn!("Ignoring input line that is not valid UTF-8");
                writeln!(writer, "{INVALID_UTF8}")?;
                continue;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(line)? {
                Outcome::Continue(out) => write!(writer, "{out}")?,
                Outcome::Quit => break,
            }
        }

        writeln!(writer)?;
        info!(tasks = self.tasks.len(), "Session ended");
        Ok(())
    }
}
