use clap::{Parser, Subcommand};
use task_list::TaskId;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

/// One user action within a session.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        /// Holds the rest of the line as a single entry once parsed
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Check or uncheck a task
    Toggle { id: TaskId },
    /// Check every task
    CheckAll,
    /// Uncheck every task
    UncheckAll,
    /// Check every task, or uncheck them all if they are all checked
    Mass,
    /// Delete a task
    Delete { id: TaskId },
    /// Delete every checked task
    ClearChecked,
    /// Show how many tasks are checked
    Count,
    /// Show all tasks
    List {
        #[arg(long)]
        json: bool,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Parses one line of input. Words are split on whitespace, except for the
/// text of `add`, which keeps its inner spacing.
pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
    let command = Line::try_parse_from(line.split_whitespace())?.command;
    Ok(match command {
        Command::Add { .. } => Command::Add {
            text: vec![rest_of_line(line).to_string()],
        },
        other => other,
    })
}

fn rest_of_line(line: &str) -> &str {
    let line = line.trim();
    line.find(char::is_whitespace)
        .map_or("", |end| line[end..].trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_add_with_multiple_words() {
        let command = parse_line("add Buy  milk today").unwrap();

        assert_eq!(
            command,
            Command::Add {
                text: vec!["Buy  milk today".into()]
            }
        );
    }

    #[test]
    fn can_parse_add_without_text() {
        assert_eq!(
            parse_line("  add  ").unwrap(),
            Command::Add {
                text: vec![String::new()]
            }
        );
    }

    #[test]
    fn add_keeps_hyphenated_words() {
        let command = parse_line("add -- call mom").unwrap();

        assert_eq!(
            command,
            Command::Add {
                text: vec!["-- call mom".into()]
            }
        );
    }

    #[test]
    fn can_parse_commands_with_ids() {
        let id: TaskId = "3".parse().unwrap();

        assert_eq!(parse_line("toggle 3").unwrap(), Command::Toggle { id });
        assert_eq!(parse_line("delete 3").unwrap(), Command::Delete { id });
    }

    #[test]
    fn rejects_invalid_id() {
        let err = parse_line("toggle abc").unwrap_err();

        assert!(err.to_string().contains("not a valid task id"));
    }

    #[test]
    fn can_parse_bulk_commands() {
        assert_eq!(parse_line("check-all").unwrap(), Command::CheckAll);
        assert_eq!(parse_line("uncheck-all").unwrap(), Command::UncheckAll);
        assert_eq!(parse_line("mass").unwrap(), Command::Mass);
        assert_eq!(parse_line("clear-checked").unwrap(), Command::ClearChecked);
        assert_eq!(parse_line("count").unwrap(), Command::Count);
    }

    #[test]
    fn can_parse_list_flags() {
        assert_eq!(parse_line("list").unwrap(), Command::List { json: false });
        assert_eq!(
            parse_line("list --json").unwrap(),
            Command::List { json: true }
        );
    }

    #[test]
    fn exit_is_alias_for_quit() {
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
        assert_eq!(parse_line("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(parse_line("frobnicate").is_err());
    }
}
