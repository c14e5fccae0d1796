use task_list::{Task, TaskList};

pub const EMPTY_LIST: &str = "No tasks yet.";

/// Label of the mass-check affordance for the list's current state.
pub fn mass_check_label(list: &TaskList) -> &'static str {
    if list.all_checked() {
        "Uncheck All"
    } else {
        "Check All"
    }
}

pub fn render_task(task: &Task) -> String {
    let mark = if task.is_checked() { 'x' } else { ' ' };
    format!("[{mark}] {}  {}", task.id(), task.text())
}

/// Renders every task followed by a summary line.
pub fn render_list(list: &TaskList) -> String {
    if list.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    let lines: Vec<String> = list.tasks().iter().map(render_task).collect();
    format!(
        "{}\n{} of {} checked | {}\n",
        lines.join("\n"),
        list.count_checked(),
        list.len(),
        mass_check_label(list)
    )
}

pub fn render_json(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tasks).map(|json| json + "\n")
}
