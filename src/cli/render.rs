use crate::app::runtime::status_to_string;
use crate::app::service_types::ViewResult;
use crate::cli::style;
use crate::domain::deadline::normalize_deadline;
use crate::types::{Project, Task};

pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", style::muted("no tasks"));
        return;
    }

    let header = ["ID", "STATUS", "DEADLINE", "DESCRIPTION"];
    let rows: Vec<Vec<String>> = tasks.iter().map(task_row).collect();

    let mut widths: Vec<usize> = header.iter().map(|value| value.len()).collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            if cell.len() > widths[index] {
                widths[index] = cell.len();
            }
        }
    }

    println!(
        "{}",
        style::heading(
            header
                .iter()
                .enumerate()
                .map(|(index, cell)| format!("{:width$}", cell, width = widths[index]))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end(),
        )
    );
    for (task, row) in tasks.iter().zip(&rows) {
        let cells = row
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let padded = format!("{:width$}", cell, width = widths[index]);
                match index {
                    0 => style::task_id(&padded),
                    1 => style::status(&padded, task.status),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>();
        println!("{}", cells.join("  ").trim_end());
    }
}

/// Renders groups in their derived order. Groups flagged collapsed print as
/// a header with a count only, unless expansion was requested.
pub fn print_view(view: &ViewResult, expand_collapsed: bool) {
    if view.groups.is_empty() {
        println!("{}", style::muted("no tasks"));
        return;
    }

    let mut first = true;
    for group in &view.groups {
        if !first {
            println!();
        }
        first = false;

        let header = format!("{} ({})", group.label, group.tasks.len());
        if group.collapsed_by_default && !expand_collapsed {
            println!(
                "{} {}",
                style::heading(&header),
                style::muted("(collapsed, use --expand-completed)")
            );
            continue;
        }
        println!("{}", style::heading(&header));
        for task in &group.tasks {
            print_task_line(task);
        }
    }
}

pub fn print_task(task: &Task) {
    println!("{} {}", style::task_id(&task.id), task.description);
    println!(
        "{} {}",
        style::key("status:"),
        style::status(status_to_string(task.status), task.status)
    );
    if let Some(deadline) = &task.deadline {
        println!("{} {}", style::key("deadline:"), format_deadline(deadline));
    }
    if let Some(long_description) = &task.long_description {
        println!("{} {}", style::key("notes:"), long_description);
    }
    if let Some(project_id) = &task.project_id {
        println!("{} {}", style::key("project:"), project_id);
    }
    if let Some(parent_id) = &task.parent_id {
        println!("{} {}", style::key("parent:"), parent_id);
    }
    println!("{} {}", style::key("created:"), task.created_at);
}

pub fn print_project(project: &Project) {
    println!("{} {}", style::task_id(&project.id), project.name);
}

pub fn print_project_list(projects: &[Project]) {
    if projects.is_empty() {
        println!("{}", style::muted("no projects"));
        return;
    }
    for project in projects {
        print_project(project);
    }
}

fn print_task_line(task: &Task) {
    let deadline = task
        .deadline
        .as_deref()
        .map(format_deadline)
        .unwrap_or_default();
    let suffix = if deadline.is_empty() {
        String::new()
    } else {
        format!("  {}", style::muted(&deadline))
    };
    println!(
        "  {}  {}  {}{}",
        style::task_id(&task.id),
        style::status(status_to_string(task.status), task.status),
        task.description,
        suffix
    );
}

fn task_row(task: &Task) -> Vec<String> {
    vec![
        task.id.clone(),
        status_to_string(task.status).to_string(),
        task.deadline
            .as_deref()
            .map(format_deadline)
            .unwrap_or_else(|| "-".to_string()),
        task.description.clone(),
    ]
}

// Unparseable deadlines render as stored rather than disappearing.
fn format_deadline(raw: &str) -> String {
    normalize_deadline(Some(raw))
        .map(|day| day.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}
