use crate::types::TaskStatus;
use std::env;
use std::io::IsTerminal;

const ANSI_RESET: &str = "\x1b[0m";

pub fn use_color() -> bool {
    if let Ok(force) = env::var("CLICOLOR_FORCE")
        && force != "0"
    {
        return true;
    }
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(env::var("CLICOLOR").as_deref(), Ok("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

pub fn heading(value: &str) -> String {
    paint(value, "1;36")
}

pub fn task_id(value: &str) -> String {
    paint(value, "1;94")
}

pub fn key(value: &str) -> String {
    paint(value, "36")
}

pub fn muted(value: &str) -> String {
    paint(value, "90")
}

pub fn success(value: &str) -> String {
    paint(value, "1;32")
}

pub fn status(value: &str, status: TaskStatus) -> String {
    let code = match status {
        TaskStatus::Pending => "1;34",
        TaskStatus::InProgress => "1;36",
        TaskStatus::Completed => "1;32",
        TaskStatus::Cancelled => "90",
    };
    paint(value, code)
}

fn paint(value: &str, code: &str) -> String {
    if !use_color() {
        return value.to_string();
    }
    format!("\x1b[{}m{}{}", code, value, ANSI_RESET)
}
