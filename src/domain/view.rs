use crate::domain::deadline::normalize_deadline;
use crate::domain::groups::{GroupKey, group_key};
use crate::types::{Scope, StatusTab, Task, TaskGroup};
use chrono::NaiveDate;

/// Scope pre-filter. Inbox and project views pass everything through: the
/// data source already narrowed project membership. The date views compare
/// normalized deadlines against the injected `today`; undated tasks never
/// appear in them.
pub fn scope_filter(tasks: &[Task], scope: Scope, today: NaiveDate) -> Vec<Task> {
    match scope {
        Scope::Inbox | Scope::Project => tasks.to_vec(),
        Scope::Today => tasks
            .iter()
            .filter(|task| {
                normalize_deadline(task.deadline.as_deref())
                    .map(|day| day <= today)
                    .unwrap_or(false)
            })
            .cloned()
            .collect(),
        Scope::Upcoming => tasks
            .iter()
            .filter(|task| {
                normalize_deadline(task.deadline.as_deref())
                    .map(|day| day > today)
                    .unwrap_or(false)
            })
            .cloned()
            .collect(),
    }
}

/// Status-tab narrowing, applied after the scope filter. Order preserved.
pub fn status_filter(tasks: &[Task], tab: StatusTab) -> Vec<Task> {
    match tab {
        StatusTab::All => tasks.to_vec(),
        StatusTab::Only(status) => tasks
            .iter()
            .filter(|task| task.status == status)
            .cloned()
            .collect(),
    }
}

/// Buckets tasks by group key and orders the groups. Grouping is stable:
/// tasks keep input order within their group. Groups not present in the
/// data are never emitted.
pub fn group_tasks(
    tasks: &[Task],
    scope: Scope,
    today: NaiveDate,
    day_label: &dyn Fn(NaiveDate) -> String,
) -> Vec<TaskGroup> {
    let mut buckets: Vec<(GroupKey, Vec<Task>)> = Vec::new();
    for task in tasks {
        let key = group_key(task, scope, today);
        match buckets.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(task.clone()),
            None => buckets.push((key, vec![task.clone()])),
        }
    }

    buckets.sort_by_key(|(key, _)| key.rank());

    buckets
        .into_iter()
        .map(|(key, tasks)| TaskGroup {
            label: key.label(day_label),
            collapsed_by_default: key.collapsed_by_default(),
            tasks,
        })
        .collect()
}

/// The full derivation: scope filter, then status tab, then grouping. Pure
/// in all four inputs; `today` is taken as a value so a derivation pass can
/// never observe two different days.
pub fn derive_view(
    tasks: &[Task],
    scope: Scope,
    tab: StatusTab,
    today: NaiveDate,
    day_label: &dyn Fn(NaiveDate) -> String,
) -> Vec<TaskGroup> {
    let scoped = scope_filter(tasks, scope, today);
    let narrowed = status_filter(&scoped, tab);
    group_tasks(&narrowed, scope, today, day_label)
}
