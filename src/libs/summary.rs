//! Dashboard aggregates derived from the task list.
//!
//! Everything here is recomputed from the full, unfiltered list on every
//! call; nothing is cached or persisted. Wire field names follow the
//! companion server's JSON contract (`byPriority` etc.).

use crate::libs::filter::is_overdue;
use crate::libs::task::{Priority, Task};
use serde::{Deserialize, Serialize};

/// Task counts partitioned by priority. All three keys are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregate counts for the summary dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub by_priority: PriorityBreakdown,
}

/// Computes summary counts in a single pass.
///
/// Invariants: `completed + pending == total` and the priority breakdown
/// sums to `total`. A completed task is never counted as overdue.
pub fn calculate_summary(tasks: &[Task]) -> TaskSummary {
    let mut summary = TaskSummary::default();

    for task in tasks {
        summary.total += 1;
        if task.completed {
            summary.completed += 1;
        } else {
            summary.pending += 1;
        }
        if is_overdue(task.due_date, task.completed) {
            summary.overdue += 1;
        }
        match task.priority {
            Priority::High => summary.by_priority.high += 1,
            Priority::Medium => summary.by_priority.medium += 1,
            Priority::Low => summary.by_priority.low += 1,
        }
    }

    summary
}

/// Derived percentages for the statistics dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// Completed share of all tasks, percent rounded to nearest integer.
    pub completion_rate: u32,
    pub high_completion_rate: u32,
    pub medium_completion_rate: u32,
    pub low_completion_rate: u32,
    /// Overdue share of all tasks.
    pub overdue_pct: u32,
}

fn rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Computes completion and overdue rates from the task list.
pub fn calculate_stats(tasks: &[Task]) -> TaskStats {
    let summary = calculate_summary(tasks);

    let completed_of = |priority: Priority| tasks.iter().filter(|t| t.priority == priority && t.completed).count();

    TaskStats {
        completion_rate: rate(summary.completed, summary.total),
        high_completion_rate: rate(completed_of(Priority::High), summary.by_priority.high),
        medium_completion_rate: rate(completed_of(Priority::Medium), summary.by_priority.medium),
        low_completion_rate: rate(completed_of(Priority::Low), summary.by_priority.low),
        overdue_pct: rate(summary.overdue, summary.total),
    }
}
