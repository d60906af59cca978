//! Console table rendering for tasks and dashboards.

use crate::db::tags::TagUsage;
use crate::libs::filter::is_overdue;
use crate::libs::formatter::{format_due_date, format_tags, format_timestamp};
use crate::libs::summary::{TaskStats, TaskSummary};
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a task list with status, priority, due date and tags.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "DUE", "TAGS"]);
        for task in tasks {
            let status = if task.completed {
                "done".to_string()
            } else if is_overdue(task.due_date, task.completed) {
                "overdue".to_string()
            } else {
                "pending".to_string()
            };
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                status,
                task.priority,
                format_due_date(task.due_date),
                format_tags(&task.tags)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders a single task in full detail.
    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.unwrap_or(0)]);
        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description.clone().unwrap_or_default()]);
        table.add_row(row!["Status", if task.completed { "done" } else { "pending" }]);
        table.add_row(row!["Priority", task.priority]);
        table.add_row(row!["Tags", format_tags(&task.tags)]);
        table.add_row(row!["Due", format_due_date(task.due_date)]);
        table.add_row(row!["Created", format_timestamp(task.created_at)]);
        table.printstd();

        Ok(())
    }

    /// Renders the summary dashboard counts.
    pub fn summary(summary: &TaskSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "PENDING", "OVERDUE"]);
        table.add_row(row![summary.total, summary.completed, summary.pending, summary.overdue]);
        table.printstd();

        let mut by_priority = Table::new();
        by_priority.add_row(row!["HIGH", "MEDIUM", "LOW"]);
        by_priority.add_row(row![summary.by_priority.high, summary.by_priority.medium, summary.by_priority.low]);
        by_priority.printstd();

        Ok(())
    }

    /// Renders the kanban board: pending, overdue and completed columns.
    pub fn board(pending: &[Task], overdue: &[Task], completed: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            format!("PENDING ({})", pending.len()),
            format!("OVERDUE ({})", overdue.len()),
            format!("COMPLETED ({})", completed.len())
        ]);
        table.add_row(row![Self::column(pending), Self::column(overdue), Self::column(completed)]);
        table.printstd();

        Ok(())
    }

    /// Renders the statistics dashboard.
    pub fn stats(summary: &TaskSummary, stats: &TaskStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["METRIC", "VALUE", "DETAIL"]);
        table.add_row(row![
            "Completion rate",
            format!("{}%", stats.completion_rate),
            format!("{}/{} tasks", summary.completed, summary.total)
        ]);
        table.add_row(row![
            "High priority rate",
            format!("{}%", stats.high_completion_rate),
            format!("{} tasks", summary.by_priority.high)
        ]);
        table.add_row(row![
            "Medium priority rate",
            format!("{}%", stats.medium_completion_rate),
            format!("{} tasks", summary.by_priority.medium)
        ]);
        table.add_row(row![
            "Low priority rate",
            format!("{}%", stats.low_completion_rate),
            format!("{} tasks", summary.by_priority.low)
        ]);
        table.add_row(row![
            "Overdue",
            summary.overdue,
            format!("{}% of total", stats.overdue_pct)
        ]);
        table.printstd();

        Ok(())
    }

    /// Renders tags with usage counts.
    pub fn tags(tags: &[TagUsage]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TAG", "TASKS"]);
        for tag in tags {
            table.add_row(row![tag.name, tag.tasks]);
        }
        table.printstd();

        Ok(())
    }

    /// One board column: a short line per task with id, title and due date.
    fn column(tasks: &[Task]) -> String {
        tasks
            .iter()
            .map(|task| {
                let due = task.due_date.map(|d| format!(" ({})", d.format("%b %-d"))).unwrap_or_default();
                format!("[{}] {}{}", task.id.unwrap_or(0), task.title, due)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
