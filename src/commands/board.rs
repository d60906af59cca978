use crate::db::tasks::Tasks;
use crate::libs::filter::is_overdue;
use crate::libs::messages::Message;
use crate::libs::task::TaskQuery;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Kanban board: pending, overdue and completed columns.
///
/// Overdue tasks appear only in their own column, so the three columns
/// partition the list.
pub fn cmd() -> Result<()> {
    let tasks = Tasks::new()?.fetch(TaskQuery::All)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let pending: Vec<_> = tasks
        .iter()
        .filter(|t| !t.completed && !is_overdue(t.due_date, t.completed))
        .cloned()
        .collect();
    let overdue: Vec<_> = tasks.iter().filter(|t| is_overdue(t.due_date, t.completed)).cloned().collect();
    let completed: Vec<_> = tasks.iter().filter(|t| t.completed).cloned().collect();

    msg_print!(Message::BoardHeader, true);
    View::board(&pending, &overdue, &completed)?;
    Ok(())
}
