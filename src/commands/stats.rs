use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::summary::{calculate_stats, calculate_summary};
use crate::libs::task::TaskQuery;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Statistics dashboard: completion rates overall and per priority, plus
/// the overdue share.
pub fn cmd() -> Result<()> {
    let tasks = Tasks::new()?.fetch(TaskQuery::All)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let summary = calculate_summary(&tasks);
    let stats = calculate_stats(&tasks);

    msg_print!(Message::StatsHeader, true);
    View::stats(&summary, &stats)?;
    Ok(())
}
