use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::summary::calculate_summary;
use crate::libs::task::TaskQuery;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

/// Summary dashboard: total, completed, pending and overdue counts plus the
/// priority breakdown, always recomputed from the full task list.
pub fn cmd() -> Result<()> {
    let tasks = Tasks::new()?.fetch(TaskQuery::All)?;
    let summary = calculate_summary(&tasks);

    msg_print!(Message::SummaryHeader, true);
    View::summary(&summary)?;
    Ok(())
}
