use crate::api::remote::Remote;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;

/// Pulls the task list from the sync server into the local store.
///
/// Tasks are matched by their server-assigned id: known tasks are updated
/// in place, unknown ones inserted. Local-only tasks are left untouched.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let remote_config = match config.remote {
        Some(remote_config) => remote_config,
        None => {
            msg_error!(Message::RemoteNotConfigured);
            return Ok(());
        }
    };

    msg_print!(Message::SyncStarted(remote_config.api_url.clone()));

    let mut remote = Remote::new(&remote_config);
    let remote_tasks = match remote.fetch_tasks().await {
        Ok(tasks) => tasks,
        Err(e) => {
            msg_error!(Message::SyncFailed(e.to_string()));
            return Ok(());
        }
    };

    let mut tasks_db = Tasks::new()?;
    let mut created = 0;
    let mut updated = 0;

    for remote_task in remote_tasks {
        if tasks_db.upsert_remote(&remote_task.into_task())? {
            created += 1;
        } else {
            updated += 1;
        }
    }

    msg_success!(Message::SyncCompleted(created, updated));
    Ok(())
}
