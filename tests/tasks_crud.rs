#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use kaglo::db::tasks::Tasks;
    use kaglo::libs::task::{Priority, Task, TaskQuery};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests share process env, so HOME redirection is serialized.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TaskTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_defaults(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert(&Task::new("Write tests")).unwrap();
        assert!(id > 0);

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.title, "Write tests");
        assert_eq!(task.description, None);
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.tags.is_empty());
        assert_eq!(task.due_date, None);
        assert!(task.created_at.is_some());
        assert_eq!(task.remote_id, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert(&Task::new("Original title")).unwrap();
        let mut task = tasks.get_by_id(id).unwrap().unwrap();

        task.title = "Updated title".to_string();
        task.description = Some("Now with details".to_string());
        task.priority = Priority::High;
        task.due_date = Some(Local::now().date_naive() + Duration::days(7));
        tasks.update(&task).unwrap();

        let updated = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.title, "Updated title");
        assert_eq!(updated.description, Some("Now with details".to_string()));
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.due_date, task.due_date);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task_fails(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut task = Task::new("Ghost");
        task.id = Some(9999);
        assert!(tasks.update(&task).is_err());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_complete_and_reopen(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert(&Task::new("Toggle me")).unwrap();

        tasks.set_completed(id, true).unwrap();
        assert!(tasks.get_by_id(id).unwrap().unwrap().completed);

        // Completion is reversible
        tasks.set_completed(id, false).unwrap();
        assert!(!tasks.get_by_id(id).unwrap().unwrap().completed);

        assert!(tasks.set_completed(9999, true).is_err());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let id = tasks.insert(&Task::new("Short lived")).unwrap();
        let deleted = tasks.delete(id).unwrap();
        assert_eq!(deleted, 1);
        assert!(tasks.get_by_id(id).unwrap().is_none());

        // Deleting again is a no-op, not an error
        assert_eq!(tasks.delete(id).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete_many(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let a = tasks.insert(&Task::new("a")).unwrap();
        let b = tasks.insert(&Task::new("b")).unwrap();
        let c = tasks.insert(&Task::new("c")).unwrap();

        let deleted = tasks.delete_many(&[a, c]).unwrap();
        assert_eq!(deleted, 2);

        let remaining = tasks.fetch(TaskQuery::All).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, Some(b));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_by_ids_and_completed(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let a = tasks.insert(&Task::new("a")).unwrap();
        let b = tasks.insert(&Task::new("b")).unwrap();
        tasks.insert(&Task::new("c")).unwrap();
        tasks.set_completed(b, true).unwrap();

        let by_ids = tasks.fetch(TaskQuery::ByIds(vec![a, b])).unwrap();
        assert_eq!(by_ids.len(), 2);
        assert_eq!(by_ids[0].id, Some(a));
        assert_eq!(by_ids[1].id, Some(b));

        let completed = tasks.fetch(TaskQuery::Completed(true)).unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title, "b");

        let pending = tasks.fetch(TaskQuery::Completed(false)).unwrap();
        assert_eq!(pending.len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_explicit_created_at_round_trips(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // A synced record keeps its server-side creation time
        let stamp = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let mut task = Task::new("Synced earlier");
        task.remote_id = Some("srv-7".to_string());
        task.created_at = Some(stamp);
        assert!(tasks.upsert_remote(&task).unwrap());

        let stored = tasks.fetch(TaskQuery::ByRemoteId("srv-7".to_string())).unwrap();
        assert_eq!(stored[0].created_at, Some(stamp));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tags_survive_round_trip(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // Order and duplicates are part of the task, not normalized away
        let tags = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let id = tasks.insert(&Task::new("tagged").with_tags(tags.clone())).unwrap();

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.tags, tags);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_upsert_remote_creates_then_updates(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let mut incoming = Task::new("From server");
        incoming.remote_id = Some("srv-42".to_string());

        // First pass inserts
        assert!(tasks.upsert_remote(&incoming).unwrap());
        let all = tasks.fetch(TaskQuery::All).unwrap();
        assert_eq!(all.len(), 1);

        // Second pass with the same remote id updates in place
        incoming.title = "From server (renamed)".to_string();
        incoming.completed = true;
        assert!(!tasks.upsert_remote(&incoming).unwrap());

        let all = tasks.fetch(TaskQuery::All).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "From server (renamed)");
        assert!(all[0].completed);
        assert_eq!(all[0].remote_id, Some("srv-42".to_string()));
    }
}
