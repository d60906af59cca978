#[cfg(test)]
mod tests {
    use kaglo::api::remote::{Remote, RemoteConfig, RemoteTask, TaskInput};
    use kaglo::api::Session;
    use kaglo::libs::data_storage::DataStorage;
    use kaglo::libs::task::{Priority, Task};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ApiTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ApiTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ApiTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn remote() -> Remote {
        Remote::new(&RemoteConfig {
            email: "user@example.com".to_string(),
            api_url: "https://tasks.example.com".to_string(),
        })
    }

    #[test]
    fn test_remote_task_deserializes_camel_case() {
        let json = r#"{
            "id": "abc123",
            "title": "Pay rent",
            "completed": false,
            "priority": "high",
            "tags": ["home"],
            "dueDate": "2026-02-01T00:00:00.000Z",
            "createdAt": "2026-01-15T14:30:00.000Z"
        }"#;

        let remote_task: RemoteTask = serde_json::from_str(json).unwrap();
        let task = remote_task.into_task();

        assert_eq!(task.remote_id, Some("abc123".to_string()));
        assert_eq!(task.title, "Pay rent");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.tags, vec!["home"]);
        assert_eq!(task.due_date.unwrap().to_string(), "2026-02-01");
        assert_eq!(task.created_at.unwrap().to_string(), "2026-01-15 14:30:00");
    }

    #[test]
    fn test_remote_task_tolerates_odd_records() {
        // Minimal record: only id and title
        let json = r#"{"id": "x", "title": "bare"}"#;
        let task = serde_json::from_str::<RemoteTask>(json).unwrap().into_task();
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.tags.is_empty());
        assert_eq!(task.due_date, None);

        // Unknown priority and malformed date must not fail the sync
        let json = r#"{"id": "y", "title": "odd", "priority": "urgent!!", "dueDate": "soon"}"#;
        let task = serde_json::from_str::<RemoteTask>(json).unwrap().into_task();
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_task_input_omits_unset_fields() {
        let input = TaskInput {
            title: Some("New task".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"title": "New task"}));
    }

    #[test]
    fn test_task_input_from_task_uses_wire_names() {
        let task = Task::new("Pay rent")
            .with_priority(Priority::High)
            .with_due_date(Some(chrono::NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));

        let json = serde_json::to_value(TaskInput::from_task(&task)).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["dueDate"], "2026-02-01");
    }

    #[test_context(ApiTestContext)]
    #[test]
    fn test_session_cache_lifecycle(_ctx: &mut ApiTestContext) {
        let remote = remote();
        assert!(!remote.has_session());

        // Simulate a cached token from a previous login
        let path = DataStorage::new().get_path(remote.session_file()).unwrap();
        std::fs::write(&path, "jwt-token").unwrap();
        assert!(remote.has_session());

        remote.delete_session().unwrap();
        assert!(!remote.has_session());

        // Deleting an absent session is a no-op
        remote.delete_session().unwrap();
    }

    #[test_context(ApiTestContext)]
    #[test]
    fn test_get_token_reads_cached_session(_ctx: &mut ApiTestContext) {
        let mut remote = remote();
        let path = DataStorage::new().get_path(remote.session_file()).unwrap();
        std::fs::write(&path, "cached-token").unwrap();

        let token = tokio::runtime::Runtime::new().unwrap().block_on(remote.get_token()).unwrap();
        assert_eq!(token, "cached-token");
    }
}
