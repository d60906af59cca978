#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use kaglo::db::tasks::Tasks;
    use kaglo::libs::export::{ExportData, ExportFormat, Exporter};
    use kaglo::libs::task::{Priority, Task};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ExportTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { _guard: guard, temp_dir }
        }
    }

    fn seed() {
        let mut tasks = Tasks::new().unwrap();
        tasks
            .insert(
                &Task::new("Pay rent")
                    .with_priority(Priority::High)
                    .with_tags(vec!["home".to_string()])
                    .with_due_date(Some(Local::now().date_naive() + Duration::days(3))),
            )
            .unwrap();
        let mut done = Task::new("File taxes");
        done.completed = true;
        tasks.insert(&done).unwrap();
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_to_csv(ctx: &mut ExportTestContext) {
        seed();
        let path = ctx.temp_dir.path().join("tasks.csv");

        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(ExportData::Tasks).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "id,title,description,completed,priority,tags,due_date,created_at");
        assert!(contents.contains("Pay rent"));
        assert!(contents.contains("File taxes"));
        // Header plus one row per task
        assert_eq!(contents.lines().count(), 3);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_summary_to_csv(ctx: &mut ExportTestContext) {
        seed();
        let path = ctx.temp_dir.path().join("summary.csv");

        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(ExportData::Summary).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "total,completed,pending,overdue,high,medium,low");
        assert_eq!(lines.next().unwrap(), "2,1,1,0,1,1,0");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_to_json(ctx: &mut ExportTestContext) {
        seed();
        let path = ctx.temp_dir.path().join("all.json");

        Exporter::new(ExportFormat::Json, Some(path.clone())).export(ExportData::All).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["tasks"].as_array().unwrap().len(), 2);
        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["summary"]["byPriority"]["high"], 1);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_to_excel(ctx: &mut ExportTestContext) {
        seed();
        let path = ctx.temp_dir.path().join("tasks.xlsx");

        Exporter::new(ExportFormat::Excel, Some(path.clone())).export(ExportData::All).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_with_no_tasks_writes_nothing(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("empty.csv");

        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(ExportData::Tasks).unwrap();

        assert!(!path.exists());
    }
}
