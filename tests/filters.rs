#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate};
    use kaglo::libs::filter::{
        filter_and_sort_tasks, filter_by_priority, filter_by_tags, filter_tasks, is_overdue, search_tasks, sort_tasks, FilterType,
        PriorityFilter, SortType,
    };
    use kaglo::libs::task::{Priority, Task};

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn yesterday() -> NaiveDate {
        today() - Duration::days(1)
    }

    fn tomorrow() -> NaiveDate {
        today() + Duration::days(1)
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_overdue_predicate() {
        assert!(is_overdue(Some(yesterday()), false));
        assert!(!is_overdue(Some(today()), false));
        assert!(!is_overdue(Some(tomorrow()), false));
        // Completed tasks are never overdue, no matter the due date
        assert!(!is_overdue(Some(yesterday()), true));
        // No due date, never overdue
        assert!(!is_overdue(None, false));
    }

    #[test]
    fn test_search_matches_title_description_and_tags() {
        let tasks = vec![
            Task::new("Buy groceries"),
            Task::new("Call plumber").with_description(Some("Kitchen sink leaks".to_string())),
            Task::new("Review PR").with_tags(vec!["work".to_string(), "urgent".to_string()]),
        ];

        assert_eq!(titles(&search_tasks(&tasks, "GROCERIES")), vec!["Buy groceries"]);
        assert_eq!(titles(&search_tasks(&tasks, "sink")), vec!["Call plumber"]);
        assert_eq!(titles(&search_tasks(&tasks, "urgent")), vec!["Review PR"]);
        assert!(search_tasks(&tasks, "nothing-matches").is_empty());
    }

    #[test]
    fn test_search_whitespace_query_is_identity() {
        let tasks = vec![Task::new("A"), Task::new("B"), Task::new("C")];

        let result = search_tasks(&tasks, "  ");
        assert_eq!(titles(&result), vec!["A", "B", "C"]);

        let result = search_tasks(&tasks, "");
        assert_eq!(titles(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_search_is_order_preserving_subsequence() {
        let tasks = vec![
            Task::new("alpha match"),
            Task::new("beta"),
            Task::new("gamma match"),
            Task::new("delta match"),
        ];

        let result = search_tasks(&tasks, "match");
        assert_eq!(titles(&result), vec!["alpha match", "gamma match", "delta match"]);
    }

    #[test]
    fn test_status_filters() {
        let mut done = Task::new("done");
        done.completed = true;
        let tasks = vec![
            Task::new("late").with_due_date(Some(yesterday())),
            Task::new("open"),
            done,
        ];

        assert_eq!(titles(&filter_tasks(&tasks, FilterType::All)), vec!["late", "open", "done"]);
        assert_eq!(titles(&filter_tasks(&tasks, FilterType::Pending)), vec!["late", "open"]);
        assert_eq!(titles(&filter_tasks(&tasks, FilterType::Completed)), vec!["done"]);
        assert_eq!(titles(&filter_tasks(&tasks, FilterType::Overdue)), vec!["late"]);
    }

    #[test]
    fn test_priority_filter() {
        let tasks = vec![
            Task::new("high").with_priority(Priority::High),
            Task::new("medium"),
            Task::new("low").with_priority(Priority::Low),
        ];

        assert_eq!(titles(&filter_by_priority(&tasks, PriorityFilter::All)), vec!["high", "medium", "low"]);
        assert_eq!(titles(&filter_by_priority(&tasks, PriorityFilter::High)), vec!["high"]);
        assert_eq!(titles(&filter_by_priority(&tasks, PriorityFilter::Medium)), vec!["medium"]);
        assert_eq!(titles(&filter_by_priority(&tasks, PriorityFilter::Low)), vec!["low"]);
    }

    #[test]
    fn test_tag_filter_intersects_selection() {
        let tasks = vec![
            Task::new("home").with_tags(vec!["home".to_string()]),
            Task::new("both").with_tags(vec!["home".to_string(), "work".to_string()]),
            Task::new("untagged"),
        ];

        // Empty selection disables the stage
        assert_eq!(titles(&filter_by_tags(&tasks, &[])), vec!["home", "both", "untagged"]);

        assert_eq!(titles(&filter_by_tags(&tasks, &["home".to_string()])), vec!["home", "both"]);
        assert_eq!(titles(&filter_by_tags(&tasks, &["work".to_string()])), vec!["both"]);
        assert!(filter_by_tags(&tasks, &["missing".to_string()]).is_empty());
    }

    #[test]
    fn test_sort_due_date_missing_last() {
        let tasks = vec![
            Task::new("none"),
            Task::new("later").with_due_date(Some(tomorrow())),
            Task::new("sooner").with_due_date(Some(yesterday())),
        ];

        let sorted = sort_tasks(&tasks, SortType::DueDate);
        assert_eq!(titles(&sorted), vec!["sooner", "later", "none"]);
    }

    #[test]
    fn test_sort_created_recent_newest_first() {
        let mut old = Task::new("old");
        old.created_at = Some(today().and_hms_opt(8, 0, 0).unwrap() - Duration::days(3));
        let mut new = Task::new("new");
        new.created_at = Some(today().and_hms_opt(8, 0, 0).unwrap());
        let untimestamped = Task::new("untimestamped");

        let sorted = sort_tasks(&[untimestamped, old, new], SortType::CreatedRecent);
        assert_eq!(titles(&sorted), vec!["new", "old", "untimestamped"]);
    }

    #[test]
    fn test_sort_title_is_case_insensitive() {
        let tasks = vec![Task::new("Banana"), Task::new("apple")];

        let sorted = sort_tasks(&tasks, SortType::Title);
        assert_eq!(titles(&sorted), vec!["apple", "Banana"]);
    }

    #[test]
    fn test_sort_completed_first_preserves_tie_order() {
        let mut done_1 = Task::new("done 1");
        done_1.completed = true;
        let mut done_2 = Task::new("done 2");
        done_2.completed = true;
        let tasks = vec![Task::new("open 1"), done_1, Task::new("open 2"), done_2];

        let sorted = sort_tasks(&tasks, SortType::CompletedFirst);
        assert_eq!(titles(&sorted), vec!["done 1", "done 2", "open 1", "open 2"]);
    }

    #[test]
    fn test_sort_priority_high_first() {
        let tasks = vec![
            Task::new("low").with_priority(Priority::Low),
            Task::new("high").with_priority(Priority::High),
            Task::new("medium"),
        ];

        let sorted = sort_tasks(&tasks, SortType::Priority);
        assert_eq!(titles(&sorted), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let tasks = vec![Task::new("b"), Task::new("a")];

        let _sorted = sort_tasks(&tasks, SortType::Title);
        assert_eq!(titles(&tasks), vec!["b", "a"]);
    }

    #[test]
    fn test_pipeline_defaults_are_identity() {
        let tasks = vec![Task::new("first"), Task::new("second"), Task::new("third")];

        // No timestamps and no filters: the pipeline returns the input order
        let result = filter_and_sort_tasks(&tasks, FilterType::All, SortType::CreatedRecent, "", PriorityFilter::All, &[]);
        assert_eq!(titles(&result), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_pipeline_overdue_scenario() {
        let mut c = Task::new("C");
        c.completed = true;
        let tasks = vec![
            Task::new("A").with_due_date(Some(yesterday())),
            Task::new("B").with_due_date(Some(tomorrow())),
            c,
        ];

        let result = filter_and_sort_tasks(&tasks, FilterType::Overdue, SortType::DueDate, "", PriorityFilter::All, &[]);
        assert_eq!(titles(&result), vec!["A"]);
    }

    #[test]
    fn test_pipeline_combines_all_stages() {
        let tasks = vec![
            Task::new("report draft")
                .with_priority(Priority::High)
                .with_tags(vec!["work".to_string()])
                .with_due_date(Some(tomorrow())),
            Task::new("report review")
                .with_priority(Priority::High)
                .with_tags(vec!["work".to_string()])
                .with_due_date(Some(yesterday())),
            Task::new("report archive")
                .with_priority(Priority::Low)
                .with_tags(vec!["work".to_string()]),
            Task::new("groceries").with_priority(Priority::High),
        ];

        let result = filter_and_sort_tasks(
            &tasks,
            FilterType::Pending,
            SortType::DueDate,
            "report",
            PriorityFilter::High,
            &["work".to_string()],
        );
        assert_eq!(titles(&result), vec!["report review", "report draft"]);
    }

    #[test]
    fn test_unknown_selection_values_parse_to_identity() {
        assert_eq!("bogus".parse::<FilterType>().unwrap(), FilterType::All);
        assert_eq!("overdue".parse::<FilterType>().unwrap(), FilterType::Overdue);
        assert_eq!("bogus".parse::<SortType>().unwrap(), SortType::CreatedRecent);
        assert_eq!("due-date".parse::<SortType>().unwrap(), SortType::DueDate);
        assert_eq!("bogus".parse::<PriorityFilter>().unwrap(), PriorityFilter::All);
        assert_eq!("high".parse::<PriorityFilter>().unwrap(), PriorityFilter::High);
    }
}
