#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use scheduler::db::{memory::MemoryTasks, store::TaskStore};
    use scheduler::libs::date::parse_date;
    use scheduler::libs::error::{TaskError, TaskResult};
    use scheduler::libs::lifecycle::{
        add_task, complete_task, due_tasks, normalize_date, update_task, Completion, DueTasks, Normalization,
    };
    use scheduler::libs::task::Task;
    use std::sync::Arc;
    use std::thread;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn today() -> NaiveDate {
        d("20240310")
    }

    fn add(store: &MemoryTasks, date: &str, repeat: &str) -> TaskResult<Task> {
        let id = add_task(store, Task::new(date, "Water plants", "balcony", repeat), today())?;
        store.find_by_id(&id)
    }

    #[test]
    fn test_empty_date_becomes_today() {
        let store = MemoryTasks::new();
        assert_eq!(add(&store, "", "").unwrap().date, "20240310");
        assert_eq!(add(&store, "", "d 7").unwrap().date, "20240310");
    }

    #[test]
    fn test_future_and_current_dates_are_kept() {
        let store = MemoryTasks::new();
        assert_eq!(add(&store, "20240310", "").unwrap().date, "20240310");
        assert_eq!(add(&store, "20240401", "").unwrap().date, "20240401");
        assert_eq!(add(&store, "20240401", "d 7").unwrap().date, "20240401");
    }

    #[test]
    fn test_past_one_off_moves_to_today() {
        let store = MemoryTasks::new();
        assert_eq!(add(&store, "20240101", "").unwrap().date, "20240310");
    }

    #[test]
    fn test_past_recurring_starts_today_on_create() {
        let store = MemoryTasks::new();
        // next occurrence 20240315 is clamped back to today
        assert_eq!(add(&store, "20240301", "d 7").unwrap().date, "20240310");
        // next occurrence lands exactly on today
        assert_eq!(add(&store, "20240307", "d 3").unwrap().date, "20240310");
        assert_eq!(add(&store, "20231225", "y").unwrap().date, "20240310");
    }

    #[test]
    fn test_past_recurring_keeps_next_occurrence_on_update() {
        let store = MemoryTasks::new();
        let mut task = add(&store, "20240401", "d 7").unwrap();
        task.date = "20240301".to_string();

        let stored = update_task(&store, task, today()).unwrap();
        assert_eq!(stored.date, "20240315");
        assert_eq!(store.find_by_id(&stored.id).unwrap().date, "20240315");
    }

    #[test]
    fn test_normalize_date_modes() {
        assert_eq!(normalize_date("20240301", "d 7", today(), Normalization::Create).unwrap(), today());
        assert_eq!(normalize_date("20240301", "d 7", today(), Normalization::Update).unwrap(), d("20240315"));
        assert_eq!(normalize_date("20240301", "", today(), Normalization::Update).unwrap(), today());
        assert_eq!(normalize_date("", "y", today(), Normalization::Update).unwrap(), today());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let store = MemoryTasks::new();
        assert!(matches!(add(&store, "2024-03-10", ""), Err(TaskError::InvalidFormat(_))));
        assert!(matches!(add(&store, "20240230", "d 1"), Err(TaskError::InvalidFormat(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let store = MemoryTasks::new();
        let result = add_task(&store, Task::new("20240401", "   ", "", ""), today());
        assert!(matches!(result, Err(TaskError::EmptyTitle)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_rule_is_rejected_even_for_future_dates() {
        let store = MemoryTasks::new();
        assert!(matches!(add(&store, "20240401", "w 1"), Err(TaskError::UnsupportedRule(_))));
        assert!(matches!(add(&store, "20240401", "d 500"), Err(TaskError::InvalidDayCount(_))));
        assert!(matches!(add(&store, "", "y 3"), Err(TaskError::InvalidYearRule(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_repeat_rule_is_trimmed() {
        let store = MemoryTasks::new();
        assert_eq!(add(&store, "20240401", "  d 7 ").unwrap().repeat, "d 7");

        let one_off = add(&store, "20240401", "   ").unwrap();
        assert_eq!(one_off.repeat, "");
        assert!(!one_off.is_recurring());
    }

    #[test]
    fn test_update_replaces_every_field() {
        let store = MemoryTasks::new();
        let task = add(&store, "20240401", "d 7").unwrap();

        let changed = Task {
            id: task.id.clone(),
            ..Task::new("20240402", "Repot cactus", "", "")
        };
        update_task(&store, changed, today()).unwrap();

        let stored = store.find_by_id(&task.id).unwrap();
        assert_eq!(stored.title, "Repot cactus");
        assert_eq!(stored.comment, "");
        assert_eq!(stored.repeat, "");
        assert_eq!(stored.date, "20240402");
    }

    #[test]
    fn test_update_requires_known_id() {
        let store = MemoryTasks::new();
        let missing = Task::new("20240401", "Ghost", "", "");
        assert!(matches!(update_task(&store, missing.clone(), today()), Err(TaskError::MissingId)));

        let unknown = Task { id: "42".to_string(), ..missing };
        assert!(matches!(update_task(&store, unknown, today()), Err(TaskError::NotFound(_))));
    }

    #[test]
    fn test_done_removes_one_off_task() {
        let store = MemoryTasks::new();
        let task = add(&store, "20240310", "").unwrap();

        assert_eq!(complete_task(&store, &task.id, today()).unwrap(), Completion::Removed);
        assert!(matches!(store.find_by_id(&task.id), Err(TaskError::NotFound(_))));
        assert!(matches!(complete_task(&store, &task.id, today()), Err(TaskError::NotFound(_))));
    }

    #[test]
    fn test_done_advances_recurring_task() {
        let store = MemoryTasks::new();
        let id = store.insert(&Task::new("20240301", "Water plants", "balcony", "d 7")).unwrap();

        let completion = complete_task(&store, &id, today()).unwrap();
        let expected = Task {
            id: id.clone(),
            ..Task::new("20240315", "Water plants", "balcony", "d 7")
        };
        assert_eq!(completion, Completion::Rescheduled(expected.clone()));
        assert_eq!(store.find_by_id(&id).unwrap(), expected);
    }

    #[test]
    fn test_done_advances_yearly_task() {
        let store = MemoryTasks::new();
        let id = store.insert(&Task::new("20231225", "Send cards", "", "y")).unwrap();

        complete_task(&store, &id, d("20240101")).unwrap();
        assert_eq!(store.find_by_id(&id).unwrap().date, "20241225");
    }

    #[test]
    fn test_done_on_current_recurring_task_moves_one_step() {
        let store = MemoryTasks::new();
        let id = add_task(&store, Task::new("", "Stretch", "", "d 1"), today()).unwrap();

        complete_task(&store, &id, today()).unwrap();
        assert_eq!(store.find_by_id(&id).unwrap().date, "20240311");
    }

    #[test]
    fn test_failed_done_leaves_task_unchanged() {
        let store = MemoryTasks::new();
        let broken = Task::new("20240301", "Legacy", "", "w 1");
        let id = store.insert(&broken).unwrap();

        assert!(matches!(complete_task(&store, &id, today()), Err(TaskError::UnsupportedRule(_))));
        assert_eq!(store.find_by_id(&id).unwrap(), Task { id: id.clone(), ..broken });
    }

    #[test]
    fn test_done_requires_id() {
        let store = MemoryTasks::new();
        assert!(matches!(complete_task(&store, "", today()), Err(TaskError::MissingId)));
        assert!(matches!(complete_task(&store, "7", today()), Err(TaskError::NotFound(_))));
        assert!(matches!(complete_task(&store, "seven", today()), Err(TaskError::NotFound(_))));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let store = MemoryTasks::new();
        let first = store.insert(&Task::new("20240310", "a", "", "")).unwrap();
        let second = store.insert(&Task::new("20240310", "b", "", "")).unwrap();
        store.remove(&second).unwrap();
        let third = store.insert(&Task::new("20240310", "c", "", "")).unwrap();

        assert_ne!(third, first);
        assert_ne!(third, second);
    }

    #[test]
    fn test_memory_list_due_orders_and_limits() {
        let store = MemoryTasks::new();
        store.insert(&Task::new("20240320", "later", "", "")).unwrap();
        store.insert(&Task::new("20240301", "past", "", "")).unwrap();
        store.insert(&Task::new("20240310", "today first", "", "")).unwrap();
        store.insert(&Task::new("20240310", "today second", "", "")).unwrap();

        let titles: Vec<String> = store
            .list_due(today(), 10)
            .unwrap()
            .into_iter()
            .map(|task| task.title)
            .collect();
        assert_eq!(titles, vec!["today first", "today second", "later"]);

        assert_eq!(store.list_due(today(), 2).unwrap().len(), 2);
        assert!(store.list_due(d("20250101"), 10).unwrap().is_empty());
    }

    #[test]
    fn test_due_listing_reports_truncation_only_when_rows_were_cut() {
        let store = MemoryTasks::new();
        for title in ["a", "b", "c"] {
            store.insert(&Task::new("20240310", title, "", "")).unwrap();
        }

        let full = due_tasks(&store, today(), 3).unwrap();
        assert_eq!(full.tasks.len(), 3);
        assert!(!full.truncated);

        let DueTasks { tasks, truncated } = due_tasks(&store, today(), 2).unwrap();
        assert!(truncated);
        let titles: Vec<&str> = tasks.iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);

        let empty = due_tasks(&MemoryTasks::new(), today(), 10).unwrap();
        assert!(empty.tasks.is_empty());
        assert!(!empty.truncated);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryTasks::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| add_task(store.as_ref(), Task::new("", &format!("task {}-{}", n, i), "", ""), today()).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<String> = handles.into_iter().flat_map(|handle| handle.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(store.len(), 200);
    }
}
