//! Pure derivation of what the list view shows.

use serde::{Deserialize, Serialize};

use super::state::{FilterMode, ViewState};
use crate::task::Task;

/// Task counts for the summary bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

pub fn matches_filter(task: &Task, mode: FilterMode) -> bool {
    match mode {
        FilterMode::All => true,
        FilterMode::Completed => task.completed,
        FilterMode::Incomplete => !task.completed,
    }
}

/// Case-insensitive substring match on title, or description when present.
/// An empty query matches every task.
pub fn matches_search(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

/// Tasks passing both the filter and the search, in their original order.
///
/// Recomputed on every call.
pub fn visible_tasks(tasks: &[Task], view: &ViewState) -> Vec<Task> {
    let mode = view.filter_mode();
    let query = view.search_query();
    tasks
        .iter()
        .filter(|t| matches_filter(t, mode) && matches_search(t, query))
        .cloned()
        .collect()
}

pub fn summarize(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskStats {
        total,
        completed,
        remaining: total - completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;
    use proptest::prelude::*;

    fn task(id: u64, title: &str, description: Option<&str>, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            title: title.to_string(),
            description: description.map(str::to_string),
            completed,
        }
    }

    fn view(mode: FilterMode, query: &str) -> ViewState {
        let mut view = ViewState::new();
        view.set_filter_mode(mode);
        view.set_search_query(query);
        view
    }

    #[test]
    fn test_incomplete_filter() {
        let tasks = vec![task(1, "a", None, false), task(2, "b", None, true)];
        let visible = visible_tasks(&tasks, &view(FilterMode::Incomplete, ""));
        assert_eq!(visible, vec![tasks[0].clone()]);
    }

    #[test]
    fn test_completed_filter() {
        let tasks = vec![task(1, "a", None, false), task(2, "b", None, true)];
        let visible = visible_tasks(&tasks, &view(FilterMode::Completed, ""));
        assert_eq!(visible, vec![tasks[1].clone()]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let tasks = vec![
            task(1, "Buy MILK", None, false),
            task(2, "Walk dog", Some("then buy milk"), false),
            task(3, "Read", Some("novel"), false),
        ];
        let ids: Vec<u64> = visible_tasks(&tasks, &view(FilterMode::All, "milk"))
            .iter()
            .map(|t| t.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let tasks = vec![
            task(1, "Buy milk", None, true),
            task(2, "Buy bread", None, false),
            task(3, "Sell milk", None, false),
        ];
        let visible = visible_tasks(&tasks, &view(FilterMode::Incomplete, "milk"));
        assert_eq!(visible, vec![tasks[2].clone()]);
    }

    #[test]
    fn test_search_without_description() {
        let t = task(1, "Title", None, false);
        assert!(matches_search(&t, ""));
        assert!(matches_search(&t, "tit"));
        assert!(!matches_search(&t, "none"));
    }

    #[test]
    fn test_summarize() {
        let tasks = vec![
            task(1, "a", None, true),
            task(2, "b", None, false),
            task(3, "c", None, true),
        ];
        assert_eq!(
            summarize(&tasks),
            TaskStats {
                total: 3,
                completed: 2,
                remaining: 1
            }
        );
        assert_eq!(summarize(&[]), TaskStats::default());
    }

    fn arb_task() -> impl Strategy<Value = Task> {
        (
            1u64..1000,
            "[a-zA-Z ]{1,12}",
            prop::option::of("[a-zA-Z ]{1,12}"),
            any::<bool>(),
        )
            .prop_map(|(id, title, description, completed)| Task {
                id: TaskId(id),
                title,
                description,
                completed,
            })
    }

    proptest! {
        #[test]
        fn prop_all_with_empty_query_is_identity(tasks in prop::collection::vec(arb_task(), 0..20)) {
            let visible = visible_tasks(&tasks, &view(FilterMode::All, ""));
            prop_assert_eq!(visible, tasks);
        }

        #[test]
        fn prop_completed_filter_is_explained(
            tasks in prop::collection::vec(arb_task(), 0..20),
            query in "[a-z]{0,2}",
        ) {
            let visible = visible_tasks(&tasks, &view(FilterMode::Completed, &query));
            prop_assert!(visible.iter().all(|t| t.completed));

            // Visible tasks form a subsequence of the input
            let mut rest = tasks.iter();
            for shown in &visible {
                prop_assert!(rest.any(|t| t == shown));
            }

            // Every completed task left out fails the search
            let shown = visible.len();
            let expected = tasks
                .iter()
                .filter(|t| t.completed && matches_search(t, &query))
                .count();
            prop_assert_eq!(shown, expected);
        }

        #[test]
        fn prop_stats_add_up(tasks in prop::collection::vec(arb_task(), 0..20)) {
            let stats = summarize(&tasks);
            prop_assert_eq!(stats.total, tasks.len());
            prop_assert_eq!(stats.completed + stats.remaining, stats.total);
        }
    }
}
