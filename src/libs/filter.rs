//! Task filter, search and sort pipeline.
//!
//! Pure, synchronous transformations over an in-memory task list. Every stage
//! returns a new vector and preserves the relative order of its input; the
//! composed pipeline runs search → status filter → priority filter → tag
//! filter → sort, so sorting only touches the rows that survived filtering.
//!
//! Textual selection values coming from outside (config files, remote
//! payloads) parse leniently: an unrecognized filter or sort name falls back
//! to the identity/default value instead of erroring, keeping listings usable
//! with stale selection state.

use crate::libs::task::{Priority, Task};
use chrono::{Local, NaiveDate};
use std::cmp::Ordering;
use std::str::FromStr;

/// Status-based task filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FilterType {
    #[default]
    All,
    Pending,
    Completed,
    Overdue,
}

impl FromStr for FilterType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "pending" => FilterType::Pending,
            "completed" => FilterType::Completed,
            "overdue" => FilterType::Overdue,
            _ => FilterType::All,
        })
    }
}

/// Sort key for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortType {
    /// Newest first by creation timestamp.
    #[default]
    CreatedRecent,
    /// Ascending by due date, undated tasks last.
    DueDate,
    /// Case-insensitive by title.
    Title,
    /// Completed tasks before pending ones.
    CompletedFirst,
    /// High priority first.
    Priority,
}

impl FromStr for SortType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "due-date" => SortType::DueDate,
            "title" => SortType::Title,
            "completed-first" => SortType::CompletedFirst,
            "priority" => SortType::Priority,
            _ => SortType::CreatedRecent,
        })
    }
}

/// Priority-based task filter. `All` disables the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "low" => PriorityFilter::Low,
            "medium" => PriorityFilter::Medium,
            "high" => PriorityFilter::High,
            _ => PriorityFilter::All,
        })
    }
}

/// Checks whether a task is past due.
///
/// Comparison happens at day granularity: a task is overdue when its due
/// day is strictly before today's day in local time. Completed tasks and
/// tasks without a due date are never overdue.
pub fn is_overdue(due_date: Option<NaiveDate>, completed: bool) -> bool {
    match due_date {
        Some(due) if !completed => due < Local::now().date_naive(),
        _ => false,
    }
}

/// Case-insensitive substring search over title, description and tags.
///
/// An empty or whitespace-only query returns the input unchanged.
pub fn search_tasks(tasks: &[Task], query: &str) -> Vec<Task> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&query)
                || task.description.as_ref().is_some_and(|d| d.to_lowercase().contains(&query))
                || task.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Filters tasks by completion status.
pub fn filter_tasks(tasks: &[Task], filter_type: FilterType) -> Vec<Task> {
    match filter_type {
        FilterType::All => tasks.to_vec(),
        FilterType::Pending => tasks.iter().filter(|t| !t.completed).cloned().collect(),
        FilterType::Completed => tasks.iter().filter(|t| t.completed).cloned().collect(),
        FilterType::Overdue => tasks.iter().filter(|t| is_overdue(t.due_date, t.completed)).cloned().collect(),
    }
}

/// Filters tasks by priority level.
pub fn filter_by_priority(tasks: &[Task], priority: PriorityFilter) -> Vec<Task> {
    tasks.iter().filter(|t| priority.matches(t.priority)).cloned().collect()
}

/// Retains tasks whose tags intersect the selected set.
///
/// An empty selection disables the stage.
pub fn filter_by_tags(tasks: &[Task], selected: &[String]) -> Vec<Task> {
    if selected.is_empty() {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .filter(|task| task.tags.iter().any(|tag| selected.iter().any(|s| s == tag)))
        .cloned()
        .collect()
}

/// Returns a new ordering of the given tasks.
///
/// All comparators are total orders with explicit missing-value policy:
/// undated and untimestamped tasks sort after the rest, and ties keep their
/// original relative order (stable sort).
pub fn sort_tasks(tasks: &[Task], sort_type: SortType) -> Vec<Task> {
    let mut sorted = tasks.to_vec();

    match sort_type {
        SortType::DueDate => sorted.sort_by(|a, b| match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }),
        SortType::CreatedRecent => sorted.sort_by(|a, b| match (a.created_at, b.created_at) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => b.cmp(&a),
        }),
        SortType::Title => sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        SortType::CompletedFirst => sorted.sort_by(|a, b| {
            if a.completed == b.completed {
                Ordering::Equal
            } else if a.completed {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }),
        SortType::Priority => sorted.sort_by(|a, b| a.priority.rank().cmp(&b.priority.rank())),
    }

    sorted
}

/// Composes the full display pipeline.
///
/// Stage order is search → status filter → priority filter → tag filter →
/// sort. With the default selection values every filter stage is a no-op and
/// the pipeline degenerates to a plain sort of the input.
pub fn filter_and_sort_tasks(
    tasks: &[Task],
    filter_type: FilterType,
    sort_type: SortType,
    search_query: &str,
    priority_filter: PriorityFilter,
    tag_filters: &[String],
) -> Vec<Task> {
    let searched = search_tasks(tasks, search_query);
    let filtered = filter_tasks(&searched, filter_type);
    let filtered = filter_by_priority(&filtered, priority_filter);
    let filtered = filter_by_tags(&filtered, tag_filters);
    sort_tasks(&filtered, sort_type)
}
