//! Task management command: create, list, inspect, edit and delete tasks.
//!
//! `task list` is where the display pipeline surfaces: the filter, sort,
//! search, priority and tag flags map one-to-one onto
//! `filter_and_sort_tasks`, and all of them default to their no-op values.

use crate::db::tasks::Tasks;
use crate::libs::filter::{filter_and_sort_tasks, FilterType, PriorityFilter, SortType};
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, TaskQuery};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Priority level
        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
        /// Tag, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// List tasks with filtering, search and sorting
    List {
        /// Status filter
        #[arg(short, long, value_enum, default_value_t = FilterType::All)]
        filter: FilterType,
        /// Sort order
        #[arg(short, long, value_enum, default_value_t = SortType::CreatedRecent)]
        sort: SortType,
        /// Substring search over title, description and tags
        #[arg(long, default_value = "")]
        search: String,
        /// Priority filter
        #[arg(short, long, value_enum, default_value_t = PriorityFilter::All)]
        priority: PriorityFilter,
        /// Only tasks carrying this tag, repeatable
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// Show a single task in detail
    Show {
        /// Task ID
        id: i64,
    },
    /// Edit a task interactively
    Edit {
        /// Task ID
        id: i64,
    },
    /// Mark tasks as completed
    Done {
        /// Task IDs
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Mark completed tasks as pending again
    Reopen {
        /// Task IDs
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Delete tasks
    Delete {
        /// Task IDs
        #[arg(required = true)]
        ids: Vec<i64>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::Add {
            title,
            description,
            due,
            priority,
            tags,
        } => handle_add(title, description, due, priority, tags),
        TaskCommand::List {
            filter,
            sort,
            search,
            priority,
            tags,
        } => handle_list(filter, sort, search, priority, tags),
        TaskCommand::Show { id } => handle_show(id),
        TaskCommand::Edit { id } => handle_edit(id),
        TaskCommand::Done { ids } => handle_set_completed(ids, true),
        TaskCommand::Reopen { ids } => handle_set_completed(ids, false),
        TaskCommand::Delete { ids, yes } => handle_delete(ids, yes),
    }
}

fn handle_add(title: String, description: Option<String>, due: Option<String>, priority: Priority, tags: Vec<String>) -> Result<()> {
    if title.trim().is_empty() {
        msg_bail_anyhow!(Message::TitleRequired);
    }

    let due_date = match due {
        Some(value) => Some(parse_due_date(&value)?),
        None => None,
    };

    let task = Task::new(title.trim())
        .with_description(description)
        .with_priority(priority)
        .with_tags(tags)
        .with_due_date(due_date);

    Tasks::new()?.insert(&task)?;
    msg_success!(Message::TaskCreated(task.title));
    Ok(())
}

fn handle_list(filter: FilterType, sort: SortType, search: String, priority: PriorityFilter, tags: Vec<String>) -> Result<()> {
    let all_tasks = Tasks::new()?.fetch(TaskQuery::All)?;
    if all_tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let visible = filter_and_sort_tasks(&all_tasks, filter, sort, &search, priority, &tags);
    if visible.is_empty() {
        msg_info!(Message::NoTasksMatched);
        return Ok(());
    }

    View::tasks(&visible)?;
    Ok(())
}

fn handle_show(id: i64) -> Result<()> {
    match Tasks::new()?.get_by_id(id)? {
        Some(task) => View::task(&task),
        None => {
            msg_error!(Message::TaskNotFound(id));
            Ok(())
        }
    }
}

fn handle_edit(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let task = match tasks_db.get_by_id(id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
    };

    msg_info!(Message::EditingTask(task.title.clone()));

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Title")
        .default(task.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Description")
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let due: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Due date (YYYY-MM-DD, empty for none)")
        .default(task.due_date.map(|d| d.to_string()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let priorities = ["low", "medium", "high"];
    let priority_index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Priority")
        .items(&priorities)
        .default((2 - task.priority.rank()) as usize)
        .interact()?;

    let tags: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Tags (comma separated)")
        .default(task.tags.join(","))
        .allow_empty(true)
        .interact_text()?;

    let mut updated = task.clone();
    updated.title = title.trim().to_string();
    updated.description = if description.is_empty() { None } else { Some(description) };
    updated.due_date = if due.trim().is_empty() { None } else { Some(parse_due_date(&due)?) };
    updated.priority = priorities[priority_index].parse().unwrap_or_default();
    updated.tags = tags
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if updated.title.is_empty() {
        msg_bail_anyhow!(Message::TitleRequired);
    }

    if updated.title == task.title
        && updated.description == task.description
        && updated.due_date == task.due_date
        && updated.priority == task.priority
        && updated.tags == task.tags
    {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    tasks_db.update(&updated)?;
    msg_success!(Message::TaskUpdated(updated.title));
    Ok(())
}

fn handle_set_completed(ids: Vec<i64>, completed: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    for id in ids {
        match tasks_db.get_by_id(id)? {
            Some(task) => {
                tasks_db.set_completed(id, completed)?;
                if completed {
                    msg_success!(Message::TaskCompleted(task.title));
                } else {
                    msg_success!(Message::TaskReopened(task.title));
                }
            }
            None => msg_error!(Message::TaskNotFound(id)),
        }
    }
    Ok(())
}

fn handle_delete(ids: Vec<i64>, yes: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let existing = tasks_db.fetch(TaskQuery::ByIds(ids.clone()))?;
    if existing.is_empty() {
        msg_info!(Message::NoTasksMatched);
        return Ok(());
    }

    View::tasks(&existing)?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTasks(existing.len()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    let ids: Vec<i64> = existing.iter().filter_map(|t| t.id).collect();
    let deleted = tasks_db.delete_many(&ids)?;
    msg_success!(Message::TasksDeletedCount(deleted));
    Ok(())
}

fn parse_due_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| crate::msg_error_anyhow!(Message::InvalidDueDate(value.to_string())))
}
