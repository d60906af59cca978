//! # Kaglo - Personal Task Management
//!
//! A command-line utility for managing a personal to-do list with
//! priorities, due dates, tags and dashboards.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete and delete tasks
//! - **Filtering & Search**: Status, priority and tag filters with substring search
//! - **Sorting**: Due date, creation time, title, completion and priority orders
//! - **Dashboards**: Summary counts, kanban board and statistics views
//! - **Tag System**: Organize tasks with ordered, free-form tags
//! - **Data Export**: Export tasks to CSV, JSON and Excel formats
//! - **Server Sync**: Pull tasks from a companion web API
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kaglo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
