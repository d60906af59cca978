//! Data export for backup and external analysis.
//!
//! Exports the task list and summary counts to CSV, JSON or Excel. Default
//! file names carry a timestamp so repeated exports never collide.

use crate::db::tasks::Tasks;
use crate::libs::formatter::{format_due_date, format_timestamp};
use crate::libs::messages::Message;
use crate::libs::summary::{calculate_summary, TaskSummary};
use crate::libs::task::{Task, TaskQuery};
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet tools.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with a tasks sheet and a summary sheet.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Data selection for an export run.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Task records with all fields.
    Tasks,
    /// Aggregate summary counts only.
    Summary,
    /// Tasks and summary together.
    All,
}

impl ExportData {
    fn name(&self) -> &'static str {
        match self {
            ExportData::Tasks => "tasks",
            ExportData::Summary => "summary",
            ExportData::All => "all",
        }
    }
}

/// Flat, display-formatted task row used for CSV and Excel sheets.
#[derive(Debug, Serialize)]
struct TaskRow {
    id: i64,
    title: String,
    description: String,
    completed: bool,
    priority: String,
    tags: String,
    due_date: String,
    created_at: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        TaskRow {
            id: task.id.unwrap_or(0),
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            completed: task.completed,
            priority: task.priority.to_string(),
            tags: task.tags.join(","),
            due_date: format_due_date(task.due_date),
            created_at: format_timestamp(task.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
struct FullExport<'a> {
    tasks: &'a [Task],
    summary: TaskSummary,
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Runs the export and reports the output path.
    pub fn export(&self, data: ExportData) -> Result<()> {
        let tasks = Tasks::new()?.fetch(TaskQuery::All)?;
        if tasks.is_empty() {
            msg_info!(Message::ExportEmpty);
            return Ok(());
        }

        let path = self.output_path(data);
        match self.format {
            ExportFormat::Csv => self.write_csv(&path, data, &tasks)?,
            ExportFormat::Json => self.write_json(&path, data, &tasks)?,
            ExportFormat::Excel => self.write_excel(&path, data, &tasks)?,
        }

        msg_success!(Message::ExportCompleted(path.display().to_string()));
        Ok(())
    }

    fn output_path(&self, data: ExportData) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let stamp = Local::now().format("%Y%m%d_%H%M%S");
            PathBuf::from(format!("kaglo_{}_{}.{}", data.name(), stamp, self.format.extension()))
        })
    }

    fn write_csv(&self, path: &PathBuf, data: ExportData, tasks: &[Task]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        match data {
            ExportData::Summary => {
                let summary = calculate_summary(tasks);
                writer.write_record(["total", "completed", "pending", "overdue", "high", "medium", "low"])?;
                writer.write_record([
                    summary.total.to_string(),
                    summary.completed.to_string(),
                    summary.pending.to_string(),
                    summary.overdue.to_string(),
                    summary.by_priority.high.to_string(),
                    summary.by_priority.medium.to_string(),
                    summary.by_priority.low.to_string(),
                ])?;
            }
            // CSV has no second sheet; "all" degrades to the task rows.
            ExportData::Tasks | ExportData::All => {
                for task in tasks {
                    writer.serialize(TaskRow::from_task(task))?;
                }
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, path: &PathBuf, data: ExportData, tasks: &[Task]) -> Result<()> {
        let json = match data {
            ExportData::Tasks => serde_json::to_string_pretty(tasks)?,
            ExportData::Summary => serde_json::to_string_pretty(&calculate_summary(tasks))?,
            ExportData::All => serde_json::to_string_pretty(&FullExport {
                tasks,
                summary: calculate_summary(tasks),
            })?,
        };

        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_excel(&self, path: &PathBuf, data: ExportData, tasks: &[Task]) -> Result<()> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();

        if matches!(data, ExportData::Tasks | ExportData::All) {
            let sheet = workbook.add_worksheet().set_name("Tasks")?;
            let headers = ["ID", "Title", "Description", "Completed", "Priority", "Tags", "Due date", "Created"];
            for (col, header) in headers.iter().enumerate() {
                sheet.write_with_format(0, col as u16, *header, &bold)?;
            }
            for (i, task) in tasks.iter().enumerate() {
                let row = (i + 1) as u32;
                let flat = TaskRow::from_task(task);
                sheet.write(row, 0, flat.id as f64)?;
                sheet.write(row, 1, &flat.title)?;
                sheet.write(row, 2, &flat.description)?;
                sheet.write(row, 3, if flat.completed { "yes" } else { "no" })?;
                sheet.write(row, 4, &flat.priority)?;
                sheet.write(row, 5, &flat.tags)?;
                sheet.write(row, 6, &flat.due_date)?;
                sheet.write(row, 7, &flat.created_at)?;
            }
        }

        if matches!(data, ExportData::Summary | ExportData::All) {
            let summary = calculate_summary(tasks);
            let sheet = workbook.add_worksheet().set_name("Summary")?;
            let rows = [
                ("Total", summary.total),
                ("Completed", summary.completed),
                ("Pending", summary.pending),
                ("Overdue", summary.overdue),
                ("High priority", summary.by_priority.high),
                ("Medium priority", summary.by_priority.medium),
                ("Low priority", summary.by_priority.low),
            ];
            for (i, (label, value)) in rows.iter().enumerate() {
                sheet.write_with_format(i as u32, 0, *label, &bold)?;
                sheet.write(i as u32, 1, *value as f64)?;
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}
