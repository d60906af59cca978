use crate::db::tags::Tags;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    command: TagCommand,
}

#[derive(Debug, Subcommand)]
enum TagCommand {
    /// List all tags in use with task counts
    List,
    /// Rename a tag on every task carrying it
    Rename {
        /// Current tag name
        from: String,
        /// New tag name
        to: String,
    },
    /// Remove a tag from every task carrying it
    Remove {
        /// Tag name
        tag: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show tasks carrying a specific tag
    Tasks {
        /// Tag name
        tag: String,
    },
}

pub fn cmd(args: TagArgs) -> Result<()> {
    match args.command {
        TagCommand::List => handle_list(),
        TagCommand::Rename { from, to } => handle_rename(from, to),
        TagCommand::Remove { tag, yes } => handle_remove(tag, yes),
        TagCommand::Tasks { tag } => handle_tasks(tag),
    }
}

fn handle_list() -> Result<()> {
    let mut tags_db = Tags::new()?;
    let tags = tags_db.list()?;

    if tags.is_empty() {
        msg_info!(Message::NoTagsFound);
        return Ok(());
    }

    msg_print!(Message::TagListHeader, true);
    View::tags(&tags)?;
    Ok(())
}

fn handle_rename(from: String, to: String) -> Result<()> {
    let mut tags_db = Tags::new()?;

    match tags_db.rename(&from, &to) {
        Ok(_) => {
            msg_success!(Message::TagRenamed(from, to));
            Ok(())
        }
        Err(_) => {
            msg_error!(Message::TagNotFound(from));
            Ok(())
        }
    }
}

fn handle_remove(tag: String, yes: bool) -> Result<()> {
    let mut tags_db = Tags::new()?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove tag '{}' from all tasks?", tag))
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    match tags_db.remove(&tag) {
        Ok(count) => {
            msg_success!(Message::TagRemoved(tag, count));
            Ok(())
        }
        Err(_) => {
            msg_error!(Message::TagNotFound(tag));
            Ok(())
        }
    }
}

fn handle_tasks(tag: String) -> Result<()> {
    let mut tags_db = Tags::new()?;
    let tasks = tags_db.tasks_with_tag(&tag)?;

    if tasks.is_empty() {
        msg_info!(Message::TagNotFound(tag));
        return Ok(());
    }

    View::tasks(&tasks)?;
    Ok(())
}
