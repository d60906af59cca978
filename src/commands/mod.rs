pub mod board;
pub mod export;
pub mod init;
pub mod login;
pub mod logout;
pub mod stats;
pub mod sum;
pub mod sync;
pub mod tag;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage tags")]
    Tag(tag::TagArgs),
    #[command(about = "Show the task summary dashboard")]
    Sum,
    #[command(about = "Show the kanban board")]
    Board,
    #[command(about = "Show task statistics")]
    Stats,
    #[command(about = "Export tasks and summaries")]
    Export(export::ExportArgs),
    #[command(about = "Log in to the sync server")]
    Login,
    #[command(about = "Log out and remove the saved session")]
    Logout,
    #[command(about = "Pull tasks from the sync server")]
    Sync,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Task(args) => task::cmd(args),
            Commands::Tag(args) => tag::cmd(args),
            Commands::Sum => sum::cmd(),
            Commands::Board => board::cmd(),
            Commands::Stats => stats::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd(),
            Commands::Sync => sync::cmd().await,
        }
    }
}
