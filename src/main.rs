//! todo CLI - a task list kept in a JSON file.

use clap::{CommandFactory, Parser};
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use todo::{StoreConfig, TaskStore, format_task};

mod cli;

use cli::Cli;

/// Where the log file lives on this platform.
fn log_file_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todo")
        .join("logs")
        .join("todo.log")
}

fn setup_logging() -> Result<()> {
    let log_file = log_file_path();
    if let Some(log_dir) = log_file.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn get_store_config(cli: &Cli) -> StoreConfig {
    let dir = cli
        .dir
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    StoreConfig::new(dir).with_file_name(&cli.file)
}

fn run(cli: Cli) -> Result<()> {
    let config = get_store_config(&cli);
    let mut store = TaskStore::open(&config).context("Failed to open task list")?;

    if store.was_created() {
        println!(
            "Creating file \"{}\" in \"{}\"",
            config.file_name.display(),
            config.root().display()
        );
        println!("{} File \"{}\" created", "✓".green(), store.path().display());
    }

    if cli.add {
        let title = store
            .add(cli.new_task())
            .context("Failed to add task")?
            .title
            .clone();
        println!("{} Added: {} {}", "✓".green(), store.tasks().len(), title);
    }

    if cli.list {
        let tasks = store.list().context("Failed to list tasks")?;
        println!("Task list:");
        for (ordinal, task) in tasks {
            println!("{}", format_task(ordinal, task));
        }
    }

    if cli.edit {
        let index = cli.index();
        let task = store
            .edit(index, &cli.changes())
            .context("Failed to edit task")?;
        println!("{} Edited: {} {}", "✓".green(), index, task.title);
    }

    if cli.del {
        let index = cli.index();
        let task = store.delete(index).context("Failed to delete task")?;
        println!("{} Deleted: {} {}", "✓".green(), index, task.title);
    }

    if !(cli.add || cli.list || cli.edit || cli.del) {
        info!("No command selected");
    }

    Ok(())
}

fn main() -> Result<()> {
    if std::env::args_os().len() == 1 {
        Cli::command().print_help().context("Failed to print usage")?;
        return Ok(());
    }

    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
