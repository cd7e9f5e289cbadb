//! CLI argument parsing for todo.

use clap::Parser;
use clap::builder::BoolishValueParser;
use std::path::PathBuf;
use todo::{NewTask, TaskChanges};

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    about = "Keep a task list in a JSON file in the current directory",
    version,
    after_help = help_footer()
)]
pub struct Cli {
    /// Directory holding the task file (default: current directory)
    #[arg(short = 'd', long)]
    pub dir: Option<PathBuf>,

    /// Task file name inside the directory
    #[arg(long, value_name = "NAME", default_value = todo::TODO_FILE)]
    pub file: PathBuf,

    /// Add a task. Ex: --add --titulo="some task"
    #[arg(long, help_heading = "Commands")]
    pub add: bool,

    /// List the tasks. Ex: --list
    #[arg(long, help_heading = "Commands")]
    pub list: bool,

    /// Edit a task. Ex: --edit --indice=2 --prioridade=5
    #[arg(long, help_heading = "Commands")]
    pub edit: bool,

    /// Delete a task. Ex: --del --indice=2
    #[arg(long, help_heading = "Commands")]
    pub del: bool,

    /// Task index, starting at 1 (edit, del)
    #[arg(long, help_heading = "Task fields", allow_negative_numbers = true)]
    pub indice: Option<i64>,

    /// Task title (required for add)
    #[arg(long, help_heading = "Task fields")]
    pub titulo: Option<String>,

    /// Task description
    #[arg(long, help_heading = "Task fields")]
    pub descricao: Option<String>,

    /// Task priority
    #[arg(long, help_heading = "Task fields", allow_negative_numbers = true)]
    pub prioridade: Option<i64>,

    /// Task category
    #[arg(long, help_heading = "Task fields")]
    pub categoria: Option<String>,

    /// Task status; bare flag means done
    #[arg(
        long,
        help_heading = "Task fields",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub finalizada: Option<bool>,
}

fn help_footer() -> String {
    format!(
        "Selected commands run in the order add, list, edit, del.\nLogs are written to: {}",
        crate::log_file_path().display()
    )
}

impl Cli {
    /// Fields for `--add`.
    pub fn new_task(&self) -> NewTask {
        NewTask {
            title: self.titulo.clone().unwrap_or_default(),
            description: self.descricao.clone(),
            priority: self.prioridade,
            category: self.categoria.clone(),
            completed: self.finalizada,
        }
    }

    /// Overrides for `--edit`.
    pub fn changes(&self) -> TaskChanges {
        TaskChanges {
            title: self.titulo.clone(),
            description: self.descricao.clone(),
            priority: self.prioridade,
            category: self.categoria.clone(),
            completed: self.finalizada,
        }
    }

    /// Index for `--edit` and `--del`; 0 when not given.
    pub fn index(&self) -> i64 {
        self.indice.unwrap_or(0)
    }
}
