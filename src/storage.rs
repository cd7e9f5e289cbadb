//! Storage layer: the whole task list as one JSON array on disk.

use crate::store::StoreError;
use crate::types::Task;
use eyre::{Context, Result};
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Storage handle for reading/writing the backing file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file empty if it does not exist yet.
    ///
    /// Returns true if the file was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(_) => Ok(false),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                File::create(&self.path)
                    .with_context(|| format!("Failed to create file \"{}\"", self.path.display()))?;
                log::info!("Created empty task file {}", self.path.display());
                Ok(true)
            }
            Err(e) => Err(e).with_context(|| format!("Failed to open file \"{}\"", self.path.display())),
        }
    }

    /// Read the full task list. An empty file holds no tasks.
    pub fn load(&self) -> Result<Vec<Task>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to open file \"{}\"", self.path.display()))?;

        if content.trim().is_empty() {
            log::debug!("{} is empty", self.path.display());
            return Ok(Vec::new());
        }

        let tasks = decode(&content).map_err(|source| {
            eyre::eyre!(StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })
        })?;

        log::debug!("Loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Overwrite the backing file with the full task list.
    ///
    /// The file must already exist; it is truncated, not replaced.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open file \"{}\" for writing", self.path.display()))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, tasks)
            .with_context(|| format!("Failed to write to file \"{}\"", self.path.display()))?;
        writeln!(writer).with_context(|| format!("Failed to write to file \"{}\"", self.path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write to file \"{}\"", self.path.display()))?;

        log::debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

/// Keys of a stored task, as written.
const TASK_KEYS: [&str; 5] = ["titulo", "descricao", "prioridade", "categoria", "finalizada"];

/// Decode the first JSON value in `content` as a task list.
///
/// Anything after that value is ignored, a bare `null` is an empty list,
/// and task keys match case-insensitively with an exact match winning.
fn decode(content: &str) -> serde_json::Result<Vec<Task>> {
    let first = serde_json::Deserializer::from_str(content)
        .into_iter::<Option<Vec<Value>>>()
        .next();
    let values = match first {
        Some(values) => values?.unwrap_or_default(),
        None => return Ok(Vec::new()),
    };

    values
        .into_iter()
        .map(|value| serde_json::from_value(fold_keys(value)))
        .collect()
}

fn fold_keys(value: Value) -> Value {
    let Value::Object(map) = value else {
        return value;
    };

    let mut folded = Map::new();
    for (key, field) in map {
        match TASK_KEYS.iter().find(|k| k.eq_ignore_ascii_case(&key)) {
            Some(&canonical) if canonical == key => {
                folded.insert(key, field);
            }
            Some(&canonical) => {
                if !folded.contains_key(canonical) {
                    folded.insert(canonical.to_string(), field);
                }
            }
            None => {
                folded.insert(key, field);
            }
        }
    }
    Value::Object(folded)
}
