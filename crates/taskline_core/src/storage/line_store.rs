use crate::error::AppError;
use crate::list::TaskList;
use crate::parser;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";
const STORE_FILE_NAME: &str = "taskline.txt";
const STORE_ENV_VAR: &str = "TASKLINE_DATA_PATH";

/// Round-trips the task list to a line-oriented text file, one storage
/// record per line, in list order.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

/// Resolves the store location: the `TASKLINE_DATA_PATH` override when set,
/// otherwise the fixed relative `data/taskline.txt`.
pub fn store_path() -> PathBuf {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }

    PathBuf::from(DATA_DIR).join(STORE_FILE_NAME)
}

impl Storage {
    pub fn from_env() -> Self {
        Self::with_path(store_path())
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the store with the serialized list. An I/O failure is
    /// logged and swallowed; the in-memory list stays the source of truth
    /// for the rest of the session.
    pub fn save(&self, tasks: &TaskList) {
        if let Err(err) = self.try_save(tasks) {
            log::warn!("Error saving tasks in hard disk: {}", err.message());
        }
    }

    fn try_save(&self, tasks: &TaskList) -> Result<(), AppError> {
        let records = tasks.to_records()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|err| AppError::save(err.to_string()))?;
        }

        let mut content = records.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        std::fs::write(&self.path, content).map_err(|err| AppError::save(err.to_string()))
    }

    /// Loads the persisted records into `tasks`, appending in file order.
    ///
    /// A missing file is a fresh empty list. A single undecodable line
    /// clears the whole list and surfaces the error; the list is never
    /// left partially loaded.
    pub fn load(&self, tasks: &mut TaskList) -> Result<(), AppError> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|_| AppError::load("Unable to read saved data in hard disk"))?;

        for line in content.lines() {
            match parser::parse_record(line) {
                Ok(task) => tasks.add(task),
                Err(err) => {
                    tasks.clear();
                    return Err(err);
                }
            }
        }

        Ok(())
    }
}
