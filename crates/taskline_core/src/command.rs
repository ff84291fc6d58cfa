use crate::error::AppError;
use crate::list::TaskList;
use crate::model::Task;
use crate::storage::Storage;
use time::PrimitiveDateTime;

const HELP_MESSAGE: &str = "Here are the commands I understand:\n\
    list - show every task\n\
    todo <description> - add a todo\n\
    deadline <description> /by <yyyy-MM-dd HHmm> - add a deadline\n\
    event <description> /from <yyyy-MM-dd HHmm> /to <yyyy-MM-dd HHmm> - add an event\n\
    mark <task number> - mark a task as done\n\
    unmark <task number> - mark a task as not done\n\
    delete <task number> - remove a task\n\
    find <keyword> - show tasks whose description contains the keyword\n\
    help - show this message\n\
    bye - exit";

/// One parsed user request. Created by the parser, consumed exactly once by
/// [`Command::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    Help,
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        by: PrimitiveDateTime,
    },
    AddEvent {
        description: String,
        from: PrimitiveDateTime,
        to: PrimitiveDateTime,
    },
    /// Index is 0-based and may be negative (`mark 0` parses to -1); the
    /// range check in `execute` rejects it with every other bad index.
    Mark {
        index: i64,
    },
    Unmark {
        index: i64,
    },
    Delete {
        index: i64,
    },
    Find {
        keyword: String,
    },
}

impl Command {
    /// Whether this command terminates the session after its response is
    /// rendered.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    /// Applies the command to the task list and returns the response string.
    ///
    /// Mutating commands persist through `storage` after the mutation; a
    /// failed range check leaves both the list and the store untouched.
    pub fn execute(self, tasks: &mut TaskList, storage: &Storage) -> Result<String, AppError> {
        match self {
            Self::Exit => Ok("Bye. Hope to see you again soon!".to_string()),
            Self::Help => Ok(HELP_MESSAGE.to_string()),
            Self::List => Ok(format!(
                "Here are the tasks in your list:\n{}",
                numbered(tasks.iter())
            )),
            Self::Find { keyword } => {
                let matches = tasks
                    .iter()
                    .filter(|task| task.description.contains(&keyword));
                Ok(format!(
                    "Here are the matching tasks in your list:\n{}",
                    numbered(matches)
                ))
            }
            Self::AddTodo { description } => add(tasks, storage, Task::todo(description)),
            Self::AddDeadline { description, by } => {
                add(tasks, storage, Task::deadline(description, by))
            }
            Self::AddEvent {
                description,
                from,
                to,
            } => add(tasks, storage, Task::event(description, from, to)),
            Self::Mark { index } => {
                let index = checked_index(index, tasks.len(), "mark")?;
                tasks.mark(index);
                storage.save(tasks);
                Ok(format!(
                    "Nice! I've marked this task as done:\n  {}",
                    tasks.get(index)
                ))
            }
            Self::Unmark { index } => {
                let index = checked_index(index, tasks.len(), "unmark")?;
                tasks.unmark(index);
                storage.save(tasks);
                Ok(format!(
                    "OK, I've marked this task as not done yet:\n  {}",
                    tasks.get(index)
                ))
            }
            Self::Delete { index } => {
                let index = checked_index(index, tasks.len(), "delete")?;
                let deleted = tasks.delete(index);
                storage.save(tasks);
                Ok(format!(
                    "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
                    deleted,
                    tasks.len()
                ))
            }
        }
    }
}

fn add(tasks: &mut TaskList, storage: &Storage, task: Task) -> Result<String, AppError> {
    tasks.add(task);
    storage.save(tasks);
    Ok(format!(
        "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
        tasks.get(tasks.len() - 1),
        tasks.len()
    ))
}

fn checked_index(index: i64, len: usize, command: &str) -> Result<usize, AppError> {
    if index < 0 || index >= len as i64 {
        return Err(AppError::range(format!(
            "The task number provided is invalid!\nFix: Retry \"{command} <task number>\" with a valid task number!"
        )));
    }
    Ok(index as usize)
}

fn numbered<'a>(tasks: impl Iterator<Item = &'a Task>) -> String {
    tasks
        .enumerate()
        .map(|(position, task)| format!("{}.{}", position + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}
