use crate::command::Command;
use crate::error::AppError;
use crate::model::{STAMP_FORMAT, Task};
use time::PrimitiveDateTime;

fn parse_stamp(value: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(value, STAMP_FORMAT)
}

fn parse_todo(rest: Option<&str>) -> Result<Command, AppError> {
    let description = rest.ok_or_else(|| {
        AppError::validation(
            "The description of the todo is empty!\nFix: Try \"todo <description>\" instead!",
        )
    })?;
    Ok(Command::AddTodo {
        description: description.to_string(),
    })
}

fn parse_find(rest: Option<&str>) -> Result<Command, AppError> {
    let keyword = rest.ok_or_else(|| {
        AppError::validation("The keyword to find is missing!\nFix: Try \"find <keyword>\" instead!")
    })?;
    Ok(Command::Find {
        keyword: keyword.to_string(),
    })
}

fn parse_deadline(rest: Option<&str>) -> Result<Command, AppError> {
    let fix = "Fix: Try \"deadline <description> /by <yyyy-MM-dd HHmm>\" instead!";
    let rest = rest.ok_or_else(|| {
        AppError::validation(format!("The description of the deadline is empty!\n{fix}"))
    })?;
    let (description, by) = rest.split_once(" /by ").ok_or_else(|| {
        AppError::validation(format!("The deadline is missing \"/by\"!\n{fix}"))
    })?;
    let by = parse_stamp(by).map_err(|_| {
        AppError::format(format!(
            "The format of date and time entered is invalid!\n{fix}\nExample: deadline return book /by 2025-04-07 1805"
        ))
    })?;
    Ok(Command::AddDeadline {
        description: description.to_string(),
        by,
    })
}

fn parse_event(rest: Option<&str>) -> Result<Command, AppError> {
    let fix =
        "Fix: Try \"event <description> /from <yyyy-MM-dd HHmm> /to <yyyy-MM-dd HHmm>\" instead!";
    let rest = rest.ok_or_else(|| {
        AppError::validation(format!("The description of the event is empty!\n{fix}"))
    })?;
    let (description, times) = rest.split_once(" /from ").ok_or_else(|| {
        AppError::validation(format!("The event is missing \"/from\"!\n{fix}"))
    })?;
    let (from, to) = times.split_once(" /to ").ok_or_else(|| {
        AppError::validation(format!("The event is missing \"/to\"!\n{fix}"))
    })?;
    // from/to ordering is intentionally not validated.
    let (from, to) = match (parse_stamp(from), parse_stamp(to)) {
        (Ok(from), Ok(to)) => (from, to),
        _ => {
            return Err(AppError::format(format!(
                "The format of date and time entered is invalid!\n{fix}\nExample: event project meeting /from 2025-04-07 1230 /to 2025-04-07 1330"
            )));
        }
    };
    Ok(Command::AddEvent {
        description: description.to_string(),
        from,
        to,
    })
}

/// Parses the 1-based task number of a `mark`/`unmark`/`delete` command and
/// converts it to the 0-based index the rest of the system works in. The
/// result may be negative (`mark 0`); the dispatcher rejects it as out of
/// range like any other bad index.
fn parse_task_index(rest: Option<&str>, command: &str) -> Result<i64, AppError> {
    let rest = rest.ok_or_else(|| {
        AppError::validation(format!(
            "The task number to {command} is not provided!\nFix: Try \"{command} <task number>\" instead!"
        ))
    })?;
    let number: i32 = rest.parse().map_err(|_| {
        AppError::validation(format!(
            "The task number provided is not an integer!\nFix: Try \"{command} <integer>\" instead!"
        ))
    })?;
    Ok(i64::from(number) - 1)
}

/// Maps one raw input line onto a [`Command`].
///
/// The trimmed line splits on the first space into `(keyword, rest)`; the
/// keyword dispatches, the rest carries the arguments verbatim. Empty and
/// whitespace-only input falls through to the unknown-command arm.
pub fn parse_command(raw_line: &str) -> Result<Command, AppError> {
    let trimmed = raw_line.trim();
    let (keyword, rest) = match trimmed.split_once(' ') {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (trimmed, None),
    };

    match keyword {
        "help" => Ok(Command::Help),
        "bye" => Ok(Command::Exit),
        "list" => Ok(Command::List),
        "todo" => parse_todo(rest),
        "find" => parse_find(rest),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "delete" => Ok(Command::Delete {
            index: parse_task_index(rest, "delete")?,
        }),
        "mark" => Ok(Command::Mark {
            index: parse_task_index(rest, "mark")?,
        }),
        "unmark" => Ok(Command::Unmark {
            index: parse_task_index(rest, "unmark")?,
        }),
        _ => Err(AppError::unknown_command(format!(
            "\"{trimmed}\" is not a valid command!\nFix: Type 'help' to see the list of valid commands!"
        ))),
    }
}

/// Decodes one persisted storage record back into a [`Task`].
///
/// Records are pipe-delimited with surrounding spaces: `<type> | <0/1> |
/// <description>` plus one stamp for deadlines and two for events.
pub fn parse_record(line: &str) -> Result<Task, AppError> {
    let fields: Vec<&str> = line.split(" | ").collect();

    let missing = || AppError::load("Missing data from tasks!");
    let bad_stamp = |_| AppError::load("Format of date and time is invalid!");

    let type_tag = *fields.first().ok_or_else(missing)?;
    let done = *fields.get(1).ok_or_else(missing)? == "1";
    let description = *fields.get(2).ok_or_else(missing)?;

    let mut task = match type_tag {
        "T" => Task::todo(description),
        "D" => {
            let by = fields.get(3).ok_or_else(missing)?;
            Task::deadline(description, parse_stamp(by).map_err(bad_stamp)?)
        }
        "E" => {
            let from = fields.get(3).ok_or_else(missing)?;
            let to = fields.get(4).ok_or_else(missing)?;
            Task::event(
                description,
                parse_stamp(from).map_err(bad_stamp)?,
                parse_stamp(to).map_err(bad_stamp)?,
            )
        }
        _ => return Err(AppError::load("Invalid task type found!")),
    };
    task.done = done;
    Ok(task)
}
