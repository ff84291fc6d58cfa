use crate::error::AppError;
use serde::Serialize;
use std::fmt;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Wire grammar for timestamps, shared by the command grammar and the
/// storage records: `yyyy-MM-dd HHmm`, 24-hour clock.
pub const STAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour][minute]");

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none] [year], [hour repr:12 padding:none]:[minute][period]"
);

time::serde::format_description!(
    stamp_serde,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour][minute]"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub description: String,
    pub done: bool,
    #[serde(flatten)]
    pub kind: TaskKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline {
        #[serde(with = "stamp_serde")]
        by: PrimitiveDateTime,
    },
    Event {
        #[serde(with = "stamp_serde")]
        from: PrimitiveDateTime,
        #[serde(with = "stamp_serde")]
        to: PrimitiveDateTime,
    },
}

impl Task {
    pub fn todo<D: Into<String>>(description: D) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline<D: Into<String>>(description: D, by: PrimitiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    pub fn event<D: Into<String>>(
        description: D,
        from: PrimitiveDateTime,
        to: PrimitiveDateTime,
    ) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { from, to },
        }
    }

    pub fn type_tag(&self) -> &'static str {
        match self.kind {
            TaskKind::Todo => "T",
            TaskKind::Deadline { .. } => "D",
            TaskKind::Event { .. } => "E",
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.done { "X" } else { " " }
    }

    /// Renders the pipe-delimited storage record for this task.
    pub fn to_record(&self) -> Result<String, AppError> {
        let done = if self.done { 1 } else { 0 };
        let mut record = format!("{} | {} | {}", self.type_tag(), done, self.description);
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => {
                record.push_str(&format!(" | {}", record_stamp(by)?));
            }
            TaskKind::Event { from, to } => {
                record.push_str(&format!(" | {} | {}", record_stamp(from)?, record_stamp(to)?));
            }
        }
        Ok(record)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", display_stamp(by)?),
            TaskKind::Event { from, to } => {
                write!(
                    f,
                    " (from: {} to: {})",
                    display_stamp(from)?,
                    display_stamp(to)?
                )
            }
        }
    }
}

fn record_stamp(stamp: &PrimitiveDateTime) -> Result<String, AppError> {
    stamp
        .format(STAMP_FORMAT)
        .map_err(|err| AppError::save(err.to_string()))
}

fn display_stamp(stamp: &PrimitiveDateTime) -> Result<String, fmt::Error> {
    stamp.format(DISPLAY_FORMAT).map_err(|_| fmt::Error)
}
