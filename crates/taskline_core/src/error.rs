use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Validation(String),
    Format(String),
    Range(String),
    UnknownCommand(String),
    Load(String),
    Save(String),
}

impl AppError {
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation(message.into())
    }

    pub fn format<M: Into<String>>(message: M) -> Self {
        Self::Format(message.into())
    }

    pub fn range<M: Into<String>>(message: M) -> Self {
        Self::Range(message.into())
    }

    pub fn unknown_command<M: Into<String>>(message: M) -> Self {
        Self::UnknownCommand(message.into())
    }

    pub fn load<M: Into<String>>(message: M) -> Self {
        Self::Load(message.into())
    }

    pub fn save<M: Into<String>>(message: M) -> Self {
        Self::Save(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Format(_) => "format_error",
            Self::Range(_) => "range_error",
            Self::UnknownCommand(_) => "unknown_command",
            Self::Load(_) => "load_error",
            Self::Save(_) => "save_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) => message,
            Self::Format(message) => message,
            Self::Range(message) => message,
            Self::UnknownCommand(message) => message,
            Self::Load(message) => message,
            Self::Save(message) => message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}
