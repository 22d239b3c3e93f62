use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    UnknownItemName,
    AmbiguousItemName,
    IndexOutOfRange,
    UndefinedIndex,
    DuplicateIndex,
    DuplicateName,
    IndexGap,
    IndexOverflow,
    InvalidName,
    GenerationMismatch,
    Parse,
}

impl CoreErrorCode {
    /// Whether this code can only come out of table validation. A table
    /// that fails with one of these never becomes observable.
    pub fn is_construction_error(self) -> bool {
        matches!(
            self,
            Self::DuplicateIndex
                | Self::DuplicateName
                | Self::IndexGap
                | Self::IndexOverflow
                | Self::InvalidName
                | Self::GenerationMismatch
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_construction_error(&self) -> bool {
        self.code.is_construction_error()
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CoreError {}
