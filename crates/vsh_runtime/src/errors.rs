//! Error type shared by every runtime operation.
//!
//! Errors are returned by value and travel unchanged to whatever boundary the
//! caller maintains. Compare them with [`Error::kind`] rather than by message.

use std::fmt;

use vsh_syntax::IndexError;

/// Why an index was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexFault {
    NotInteger,
    OutOfRange,
    /// The offset falls inside a multi-byte codepoint or at the end of text.
    NotBoundary,
}

impl fmt::Display for IndexFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexFault::NotInteger => write!(f, "index must be integer"),
            IndexFault::OutOfRange => write!(f, "index out of range"),
            IndexFault::NotBoundary => write!(f, "index not at a codepoint boundary"),
        }
    }
}

impl From<IndexError> for IndexFault {
    fn from(e: IndexError) -> Self {
        match e {
            IndexError::NotInteger => IndexFault::NotInteger,
            IndexError::OutOfRange => IndexFault::OutOfRange,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadIndex,
    ReplacementMustBeText,
    ReplacementMustBeList,
    ReadOnly,
    BlackholeRead,
    InvalidValue,
    CannotIndex,
    EmptyIndexPath,
    ElemNotSet,
    VariableNotFound,
    BadEnvName,
    NotCallable,
    ExternalCmdOpts,
    ExternalCmdExit,
    Exec,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    BadIndex(IndexFault),
    ReplacementMustBeText,
    ReplacementMustBeList,
    ReadOnly,
    BlackholeRead,
    /// A validator refused the value; carries the validator's own error.
    InvalidValue(Box<Error>),
    CannotIndex { kind: &'static str },
    EmptyIndexPath,
    ElemNotSet,
    VariableNotFound(String),
    BadEnvName(String),
    NotCallable { kind: &'static str },
    ExternalCmdOpts,
    ExternalCmdExit { name: String, code: i32 },
    Exec { name: String, message: String },
    Failure(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BadIndex(_) => ErrorKind::BadIndex,
            Error::ReplacementMustBeText => ErrorKind::ReplacementMustBeText,
            Error::ReplacementMustBeList => ErrorKind::ReplacementMustBeList,
            Error::ReadOnly => ErrorKind::ReadOnly,
            Error::BlackholeRead => ErrorKind::BlackholeRead,
            Error::InvalidValue(_) => ErrorKind::InvalidValue,
            Error::CannotIndex { .. } => ErrorKind::CannotIndex,
            Error::EmptyIndexPath => ErrorKind::EmptyIndexPath,
            Error::ElemNotSet => ErrorKind::ElemNotSet,
            Error::VariableNotFound(_) => ErrorKind::VariableNotFound,
            Error::BadEnvName(_) => ErrorKind::BadEnvName,
            Error::NotCallable { .. } => ErrorKind::NotCallable,
            Error::ExternalCmdOpts => ErrorKind::ExternalCmdOpts,
            Error::ExternalCmdExit { .. } => ErrorKind::ExternalCmdExit,
            Error::Exec { .. } => ErrorKind::Exec,
            Error::Failure(_) => ErrorKind::Failure,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Error::Failure(message.into())
    }

    /// The validator error wrapped by an [`Error::InvalidValue`].
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Error::InvalidValue(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadIndex(fault) => write!(f, "bad index: {fault}"),
            Error::ReplacementMustBeText => write!(f, "replacement must be string"),
            Error::ReplacementMustBeList => write!(f, "replacement must be list"),
            Error::ReadOnly => write!(f, "read-only variable; cannot be set"),
            Error::BlackholeRead => write!(f, "cannot get blackhole variable"),
            Error::InvalidValue(inner) => write!(f, "invalid value: {inner}"),
            Error::CannotIndex { kind } => write!(f, "cannot index a value of kind {kind}"),
            Error::EmptyIndexPath => write!(f, "element assignment needs at least one index"),
            Error::ElemNotSet => write!(f, "element variable read before being set"),
            Error::VariableNotFound(name) => write!(f, "variable ${name} not found"),
            Error::BadEnvName(name) => write!(f, "bad environment variable name {name:?}"),
            Error::NotCallable { kind } => write!(f, "a value of kind {kind} is not callable"),
            Error::ExternalCmdOpts => write!(f, "external commands don't accept options"),
            Error::ExternalCmdExit { name, code } => write!(f, "{name} exited with {code}"),
            Error::Exec { name, message } => write!(f, "cannot run {name}: {message}"),
            Error::Failure(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidValue(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl From<IndexError> for Error {
    fn from(e: IndexError) -> Self {
        Error::BadIndex(e.into())
    }
}
