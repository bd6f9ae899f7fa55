use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid change: {0}")]
    InvalidChange(String),
    #[error("malformed owners declaration: {0}")]
    MalformedDeclaration(String),
    #[error("directory unavailable: {0}")]
    SubViewUnavailable(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("change source failed: {0}")]
    ChangeSource(String),
}

impl ApiError {
    /// Stable identifier for routing and exit codes.
    #[must_use]
    pub const fn error_id(&self) -> ErrorId {
        match self {
            ApiError::InvalidChange(_) => ErrorId::E_INVALID_PATH,
            ApiError::MalformedDeclaration(_) => ErrorId::E_MALFORMED_OWNERS,
            ApiError::SubViewUnavailable(_) => ErrorId::E_SUBVIEW,
            ApiError::Io(_) => ErrorId::E_IO,
            ApiError::ChangeSource(_) => ErrorId::E_CHANGE_SOURCE,
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        exit_code_for(self.error_id())
    }
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        use crate::types::errors::ErrorKind::{
            ChangeSource, InvalidPath, Io, MalformedDeclaration, SubViewUnavailable,
        };
        match e.kind {
            InvalidPath => ApiError::InvalidChange(e.msg),
            Io => ApiError::Io(e.msg),
            MalformedDeclaration => ApiError::MalformedDeclaration(e.msg),
            SubViewUnavailable => ApiError::SubViewUnavailable(e.msg),
            ChangeSource => ApiError::ChangeSource(e.msg),
        }
    }
}

// Stable identifiers; SCREAMING_SNAKE_CASE matches the emitted `error_id` strings.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    /// Not a failure of the check itself: some file still needs approval.
    E_APPROVAL_REQUIRED,
    E_INVALID_PATH,
    E_MALFORMED_OWNERS,
    E_SUBVIEW,
    E_IO,
    E_CHANGE_SOURCE,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_APPROVAL_REQUIRED => "E_APPROVAL_REQUIRED",
        ErrorId::E_INVALID_PATH => "E_INVALID_PATH",
        ErrorId::E_MALFORMED_OWNERS => "E_MALFORMED_OWNERS",
        ErrorId::E_SUBVIEW => "E_SUBVIEW",
        ErrorId::E_IO => "E_IO",
        ErrorId::E_CHANGE_SOURCE => "E_CHANGE_SOURCE",
    }
}

/// Process exit code for an outcome. Success is 0; approval-required is
/// always distinct from infrastructure failures.
#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_APPROVAL_REQUIRED => 1,
        ErrorId::E_INVALID_PATH => 2,
        ErrorId::E_MALFORMED_OWNERS => 3,
        ErrorId::E_SUBVIEW => 4,
        ErrorId::E_IO => 5,
        ErrorId::E_CHANGE_SOURCE => 6,
    }
}

#[must_use]
pub fn exit_code_for_id_str(s: &str) -> Option<i32> {
    match s {
        "E_APPROVAL_REQUIRED" => Some(1),
        "E_INVALID_PATH" => Some(2),
        "E_MALFORMED_OWNERS" => Some(3),
        "E_SUBVIEW" => Some(4),
        "E_IO" => Some(5),
        "E_CHANGE_SOURCE" => Some(6),
        _ => None,
    }
}
