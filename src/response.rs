/// Deliberate, user-facing signals raised by command handlers.
///
/// A `UserResponse` is how subject code talks to the terminal on its own
/// terms: the message, icon, colour and process exit code are all chosen by
/// the raiser. This is distinct from an internal failure, which the
/// dispatcher suppresses behind a generic message unless debug mode is on.
use std::fmt;

use owo_colors::OwoColorize;

/// Severity of a [`UserResponse`], controlling icon and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Plain message, no icon, no colour.
    Info,
    /// ⚠ yellow.
    Warning,
    /// ❌ red.
    Error,
    /// ✔ green. The only kind that may legitimately exit 0.
    Success,
}

/// An intentional response from subject code.
#[derive(Debug, Clone)]
pub struct UserResponse {
    kind: ResponseKind,
    message: String,
    code: i32,
}

impl UserResponse {
    /// Informational message, default exit code 1.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Info,
            message: message.into(),
            code: 1,
        }
    }

    /// Warning message, default exit code 1.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Warning,
            message: message.into(),
            code: 1,
        }
    }

    /// Error message, default exit code 1.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Error,
            message: message.into(),
            code: 1,
        }
    }

    /// Success message, exit code 0.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Success,
            message: message.into(),
            code: 0,
        }
    }

    /// Override the exit code.
    #[must_use]
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// The kind of this response.
    #[must_use]
    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// The plain message, without icon or colour.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The exit code the process should report, clamped so that only a
    /// success response can exit 0.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.code == 0 && self.kind != ResponseKind::Success {
            return 1;
        }
        self.code
    }

    /// The message decorated with the kind's icon and colour.
    #[must_use]
    pub fn render(&self) -> String {
        match self.kind {
            ResponseKind::Info => self.message.clone(),
            ResponseKind::Warning => format!("⚠ {}", self.message).yellow().to_string(),
            ResponseKind::Error => format!("❌ {}", self.message).red().to_string(),
            ResponseKind::Success => format!("✔ {}", self.message).green().to_string(),
        }
    }
}

impl fmt::Display for UserResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for UserResponse {}
