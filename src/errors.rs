/// The dispatcher's failure taxonomy.
use thiserror::Error;

use crate::command::ParamType;
use crate::response::UserResponse;

/// Everything that can stop an invocation short of a normal reply.
///
/// Usage, arity and coercion failures are produced by the dispatcher itself
/// and are always the user's to fix. `Internal` wraps a failure from the
/// subject handler's own body; `Response` is a deliberate signal from it.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Options were given but no command token followed.
    #[error("No function was specified.")]
    NoCommand,

    /// The command token matched no registered command. Unregistered and
    /// "private" names are indistinguishable by design.
    #[error("'{name}' is not a recognized command.")]
    UnknownCommand {
        /// The token the user typed.
        name: String,
    },

    /// An option name outside the reserved set and the registration
    /// allow-list.
    #[error("{name} is not a valid option.")]
    UnknownOption {
        /// The dashed form as typed, e.g. `--banana` or `-x`.
        name: String,
    },

    /// More positionals than the command accepts (and it is not variadic).
    #[error("Too many arguments! '{name}' can only accept {accepted} and you gave me {given}")]
    TooManyArguments {
        /// The resolved command name.
        name: String,
        /// Number of declared parameters.
        accepted: usize,
        /// Number of positionals supplied.
        given: usize,
    },

    /// Fewer positionals than the command requires.
    #[error("❌ Too few arguments.")]
    TooFewArguments {
        /// The resolved command name.
        name: String,
    },

    /// A positional failed strict literal decoding into its declared type.
    #[error("❌ Argument '{param}' must be of the type {expected}, '{given}' given.")]
    InvalidArgument {
        /// The parameter the token was bound to.
        param: String,
        /// The declared type.
        expected: ParamType,
        /// The raw token.
        given: String,
    },

    /// The handler itself failed unexpectedly. The message shown to the user
    /// is generic; the chain is printed only in debug mode.
    #[error("Failed to execute '{name}', the program crashed. Please contact the developers if this keeps happening.")]
    Internal {
        /// The resolved command name.
        name: String,
        /// The handler's own error.
        #[source]
        source: anyhow::Error,
    },

    /// A deliberate signal from subject code.
    #[error("{0}")]
    Response(UserResponse),
}

impl DispatchError {
    /// The process exit code for this failure. A `Response` carries its own
    /// code (clamped so only success responses exit 0); everything else is 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Response(response) => response.exit_code(),
            _ => 1,
        }
    }
}

/// What a command handler can fail with.
///
/// Coercion happens before the handler runs, so by the time a handler
/// returns an error there is no blame to apportion: a `Response` is an
/// intentional message, anything else is the subject's own failure.
#[derive(Debug)]
pub enum CommandFailure {
    /// Deliberate, user-facing signal. Rendered with icon and colour; the
    /// exit code belongs to the raiser.
    Response(UserResponse),
    /// Unexpected failure inside the subject's logic. Hidden behind a
    /// generic message unless debug mode is enabled.
    Internal(anyhow::Error),
}

impl From<UserResponse> for CommandFailure {
    fn from(response: UserResponse) -> Self {
        Self::Response(response)
    }
}

impl From<anyhow::Error> for CommandFailure {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}
