#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! methodcli — expose an application's operations as terminal subcommands.
//!
//! Register a subject value and its operations on a [`Cli`], then hand it the
//! process arguments. The dispatcher scans options (`--long`, grouped `-abc`
//! shorts), resolves the first remaining token as a command name
//! (case-insensitive), validates arity, strictly coerces each positional into
//! its parameter's declared type, invokes the handler and renders the reply —
//! or a structured failure with a matching exit code. The reserved `--help`
//! and `--debug` options belong to the dispatcher itself.
//!
//! Handlers signal deliberate outcomes with [`UserResponse`]; anything else
//! they fail with is treated as an internal error and hidden behind a generic
//! message unless debug mode is enabled.

pub mod command;
pub mod dispatcher;
pub mod errors;
pub mod prompt;
pub mod response;
pub mod scan;
pub mod value;

mod coerce;
mod help;

pub use command::{Args, CommandSpec, ParamSpec, ParamType, Reply};
pub use dispatcher::{Cli, DebugMode};
pub use errors::{CommandFailure, DispatchError};
pub use prompt::{confirm, prompt};
pub use response::{ResponseKind, UserResponse};
pub use scan::OptionSet;
pub use value::Value;
