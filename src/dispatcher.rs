/// The dispatcher: one invocation in, one exit code out.
///
/// `Cli` owns the subject, the command table and the per-run configuration,
/// and walks each invocation through a fixed sequence: option scan, command
/// resolution, arity check, type coercion, handler invocation, rendering. No
/// step is revisited; any validation failure renders its message and yields a
/// non-zero exit code without ever reaching the handler.
use std::io::{self, Write};

use crate::coerce::coerce;
use crate::command::{Args, CommandSpec, Reply};
use crate::errors::{CommandFailure, DispatchError};
use crate::help;
use crate::scan::{Scanned, scan};

/// How the `debug` reserved option behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugMode {
    /// `--debug` on the command line enables verbose internal detail.
    #[default]
    Auto,
    /// Debug output is always on; `--debug` stops being a valid option.
    Forced,
    /// Debug output is always off; `--debug` stops being a valid option.
    Disabled,
}

/// A subject value exposed to the terminal through registered commands.
///
/// Build one with the registration methods, then hand it process arguments:
///
/// ```no_run
/// use methodcli::{Cli, CommandSpec, ParamType, Reply};
///
/// let cli = Cli::new(0_i64)
///     .doc("A running total.")
///     .command(
///         CommandSpec::new("add", |total: &mut i64, args| {
///             *total += args.get(0).and_then(|v| v.as_int()).unwrap_or(0);
///             Ok(Reply::Text(total.to_string()))
///         })
///         .doc("Add an amount to the total.")
///         .param("amount", ParamType::Int),
///     );
/// std::process::exit(cli.run());
/// ```
pub struct Cli<S> {
    subject: S,
    doc: Option<String>,
    commands: Vec<CommandSpec<S>>,
    allowed_options: Vec<String>,
    debug_mode: DebugMode,
}

impl<S> Cli<S> {
    /// Wrap `subject` with an empty command table.
    #[must_use]
    pub fn new(subject: S) -> Self {
        Self {
            subject,
            doc: None,
            commands: Vec::new(),
            allowed_options: Vec::new(),
            debug_mode: DebugMode::Auto,
        }
    }

    /// Attach top-level documentation, shown by `--help`.
    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Allow an option name (without dashes) and forward it to handlers.
    ///
    /// Anything outside this list — plus the reserved `help` and `debug` —
    /// is rejected before command resolution.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>) -> Self {
        self.allowed_options.push(name.into());
        self
    }

    /// Force debug output on or off. In either non-auto mode `--debug` is
    /// rejected like any other unknown option.
    #[must_use]
    pub fn debug_mode(mut self, mode: DebugMode) -> Self {
        self.debug_mode = mode;
        self
    }

    /// Register a command.
    #[must_use]
    pub fn command(mut self, spec: CommandSpec<S>) -> Self {
        self.commands.push(spec);
        self
    }

    /// Run against the process arguments, writing to stdout.
    ///
    /// Returns the exit code; the caller decides when to terminate. Error
    /// messages share the same stream as regular output.
    #[must_use]
    pub fn run(mut self) -> i32 {
        let argv: Vec<String> = std::env::args().collect();
        let mut out = io::stdout().lock();
        self.run_with(&argv, &mut out).unwrap_or(1)
    }

    /// Run against an explicit argv (element 0 is the invoked name) and an
    /// explicit output sink.
    ///
    /// # Errors
    ///
    /// Only sink write failures surface as `Err`; every dispatch failure is
    /// rendered and folded into the returned exit code.
    pub fn run_with<W: Write>(&mut self, argv: &[String], out: &mut W) -> io::Result<i32> {
        let program = argv.first().map_or("cli", String::as_str);
        let args = argv.get(1..).unwrap_or_default();

        if args.is_empty() {
            help::usage(out, program, &self.commands)?;
            return Ok(0);
        }
        if args.len() == 1 && args[0] == "--help" {
            help::general(out, program, self.doc.as_deref(), &self.commands)?;
            return Ok(0);
        }

        // Option extraction strictly precedes command resolution.
        let mut allowed: Vec<&str> = vec!["help"];
        if self.debug_mode == DebugMode::Auto {
            allowed.push("debug");
        }
        allowed.extend(self.allowed_options.iter().map(String::as_str));

        let scanned = match scan(args, &allowed) {
            Ok(scanned) => scanned,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(err.exit_code());
            }
        };

        let debug = match self.debug_mode {
            DebugMode::Forced => true,
            DebugMode::Disabled => false,
            DebugMode::Auto => scanned.options.is_set("debug"),
        };

        let Some(name) = scanned.operands.first() else {
            writeln!(out, "{}", DispatchError::NoCommand)?;
            help::list_commands(out, &self.commands)?;
            return Ok(1);
        };

        // Case-insensitive resolution over the registered table.
        let Some(index) = self
            .commands
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))
        else {
            let err = DispatchError::UnknownCommand { name: name.clone() };
            writeln!(out, "{err}")?;
            help::list_commands(out, &self.commands)?;
            return Ok(err.exit_code());
        };
        // Help short-circuits before arity and type checks.
        if scanned.options.is_set("help") {
            help::command(out, &self.commands[index])?;
            return Ok(0);
        }

        self.execute(index, &scanned, debug, out)
    }

    /// Arity check, coercion, invocation and rendering for a resolved
    /// command. Runs after the help short-circuit; never revisited.
    fn execute<W: Write>(
        &mut self,
        index: usize,
        scanned: &Scanned,
        debug: bool,
        out: &mut W,
    ) -> io::Result<i32> {
        let command = &self.commands[index];
        let positionals = &scanned.operands[1..];

        if !command.is_variadic() && positionals.len() > command.params().len() {
            let err = DispatchError::TooManyArguments {
                name: command.name().to_owned(),
                accepted: command.params().len(),
                given: positionals.len(),
            };
            writeln!(out, "{err}")?;
            if debug {
                writeln!(
                    out,
                    "[debug] Declare a variadic slot if '{}' should accept extra arguments.",
                    command.name()
                )?;
            }
            return Ok(err.exit_code());
        }

        if positionals.len() < command.required_count() {
            let err = DispatchError::TooFewArguments {
                name: command.name().to_owned(),
            };
            writeln!(out, "{err}")?;
            help::command(out, command)?;
            return Ok(err.exit_code());
        }

        let mut values = Vec::with_capacity(positionals.len());
        for (index, raw) in positionals.iter().enumerate() {
            match coerce(raw, command.param_for(index)) {
                Ok(value) => values.push(value),
                Err(err) => {
                    writeln!(out, "{err}")?;
                    help::command(out, command)?;
                    return Ok(err.exit_code());
                }
            }
        }

        let args = Args::new(values, scanned.options.clone());
        match command.invoke(&mut self.subject, &args) {
            Ok(reply) => {
                render(out, &reply)?;
                Ok(0)
            }
            Err(CommandFailure::Response(response)) => {
                writeln!(out, "{}", response.render())?;
                Ok(DispatchError::Response(response).exit_code())
            }
            Err(CommandFailure::Internal(source)) => {
                let err = DispatchError::Internal {
                    name: command.name().to_owned(),
                    source,
                };
                writeln!(out, "{err}")?;
                if debug {
                    if let DispatchError::Internal { source, .. } = &err {
                        writeln!(out, "[debug] {source:?}")?;
                    }
                }
                Ok(err.exit_code())
            }
        }
    }
}

/// Render a successful reply. Output always ends with exactly one newline.
fn render<W: Write>(out: &mut W, reply: &Reply) -> io::Result<()> {
    match reply {
        Reply::None => writeln!(out),
        Reply::Text(text) => writeln!(out, "{}", text.trim_end_matches('\n')),
        Reply::Json(value) => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_default();
            writeln!(out, "{pretty}")
        }
    }
}
