/// The statically-declared command table.
///
/// Instead of discovering callable operations by reflection at dispatch time,
/// the embedding application registers each one up front: a name, its
/// parameter declarations, documentation text and a handler closure bound to
/// the subject. Only registered commands exist; asking for anything else
/// produces the same "not a recognized command" failure, so callers cannot
/// probe for hidden operations.
use std::fmt;

use serde::Serialize;

use crate::errors::CommandFailure;
use crate::scan::OptionSet;
use crate::value::Value;

/// Declared semantic type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Raw string, no decoding.
    Str,
    /// Strict integer literal.
    Int,
    /// Numeric literal; integer literals widen.
    Float,
    /// Literal `true` / `false` only.
    Bool,
    /// JSON array or object literal.
    Object,
    /// No declaration; the raw string is passed through.
    Untyped,
}

impl ParamType {
    /// The name used in messages and parameter help.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Object => "object",
            Self::Untyped => "untyped",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One declared parameter of a command.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Parameter name, shown in help and in coercion failures.
    pub name: String,
    /// Declared type driving coercion.
    pub ty: ParamType,
    /// Whether the invocation must supply this parameter.
    pub required: bool,
}

/// What a successful handler hands back for rendering.
#[derive(Debug)]
pub enum Reply {
    /// Nothing to show; a bare newline is still printed.
    None,
    /// Printed verbatim.
    Text(String),
    /// Pretty-printed as JSON.
    Json(serde_json::Value),
}

impl Reply {
    /// Build a structured reply from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an internal failure when the value cannot be represented as
    /// JSON (e.g. a map with non-string keys).
    pub fn json<T: Serialize>(value: &T) -> Result<Self, CommandFailure> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| CommandFailure::Internal(e.into()))
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// The coerced arguments and option flags a handler receives.
#[derive(Debug)]
pub struct Args {
    positionals: Vec<Value>,
    options: OptionSet,
}

impl Args {
    pub(crate) fn new(positionals: Vec<Value>, options: OptionSet) -> Self {
        Self {
            positionals,
            options,
        }
    }

    /// All positionals in invocation order.
    #[must_use]
    pub fn positionals(&self) -> &[Value] {
        &self.positionals
    }

    /// The positional at `index`, when supplied.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positionals.get(index)
    }

    /// Number of positionals supplied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positionals.len()
    }

    /// Whether no positionals were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positionals.is_empty()
    }

    /// Whether the named option flag was set on the command line.
    #[must_use]
    pub fn option(&self, name: &str) -> bool {
        self.options.is_set(name)
    }

    /// The full option set.
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }
}

/// The handler signature: subject plus coerced arguments in, reply out.
pub type Handler<S> = Box<dyn Fn(&mut S, &Args) -> Result<Reply, CommandFailure>>;

/// One registered command: the unit of dispatch.
pub struct CommandSpec<S> {
    name: String,
    doc: Option<String>,
    params: Vec<ParamSpec>,
    variadic: bool,
    handler: Handler<S>,
}

impl<S> CommandSpec<S> {
    /// Register a command under `name` with its handler.
    #[must_use]
    pub fn new<F>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut S, &Args) -> Result<Reply, CommandFailure> + 'static,
    {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            variadic: false,
            handler: Box::new(handler),
        }
    }

    /// Attach documentation text, shown by `--help`.
    #[must_use]
    pub fn doc(mut self, text: impl Into<String>) -> Self {
        self.doc = Some(text.into());
        self
    }

    /// Declare a required parameter. Order of calls is binding order.
    ///
    /// # Panics
    ///
    /// Panics if called after [`CommandSpec::variadic`]; the variadic slot
    /// must be last.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        assert!(!self.variadic, "parameters cannot follow the variadic slot");
        self.params.push(ParamSpec {
            name: name.into(),
            ty,
            required: true,
        });
        self
    }

    /// Declare an optional parameter.
    ///
    /// # Panics
    ///
    /// Panics if called after [`CommandSpec::variadic`].
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        assert!(!self.variadic, "parameters cannot follow the variadic slot");
        self.params.push(ParamSpec {
            name: name.into(),
            ty,
            required: false,
        });
        self
    }

    /// Declare a trailing variadic slot: zero or more extra positionals, all
    /// coerced to the same element type.
    #[must_use]
    pub fn variadic(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            ty,
            required: false,
        });
        self.variadic = true;
        self
    }

    /// The registered command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The documentation text, when registered.
    #[must_use]
    pub fn doc_text(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Declared parameters in binding order.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Whether the last declared parameter repeats.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Number of parameters an invocation must supply.
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| p.required).count()
    }

    /// The parameter a positional at `index` binds to. Past the declared
    /// list, everything binds to the variadic slot.
    pub(crate) fn param_for(&self, index: usize) -> &ParamSpec {
        if index < self.params.len() {
            &self.params[index]
        } else {
            debug_assert!(self.variadic);
            self.params
                .last()
                .expect("variadic command has at least one parameter")
        }
    }

    pub(crate) fn invoke(&self, subject: &mut S, args: &Args) -> Result<Reply, CommandFailure> {
        (self.handler)(subject, args)
    }
}

impl<S> fmt::Debug for CommandSpec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("variadic", &self.variadic)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut (), _: &Args) -> Result<Reply, CommandFailure> {
        Ok(Reply::None)
    }

    #[test]
    fn test_required_count_ignores_optionals() {
        let spec = CommandSpec::new("cmd", noop)
            .param("a", ParamType::Untyped)
            .param("b", ParamType::Int)
            .optional("c", ParamType::Untyped);
        assert_eq!(spec.required_count(), 2);
        assert_eq!(spec.params().len(), 3);
        assert!(!spec.is_variadic());
    }

    #[test]
    fn test_variadic_slot_binds_overflow() {
        let spec = CommandSpec::new("cmd", noop)
            .param("first", ParamType::Str)
            .variadic("rest", ParamType::Int);
        assert!(spec.is_variadic());
        assert_eq!(spec.param_for(0).name, "first");
        assert_eq!(spec.param_for(1).name, "rest");
        assert_eq!(spec.param_for(7).name, "rest");
        assert_eq!(spec.required_count(), 1);
    }

    #[test]
    #[should_panic(expected = "variadic slot")]
    fn test_params_after_variadic_panic() {
        let _ = CommandSpec::new("cmd", noop)
            .variadic("rest", ParamType::Int)
            .param("late", ParamType::Str);
    }

    #[test]
    fn test_reply_json_from_serialize() {
        #[derive(Serialize)]
        struct Out {
            total: u32,
        }
        let reply = Reply::json(&Out { total: 3 }).unwrap();
        assert!(matches!(reply, Reply::Json(v) if v["total"] == 3));
    }
}
