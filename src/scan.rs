/// Option scanning over the raw argument stream.
///
/// Tokens are consumed left to right: `--xxx` is one long option, `-abc`
/// expands to one short option per character, everything else is an operand
/// and keeps its original order. Options are validated against the reserved
/// names plus the allow-list supplied at registration; an unknown name stops
/// the scan. Option extraction always runs before command resolution.
use std::collections::BTreeSet;

use crate::errors::DispatchError;

/// The set of option names seen on the command line.
///
/// Presence is the only state an option carries; there are no option values.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    names: BTreeSet<String>,
}

impl OptionSet {
    /// Whether `name` (without dashes) was set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over set option names in sorted order.
    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    fn insert(&mut self, name: &str) {
        self.names.insert(name.to_owned());
    }
}

/// Result of partitioning the argument stream.
#[derive(Debug)]
pub(crate) struct Scanned {
    pub options: OptionSet,
    /// Command name (first element, when present) followed by positionals.
    pub operands: Vec<String>,
}

/// Partition `args` into options and operands.
///
/// # Errors
///
/// Returns [`DispatchError::UnknownOption`] for any option name not in
/// `allowed`. The error carries the dashed form the user typed.
pub(crate) fn scan(args: &[String], allowed: &[&str]) -> Result<Scanned, DispatchError> {
    let mut options = OptionSet::default();
    let mut operands = Vec::with_capacity(args.len());

    for arg in args {
        if let Some(long) = arg.strip_prefix("--") {
            if !allowed.contains(&long) {
                return Err(DispatchError::UnknownOption {
                    name: format!("--{long}"),
                });
            }
            options.insert(long);
        } else if let Some(shorts) = arg.strip_prefix('-') {
            // Grouped short options: -abc sets a, b and c.
            for c in shorts.chars() {
                let name = c.to_string();
                if !allowed.contains(&name.as_str()) {
                    return Err(DispatchError::UnknownOption { name: format!("-{c}") });
                }
                options.insert(&name);
            }
        } else {
            operands.push(arg.clone());
        }
    }

    Ok(Scanned { options, operands })
}
