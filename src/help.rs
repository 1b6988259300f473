/// Usage and help rendering.
use std::io::{self, Write};

use comfy_table::{Table, presets::NOTHING};

use crate::command::CommandSpec;

/// Print the usage line, the command list and the `--help` hint.
pub(crate) fn usage<W: Write, S>(
    out: &mut W,
    program: &str,
    commands: &[CommandSpec<S>],
) -> io::Result<()> {
    writeln!(out, "usage: {program} [function] [-?][operands...]")?;
    list_commands(out, commands)?;
    writeln!(
        out,
        "Use --help for more information or [function] --help for more specific help."
    )
}

/// Print the subject's documentation (or a placeholder) followed by usage.
pub(crate) fn general<W: Write, S>(
    out: &mut W,
    program: &str,
    doc: Option<&str>,
    commands: &[CommandSpec<S>],
) -> io::Result<()> {
    writeln!(out, "{}", doc.unwrap_or("No documentation found."))?;
    usage(out, program, commands)
}

/// Print the `Commands available:` listing.
pub(crate) fn list_commands<W: Write, S>(
    out: &mut W,
    commands: &[CommandSpec<S>],
) -> io::Result<()> {
    writeln!(out, "Commands available:")?;
    for command in commands {
        writeln!(out, "    - {}", command.name())?;
    }
    Ok(())
}

/// Print one command's documentation and parameter table.
pub(crate) fn command<W: Write, S>(out: &mut W, spec: &CommandSpec<S>) -> io::Result<()> {
    writeln!(out, "{}", spec.doc_text().unwrap_or("No documentation found."))?;

    if spec.params().is_empty() {
        return writeln!(out, "'{}' requires no parameters.", spec.name());
    }

    writeln!(out, "'{}' has the following parameters:", spec.name())?;
    let mut table = Table::new();
    table.load_preset(NOTHING);
    let last = spec.params().len() - 1;
    for (i, param) in spec.params().iter().enumerate() {
        let name = if spec.is_variadic() && i == last {
            format!("{}...", param.name)
        } else {
            param.name.clone()
        };
        table.add_row([
            name,
            param.ty.to_string(),
            if param.required { "required" } else { "optional" }.to_owned(),
        ]);
    }
    writeln!(out, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Args, ParamType, Reply};
    use crate::errors::CommandFailure;

    fn noop(_: &mut (), _: &Args) -> Result<Reply, CommandFailure> {
        Ok(Reply::None)
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_usage_lists_commands_and_hint() {
        let commands = vec![
            CommandSpec::new("one", noop),
            CommandSpec::new("two", noop),
        ];
        let text = render(|out| usage(out, "prog", &commands));
        assert!(text.starts_with("usage: prog [function] [-?][operands...]\n"));
        assert!(text.contains("Commands available:\n    - one\n    - two\n"));
        assert!(text.contains("--help"));
    }

    #[test]
    fn test_general_falls_back_to_placeholder() {
        let commands: Vec<CommandSpec<()>> = vec![CommandSpec::new("one", noop)];
        let text = render(|out| general(out, "prog", None, &commands));
        assert!(text.starts_with("No documentation found.\n"));
        let text = render(|out| general(out, "prog", Some("Does things."), &commands));
        assert!(text.starts_with("Does things.\n"));
    }

    #[test]
    fn test_command_help_lists_parameters() {
        let spec = CommandSpec::new("requiresTwo", noop)
            .doc("Needs two values.")
            .param("required", ParamType::Untyped)
            .optional("requiredAlso", ParamType::Int);
        let text = render(|out| command(out, &spec));
        assert!(text.starts_with("Needs two values.\n"));
        assert!(text.contains("'requiresTwo' has the following parameters:"));
        assert!(text.contains("required"));
        assert!(text.contains("requiredAlso"));
        assert!(text.contains("int"));
        assert!(text.contains("optional"));
    }

    #[test]
    fn test_command_help_without_parameters() {
        let spec: CommandSpec<()> = CommandSpec::new("simple", noop);
        let text = render(|out| command(out, &spec));
        assert!(text.contains("No documentation found."));
        assert!(text.contains("'simple' requires no parameters."));
    }

    #[test]
    fn test_variadic_slot_marked_with_ellipsis() {
        let spec: CommandSpec<()> =
            CommandSpec::new("sum", noop).variadic("values", ParamType::Int);
        let text = render(|out| command(out, &spec));
        assert!(text.contains("values..."));
    }
}
