//! Command dispatcher
//!
//! Routes the argument vector to a registered command and turns the result
//! into an exit status. Handlers signal expected failures by returning
//! [`Reported`](crate::error::Reported); a panic is a bug and is left to
//! unwind past this module untouched.

use crate::cli::args;
use crate::cli::context::Context;
use crate::cli::help;
use crate::cli::registry::Registry;
use crate::fatal;
use crate::project_identity;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

/// Terminal states of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Command ran to completion, or help was shown.
    Success,
    /// Flag parse failure or a reported fatal error.
    Failure,
    /// Malformed help request.
    Usage,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
            Exit::Usage => 2,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Dispatch the process arguments (program name excluded).
pub fn dispatch<I, T>(registry: &Registry, argv: I, ctx: &mut Context<'_>) -> Exit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let global = match args::parse(argv) {
        Ok(global) if !global.help => global,
        _ => return usage(registry, ctx, Exit::Failure),
    };
    let args = global.args;

    match args.first().map(String::as_str) {
        None => usage(registry, ctx, Exit::Success),
        Some("help") => help_path(registry, ctx, &args[1..]),
        Some(name) => guarded(registry, ctx, name, &args[1..]),
    }
}

fn help_path(registry: &Registry, ctx: &mut Context<'_>, rest: &[String]) -> Exit {
    let Some(target) = rest.first() else {
        return usage(registry, ctx, Exit::Success);
    };
    match registry.find(target) {
        Some(cmd) => match help::render_command_help(ctx.out, cmd) {
            Ok(()) => Exit::Success,
            Err(e) => write_failed(ctx, e),
        },
        None => usage(registry, ctx, Exit::Usage),
    }
}

/// Recovery boundary: the error signal becomes exit 1, nothing else is caught.
fn guarded(registry: &Registry, ctx: &mut Context<'_>, name: &str, rest: &[String]) -> Exit {
    let result = match registry.find(name) {
        Some(cmd) => cmd.invoke(ctx, rest),
        None => Err(fatal!(
            ctx,
            "unknown command {:?}\nRun '{}' for usage.\n",
            name,
            project_identity::cli_with("help")
        )),
    };
    match result {
        Ok(()) => Exit::Success,
        Err(_) => Exit::Failure,
    }
}

/// Full usage goes to the diagnostic stream.
fn usage(registry: &Registry, ctx: &mut Context<'_>, exit: Exit) -> Exit {
    match help::render_usage(ctx.err, registry) {
        Ok(()) => exit,
        Err(e) => write_failed(ctx, e),
    }
}

fn write_failed(ctx: &mut Context<'_>, e: io::Error) -> Exit {
    let _ = fatal!(ctx, "{}: failed to write output: {}", project_identity::BINARY_NAME, e);
    Exit::Failure
}
