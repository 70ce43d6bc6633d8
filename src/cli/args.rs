//! Process-wide flags.
//!
//! Only `-h/--help` is defined. Everything from the first positional
//! argument on belongs to the subcommand and is passed through untouched.

use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub help: bool,
    pub args: Vec<String>,
}

fn global_flags() -> Command {
    Command::new(crate::project_identity::BINARY_NAME)
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("args")
                .num_args(0..)
                .trailing_var_arg(true)
                .value_parser(clap::value_parser!(String)),
        )
}

/// Parse the process arguments, program name excluded.
pub fn parse<I, T>(argv: I) -> Result<GlobalArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = global_flags().try_get_matches_from(argv)?;
    Ok(GlobalArgs {
        help: matches.get_flag("help"),
        args: matches
            .get_many::<String>("args")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
    })
}
