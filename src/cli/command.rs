//! Command capability and the descriptor the registry stores for it.

use crate::cli::context::Context;
use crate::error::{CommandResult, Reported};
use crate::fatal;
use clap::ArgMatches;

/// One registered subcommand.
///
/// Implementors describe themselves through their usage line and help text
/// and declare their own flags; the dispatcher never looks inside either.
pub trait CliCommand {
    /// One-line invocation syntax, e.g. `"setup [app_path]"`.
    fn usage_line(&self) -> &'static str;

    fn short_help(&self) -> &'static str;

    fn long_help(&self) -> &'static str;

    /// This command's flag namespace. Called once, at registration.
    fn flags(&self) -> clap::Command;

    fn run(&self, cmd: &Descriptor, ctx: &mut Context<'_>, args: &[String]) -> CommandResult;
}

/// Lookup key for a usage line: everything before the first space.
pub fn command_name(usage_line: &'static str) -> &'static str {
    match usage_line.find(' ') {
        Some(i) => &usage_line[..i],
        None => usage_line,
    }
}

/// Immutable registry entry: the command plus its flag set, built once.
pub struct Descriptor {
    handler: Box<dyn CliCommand>,
    flags: clap::Command,
}

impl Descriptor {
    pub fn new(handler: Box<dyn CliCommand>) -> Self {
        let flags = handler
            .flags()
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .bin_name(crate::project_identity::cli_with(command_name(handler.usage_line())));
        Self { handler, flags }
    }

    pub fn name(&self) -> &'static str {
        command_name(self.handler.usage_line())
    }

    pub fn usage_line(&self) -> &'static str {
        self.handler.usage_line()
    }

    pub fn short_help(&self) -> &'static str {
        self.handler.short_help()
    }

    pub fn long_help(&self) -> &'static str {
        self.handler.long_help()
    }

    /// Parse `args` against this command's own flags.
    ///
    /// A malformed flag is reported with clap's message and turned into the
    /// error signal.
    pub fn parse_flags(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<ArgMatches, Reported> {
        self.flags
            .clone()
            .try_get_matches_from(args)
            .map_err(|e| fatal!(ctx, "{}", e.render()))
    }

    pub(crate) fn invoke(&self, ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
        self.handler.run(self, ctx, args)
    }
}

impl std::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name())
            .field("usage_line", &self.usage_line())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    struct Probe(&'static str);

    impl CliCommand for Probe {
        fn usage_line(&self) -> &'static str {
            self.0
        }
        fn short_help(&self) -> &'static str {
            "probe"
        }
        fn long_help(&self) -> &'static str {
            "Probe long help."
        }
        fn flags(&self) -> clap::Command {
            clap::Command::new("probe")
                .arg(Arg::new("force").long("force").action(clap::ArgAction::SetTrue))
                .arg(Arg::new("rest").num_args(0..))
        }
        fn run(&self, _: &Descriptor, _: &mut Context<'_>, _: &[String]) -> CommandResult {
            Ok(())
        }
    }

    #[test]
    fn name_is_prefix_before_first_space() {
        assert_eq!(command_name("setup [app_path]"), "setup");
        assert_eq!(command_name("generate model <Name> [field:type...]"), "generate");
    }

    #[test]
    fn name_is_whole_line_without_space() {
        assert_eq!(command_name("version"), "version");
        assert_eq!(command_name(""), "");
    }

    #[test]
    fn descriptor_exposes_handler_text() {
        let d = Descriptor::new(Box::new(Probe("probe <x>")));
        assert_eq!(d.name(), "probe");
        assert_eq!(d.usage_line(), "probe <x>");
        assert_eq!(d.short_help(), "probe");
        assert_eq!(d.long_help(), "Probe long help.");
    }

    #[test]
    fn parse_flags_accepts_declared_flags() {
        let d = Descriptor::new(Box::new(Probe("probe")));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = Context::seeded(&mut out, &mut err, 0);
        let args = vec!["--force".to_string(), "a".to_string()];
        let m = d.parse_flags(&mut ctx, &args).unwrap();
        assert!(m.get_flag("force"));
        assert_eq!(
            m.get_many::<String>("rest").unwrap().collect::<Vec<_>>(),
            vec!["a"]
        );
    }

    #[test]
    fn parse_flags_reports_unknown_flag() {
        let d = Descriptor::new(Box::new(Probe("probe")));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = Context::seeded(&mut out, &mut err, 0);
        let args = vec!["--nope".to_string()];
        assert_eq!(d.parse_flags(&mut ctx, &args).unwrap_err(), Reported);
        drop(ctx);
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("--nope"));
        assert!(err.ends_with('\n'));
    }

    #[test]
    fn flag_sets_are_isolated_per_descriptor() {
        let a = Descriptor::new(Box::new(Probe("a")));
        let b = Descriptor::new(Box::new(Probe("b")));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = Context::seeded(&mut out, &mut err, 0);
        let forced = a.parse_flags(&mut ctx, &["--force".to_string()]).unwrap();
        let plain = b.parse_flags(&mut ctx, &[]).unwrap();
        assert!(forced.get_flag("force"));
        assert!(!plain.get_flag("force"));
    }
}
