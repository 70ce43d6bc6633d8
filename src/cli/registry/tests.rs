use super::*;
use crate::cli::context::Context;
use crate::error::CommandResult;

struct Named {
    usage: &'static str,
    short: &'static str,
}

impl CliCommand for Named {
    fn usage_line(&self) -> &'static str {
        self.usage
    }
    fn short_help(&self) -> &'static str {
        self.short
    }
    fn long_help(&self) -> &'static str {
        ""
    }
    fn flags(&self) -> clap::Command {
        clap::Command::new("named")
    }
    fn run(&self, _: &Descriptor, _: &mut Context<'_>, _: &[String]) -> CommandResult {
        Ok(())
    }
}

fn named(usage: &'static str, short: &'static str) -> Box<dyn CliCommand> {
    Box::new(Named { usage, short })
}

#[test]
fn iteration_follows_registration_order() {
    let reg = Registry::new(vec![
        named("zeta", "z"),
        named("alpha [x]", "a"),
        named("mid", "m"),
    ]);
    let names: Vec<_> = reg.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert_eq!(reg.len(), 3);
    assert!(!reg.is_empty());
}

#[test]
fn find_matches_on_derived_name_only() {
    let reg = Registry::new(vec![named("setup [app_path]", "s")]);
    assert!(reg.find("setup").is_some());
    assert!(reg.find("setup [app_path]").is_none());
    assert!(reg.find("set").is_none());
}

#[test]
fn first_registrant_wins_on_duplicates() {
    let reg = Registry::new(vec![
        named("gen one", "first"),
        named("gen two", "second"),
    ]);
    assert_eq!(reg.find("gen").unwrap().short_help(), "first");
    assert_eq!(reg.shadowed(), vec!["gen"]);
}

#[test]
fn no_shadowing_in_unique_registry() {
    let reg = Registry::new(vec![named("a", ""), named("b", "")]);
    assert!(reg.shadowed().is_empty());
}

#[test]
fn empty_registry_finds_nothing() {
    let reg = Registry::new(Vec::new());
    assert!(reg.is_empty());
    assert!(reg.find("anything").is_none());
}
