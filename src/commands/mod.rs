//! Registered subcommands.

pub mod delete;
pub mod generate;
pub mod setup;

use crate::cli::{CliCommand, Registry};

/// The shipped command set, in help-table order.
pub fn default_registry() -> Registry {
    let handlers: Vec<Box<dyn CliCommand>> = vec![
        Box::new(setup::Setup),
        Box::new(generate::Generate),
        Box::new(delete::Delete),
    ];
    Registry::new(handlers)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_order_and_names() {
        let reg = default_registry();
        let names: Vec<_> = reg.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["setup", "generate", "delete"]);
        assert!(reg.shadowed().is_empty());
    }

    #[test]
    fn every_command_has_help_text() {
        for cmd in default_registry().iter() {
            assert!(!cmd.short_help().is_empty(), "{}", cmd.name());
            assert!(!cmd.long_help().trim().is_empty(), "{}", cmd.name());
            assert!(cmd.usage_line().starts_with(cmd.name()));
        }
    }
}
