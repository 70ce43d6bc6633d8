//! Ordered, read-only set of registered commands.
//!
//! Built once at startup and handed to the dispatcher. Registration order is
//! both the lookup order and the display order of the help table. Duplicate
//! names are not rejected: lookup is first-match, so a later duplicate is
//! simply unreachable (see [`Registry::shadowed`]).

use crate::cli::command::{CliCommand, Descriptor};

#[derive(Debug)]
pub struct Registry {
    commands: Vec<Descriptor>,
}

impl Registry {
    pub fn new(handlers: Vec<Box<dyn CliCommand>>) -> Self {
        Self {
            commands: handlers.into_iter().map(Descriptor::new).collect(),
        }
    }

    /// First descriptor named `name`, in registration order.
    pub fn find(&self, name: &str) -> Option<&Descriptor> {
        self.commands.iter().find(|d| d.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Names registered more than once; every entry after the first is dead.
    pub fn shadowed(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        let mut dup = Vec::new();
        for d in &self.commands {
            if seen.contains(&d.name()) {
                if !dup.contains(&d.name()) {
                    dup.push(d.name());
                }
            } else {
                seen.push(d.name());
            }
        }
        dup
    }
}

#[cfg(test)]
mod tests;
