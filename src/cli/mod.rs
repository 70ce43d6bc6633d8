pub mod args;
pub mod command;
pub mod context;
pub mod dispatcher;
pub mod help;
pub mod registry;

pub use command::{CliCommand, Descriptor};
pub use context::Context;
pub use dispatcher::{Exit, dispatch};
pub use registry::Registry;
