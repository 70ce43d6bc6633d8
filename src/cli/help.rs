//! Usage and per-command help rendering.

use crate::cli::command::Descriptor;
use crate::cli::registry::Registry;
use crate::project_identity::{BINARY_NAME, NAME_COLUMN};
use std::io::{self, Write};

/// Full command table, one row per command in registration order.
pub fn render_usage(w: &mut dyn Write, registry: &Registry) -> io::Result<()> {
    writeln!(w, "usage: {} command [arguments]", BINARY_NAME)?;
    writeln!(w)?;
    writeln!(w, "The commands are:")?;
    writeln!(w)?;
    for cmd in registry.iter() {
        writeln!(
            w,
            "    {:<width$} {}",
            cmd.name(),
            cmd.short_help(),
            width = NAME_COLUMN
        )?;
    }
    writeln!(w)?;
    writeln!(
        w,
        "Use \"{} help [command]\" for more information.",
        BINARY_NAME
    )
}

/// Usage line followed by the long help, verbatim.
pub fn render_command_help(w: &mut dyn Write, cmd: &Descriptor) -> io::Result<()> {
    writeln!(w, "usage: {} {}", BINARY_NAME, cmd.usage_line())?;
    writeln!(w, "{}", cmd.long_help())
}
