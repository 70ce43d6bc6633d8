use atty::Stream;
use colored::Colorize;
use std::io::Write;

/// Decide once, at startup, whether output gets colored.
///
/// Windows consoles and redirected stdout get plain text. `NO_COLOR` and
/// `CLICOLOR_FORCE` are honoured by `colored` itself.
pub fn init_colors() {
    if cfg!(windows) || atty::isnt(Stream::Stdout) {
        colored::control::set_override(false);
    }
}

// Status chatter: a failed write here must not abort the command.

pub fn banner(w: &mut dyn Write, text: &str) {
    let _ = write!(w, "{}", text.blue());
}

pub fn header(w: &mut dyn Write, title: &str) {
    let _ = writeln!(w, "\n{}", title.bold().underline());
}

pub fn success(w: &mut dyn Write, msg: &str) {
    let _ = writeln!(w, "{} {}", "✓".green().bold(), msg);
}

pub fn info(w: &mut dyn Write, msg: &str) {
    let _ = writeln!(w, "{} {}", "ℹ".blue().bold(), msg);
}

pub fn warning(w: &mut dyn Write, msg: &str) {
    let _ = writeln!(w, "{} {}", "⚠".yellow().bold(), msg);
}

pub fn keyval(w: &mut dyn Write, key: &str, val: &str) {
    let _ = writeln!(w, "  {}: {}", key.bold(), val);
}
