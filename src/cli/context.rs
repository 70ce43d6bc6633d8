//! Per-invocation run context handed to every command.

use crate::error::{Reported, ScaffoldError};
use crate::ui;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt;
use std::io::Write;

/// Write a message to the diagnostic stream and yield [`Reported`].
///
/// ```ignore
/// return Err(fatal!(ctx, "unknown generator {:?}", kind));
/// ```
#[macro_export]
macro_rules! fatal {
    ($ctx:expr, $($arg:tt)*) => {
        $ctx.fatal(::std::format_args!($($arg)*))
    };
}

/// Output sinks plus the process-wide RNG.
///
/// The sinks are trait objects so the dispatcher and the commands can be
/// driven against in-memory buffers.
pub struct Context<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub rng: SmallRng,
}

impl<'a> Context<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write, rng: SmallRng) -> Self {
        Self { out, err, rng }
    }

    /// Context with a fixed seed, for callers that don't care about entropy.
    pub fn seeded(out: &'a mut dyn Write, err: &'a mut dyn Write, seed: u64) -> Self {
        Self::new(out, err, SmallRng::seed_from_u64(seed))
    }

    /// Report-and-abort: the only sanctioned way to signal a fatal condition.
    ///
    /// The message always ends with a newline so the user's prompt starts on
    /// a fresh line.
    pub fn fatal(&mut self, args: fmt::Arguments<'_>) -> Reported {
        let mut msg = args.to_string();
        if !msg.ends_with('\n') {
            msg.push('\n');
        }
        // A broken stderr leaves nowhere to report to; the exit code still carries it.
        let _ = self.err.write_all(msg.as_bytes());
        let _ = self.err.flush();
        Reported
    }

    /// Report a lower-layer error at the command boundary.
    pub fn report(&mut self, err: &ScaffoldError) -> Reported {
        self.fatal(format_args!("{}", err))
    }

    pub fn header(&mut self, title: &str) {
        ui::header(self.out, title);
    }

    pub fn success(&mut self, msg: &str) {
        ui::success(self.out, msg);
    }

    pub fn info(&mut self, msg: &str) {
        ui::info(self.out, msg);
    }

    pub fn warning(&mut self, msg: &str) {
        ui::warning(self.err, msg);
    }

    pub fn keyval(&mut self, key: &str, val: &str) {
        ui::keyval(self.out, key, val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_appends_missing_newline() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = Context::seeded(&mut out, &mut err, 0);
        let signal = fatal!(ctx, "boom {}", 42);
        assert_eq!(signal, Reported);
        drop(ctx);
        assert_eq!(String::from_utf8(err).unwrap(), "boom 42\n");
        assert!(out.is_empty());
    }

    #[test]
    fn fatal_keeps_existing_newline() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = Context::seeded(&mut out, &mut err, 0);
        let _ = fatal!(ctx, "line one\nline two\n");
        drop(ctx);
        assert_eq!(String::from_utf8(err).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn report_uses_error_display() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let mut ctx = Context::seeded(&mut out, &mut err, 0);
        let _ = ctx.report(&ScaffoldError::InvalidField("x".into()));
        drop(ctx);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "invalid field 'x': expected name:type\n"
        );
    }
}
