pub mod cli;
pub mod commands;
pub mod error;
pub mod project_identity;
pub mod ui;
pub mod utils;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io;
use std::process::ExitCode;

/// Run revel_mgo CLI entrypoint.
pub fn run_cli() -> ExitCode {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    ui::banner(&mut out, &project_identity::banner());

    // 1. Process-wide RNG, seeded once; the dispatcher itself never draws from it
    let seed = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default() as u64;
    let mut ctx = cli::Context::new(&mut out, &mut err, SmallRng::seed_from_u64(seed));

    // 2. Registry is fixed from here on
    let registry = commands::default_registry();

    cli::dispatch(&registry, std::env::args_os().skip(1), &mut ctx).into()
}
