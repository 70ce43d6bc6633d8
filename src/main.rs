use std::process::ExitCode;

fn main() -> ExitCode {
    revel_mgo::run_cli()
}
