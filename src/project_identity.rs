//! Central project identity contract.
//!
//! Single source of truth for the binary name, banner and the Revel
//! application layout the commands work against.

pub const DISPLAY_NAME: &str = "revel_mgo";
pub const BINARY_NAME: &str = "revel_mgo";
pub const REPO_URL: &str = "https://github.com/dr013/revel_mgo";

/// Relative to the application root.
pub const APP_CONF: &str = "conf/app.conf";
pub const MODELS_DIR: &str = "app/models";
pub const SESSION_FILE: &str = "mgo.go";

pub const DEFAULT_MGO_HOST: &str = "localhost";

/// Width of the name column in the command table.
pub const NAME_COLUMN: usize = 11;

pub fn banner() -> String {
    format!("~\n~ {}! {}\n~\n", DISPLAY_NAME, REPO_URL)
}

/// `revel_mgo <rest>`, for hints in user-facing messages.
pub fn cli_with(rest: &str) -> String {
    format!("{} {}", BINARY_NAME, rest)
}
