use crate::cli::{CliCommand, Context, Descriptor};
use crate::error::{CommandResult, Result};
use crate::fatal;
use crate::project_identity::{self, APP_CONF, DEFAULT_MGO_HOST, MODELS_DIR, SESSION_FILE};
use crate::utils::paths::{self, AppLayout};
use crate::utils::templates;
use chrono::Local;
use clap::{Arg, ArgAction};
use rand::Rng;
use std::path::PathBuf;

#[derive(Debug)]
pub struct SetupOptions {
    pub app: PathBuf,
    pub host: String,
    pub database: Option<String>,
    pub force: bool,
}

pub struct Setup;

impl CliCommand for Setup {
    fn usage_line(&self) -> &'static str {
        "setup [app_path]"
    }

    fn short_help(&self) -> &'static str {
        "add mgo session support to a Revel app"
    }

    fn long_help(&self) -> &'static str {
        "
Setup prepares a Revel application for MongoDB.

It writes app/models/mgo.go, a session helper exposing InitDB() and
Collection(name), and appends mgo.host, mgo.database and a generated
mgo.secret to conf/app.conf.

app_path defaults to the current directory.

Flags:
    --host <host>        MongoDB address (default localhost)
    --database <name>    database name (default: the app directory name)
    --force              overwrite an existing app/models/mgo.go

Register models.InitDB with revel.OnAppStart in app/init.go afterwards."
    }

    fn flags(&self) -> clap::Command {
        clap::Command::new("setup")
            .arg(Arg::new("host").long("host").value_name("HOST"))
            .arg(Arg::new("database").long("database").value_name("NAME"))
            .arg(Arg::new("force").long("force").action(ArgAction::SetTrue))
            .arg(Arg::new("app_path").num_args(0..))
    }

    fn run(&self, cmd: &Descriptor, ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
        let matches = cmd.parse_flags(ctx, args)?;
        let positional: Vec<&String> = matches
            .get_many::<String>("app_path")
            .map(|v| v.collect())
            .unwrap_or_default();
        if positional.len() > 1 {
            return Err(fatal!(
                ctx,
                "setup takes at most one app path, got {}\nRun '{}' for usage.",
                positional.len(),
                project_identity::cli_with("help setup")
            ));
        }

        let options = SetupOptions {
            app: positional
                .first()
                .map(|p| PathBuf::from(p.as_str()))
                .unwrap_or_else(|| PathBuf::from(".")),
            host: matches
                .get_one::<String>("host")
                .cloned()
                .unwrap_or_else(|| DEFAULT_MGO_HOST.to_string()),
            database: matches.get_one::<String>("database").cloned(),
            force: matches.get_flag("force"),
        };
        run(options, ctx).map_err(|e| ctx.report(&e))
    }
}

pub fn run(options: SetupOptions, ctx: &mut Context<'_>) -> Result<()> {
    let app = AppLayout::open(&options.app)?;
    ctx.header("Setting up mgo");

    if paths::ensure_dir(&app.models_dir())? {
        ctx.success(&format!("Created {}", MODELS_DIR));
    }

    let date = Local::now().format("%Y-%m-%d").to_string();
    let session = app.session_file();
    if session.exists() && !options.force {
        ctx.warning(&format!(
            "{}/{} already exists, leaving it alone (use --force to overwrite)",
            MODELS_DIR, SESSION_FILE
        ));
    } else {
        paths::write_file(&session, &templates::session_helper(&date))?;
        ctx.success(&format!("Wrote {}/{}", MODELS_DIR, SESSION_FILE));
    }

    let conf_path = app.conf_file();
    let conf = paths::read_file(&conf_path)?;
    if conf.lines().any(|l| l.trim_start().starts_with(templates::CONF_MARKER)) {
        ctx.info(&format!("{} already has mgo settings", APP_CONF));
    } else {
        let database = options.database.unwrap_or_else(|| app.app_name());
        let secret = secret(ctx);
        let mut updated = conf;
        if !updated.is_empty() && !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push_str(&templates::conf_block(&options.host, &database, &secret));
        paths::write_file(&conf_path, &updated)?;
        ctx.success(&format!("Added mgo settings to {}", APP_CONF));
        ctx.keyval("mgo.host", &options.host);
        ctx.keyval("mgo.database", &database);
    }

    ctx.info("Call models.InitDB from revel.OnAppStart to open the session.");
    Ok(())
}

/// 32 random bytes, hex encoded.
fn secret(ctx: &mut Context<'_>) -> String {
    (0..32)
        .map(|_| format!("{:02x}", ctx.rng.random::<u8>()))
        .collect()
}
