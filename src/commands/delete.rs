use crate::cli::{CliCommand, Context, Descriptor};
use crate::error::{CommandResult, Result};
use crate::fatal;
use crate::project_identity;
use crate::utils::naming;
use crate::utils::paths::{self, AppLayout};
use clap::Arg;
use std::path::PathBuf;

#[derive(Debug)]
pub struct DeleteOptions {
    pub app: PathBuf,
    pub name: String,
}

pub struct Delete;

impl CliCommand for Delete {
    fn usage_line(&self) -> &'static str {
        "delete model <Name>"
    }

    fn short_help(&self) -> &'static str {
        "delete a generated model"
    }

    fn long_help(&self) -> &'static str {
        "
Delete removes app/models/<name>.go for a model created by generate.
The MongoDB collection itself is left untouched.

Flags:
    --app <path>    Revel application root (default .)"
    }

    fn flags(&self) -> clap::Command {
        clap::Command::new("delete")
            .arg(Arg::new("app").long("app").value_name("PATH"))
            .arg(Arg::new("kind"))
            .arg(Arg::new("name"))
    }

    fn run(&self, cmd: &Descriptor, ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
        let matches = cmd.parse_flags(ctx, args)?;
        let (Some(kind), Some(name)) = (
            matches.get_one::<String>("kind"),
            matches.get_one::<String>("name"),
        ) else {
            return Err(fatal!(
                ctx,
                "delete needs a kind and a name\nRun '{}' for usage.",
                project_identity::cli_with("help delete")
            ));
        };
        if kind != "model" {
            return Err(fatal!(ctx, "cannot delete {:?}: only \"model\" is supported", kind));
        }

        let options = DeleteOptions {
            app: matches
                .get_one::<String>("app")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            name: name.clone(),
        };
        run(options, ctx).map_err(|e| ctx.report(&e))
    }
}

pub fn run(options: DeleteOptions, ctx: &mut Context<'_>) -> Result<()> {
    let name = naming::model_name(&options.name)?;
    let app = AppLayout::open(&options.app)?;
    let file = app.model_file(&naming::snake(&name))?;
    paths::remove_file(&file)?;
    ctx.success(&format!("Deleted model {} ({})", name, file.display()));
    Ok(())
}
