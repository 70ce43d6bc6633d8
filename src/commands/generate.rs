use crate::cli::{CliCommand, Context, Descriptor};
use crate::error::{CommandResult, Result, ScaffoldError};
use crate::fatal;
use crate::project_identity;
use crate::utils::naming;
use crate::utils::paths::{self, AppLayout};
use crate::utils::templates::{self, ModelField};
use chrono::Local;
use clap::{Arg, ArgAction};
use std::path::PathBuf;

/// `field:type` type names and the Go types they map to.
const FIELD_TYPES: &[(&str, &str)] = &[
    ("string", "string"),
    ("int", "int"),
    ("int64", "int64"),
    ("float", "float64"),
    ("bool", "bool"),
    ("time", "time.Time"),
    ("id", "bson.ObjectId"),
];

#[derive(Debug)]
pub struct GenerateOptions {
    pub app: PathBuf,
    pub name: String,
    pub fields: Vec<String>,
    pub force: bool,
}

pub struct Generate;

impl CliCommand for Generate {
    fn usage_line(&self) -> &'static str {
        "generate model <Name> [field:type...]"
    }

    fn short_help(&self) -> &'static str {
        "generate an mgo-backed model"
    }

    fn long_help(&self) -> &'static str {
        "
Generate writes app/models/<name>.go containing a struct with a bson
ObjectId and the given fields, plus a Collection() method naming its
MongoDB collection.

Field types: string, int, int64, float, bool, time, id.

Flags:
    --app <path>    Revel application root (default .)
    --force         overwrite an existing model file

For example:

    revel_mgo generate model BlogPost title:string published:bool created_at:time

Run setup first so app/models exists."
    }

    fn flags(&self) -> clap::Command {
        clap::Command::new("generate")
            .arg(Arg::new("app").long("app").value_name("PATH"))
            .arg(Arg::new("force").long("force").action(ArgAction::SetTrue))
            .arg(Arg::new("kind"))
            .arg(Arg::new("name"))
            .arg(Arg::new("fields").num_args(0..))
    }

    fn run(&self, cmd: &Descriptor, ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
        let matches = cmd.parse_flags(ctx, args)?;
        let (Some(kind), Some(name)) = (
            matches.get_one::<String>("kind"),
            matches.get_one::<String>("name"),
        ) else {
            return Err(fatal!(
                ctx,
                "generate needs a kind and a name\nRun '{}' for usage.",
                project_identity::cli_with("help generate")
            ));
        };
        if kind != "model" {
            return Err(fatal!(ctx, "unknown generator {:?} (only \"model\" is supported)", kind));
        }

        let options = GenerateOptions {
            app: matches
                .get_one::<String>("app")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            name: name.clone(),
            fields: matches
                .get_many::<String>("fields")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            force: matches.get_flag("force"),
        };
        run(options, ctx).map_err(|e| ctx.report(&e))
    }
}

pub fn run(options: GenerateOptions, ctx: &mut Context<'_>) -> Result<()> {
    let name = naming::model_name(&options.name)?;
    let fields = options
        .fields
        .iter()
        .map(|f| parse_field(f))
        .collect::<Result<Vec<_>>>()?;
    check_fields(&options.fields, &fields)?;

    let app = AppLayout::open(&options.app)?;
    app.require_models_dir()?;

    let snake = naming::snake(&name);
    let file = app.model_file(&snake)?;
    if file.exists() && !options.force {
        return Err(ScaffoldError::AlreadyExists { path: file });
    }

    let date = Local::now().format("%Y-%m-%d").to_string();
    let collection = naming::plural(&snake);
    paths::write_file(&file, &templates::model(&date, &name, &collection, &fields))?;

    ctx.success(&format!("Generated model {} in {}", name, file.display()));
    ctx.keyval("collection", &collection);
    Ok(())
}

/// Go members every model already has.
const RESERVED_MEMBERS: &[&str] = &["Id", "Collection"];

/// Reject fields that would collide in the generated struct.
fn check_fields(raw: &[String], fields: &[ModelField]) -> Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if RESERVED_MEMBERS.contains(&field.go_name.as_str()) {
            return Err(ScaffoldError::ReservedField(field.go_name.clone()));
        }
        if fields[..i].iter().any(|f| f.go_name == field.go_name) {
            return Err(ScaffoldError::DuplicateField {
                field: raw[i].clone(),
                go_name: field.go_name.clone(),
            });
        }
    }
    Ok(())
}

/// `first_name:string` -> `FirstName string` tagged `first_name`.
pub fn parse_field(raw: &str) -> Result<ModelField> {
    let Some((name, kind)) = raw.split_once(':') else {
        return Err(ScaffoldError::InvalidField(raw.to_string()));
    };
    if !naming::is_field_name(name) {
        return Err(ScaffoldError::InvalidField(raw.to_string()));
    }
    let go_type = FIELD_TYPES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, go)| *go)
        .ok_or_else(|| ScaffoldError::UnknownType {
            field: name.to_string(),
            kind: kind.to_string(),
            known: FIELD_TYPES
                .iter()
                .map(|(k, _)| *k)
                .collect::<Vec<_>>()
                .join(", "),
        })?;
    Ok(ModelField {
        go_name: naming::camel(name),
        go_type,
        tag: naming::snake(name),
    })
}
