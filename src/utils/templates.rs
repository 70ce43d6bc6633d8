//! Go source and config fragments written into the application.

use crate::project_identity::{BINARY_NAME, REPO_URL};

/// First line of every generated Go file.
pub fn generated_header(date: &str) -> String {
    format!("// Code generated by {} ({}) on {}.\n", BINARY_NAME, REPO_URL, date)
}

/// Session helper dropped into `app/models/mgo.go` by `setup`.
pub fn session_helper(date: &str) -> String {
    format!(
        r#"{header}
package models

import (
	"github.com/revel/revel"
	"gopkg.in/mgo.v2"
)

var (
	// Session is the root session; handlers should Copy() it.
	Session *mgo.Session
	// Database is the name configured under mgo.database.
	Database string
)

// InitDB dials the host from conf/app.conf. Register it with revel.OnAppStart.
func InitDB() {{
	host := revel.Config.StringDefault("mgo.host", "localhost")
	Database = revel.Config.StringDefault("mgo.database", revel.AppName)

	var err error
	Session, err = mgo.Dial(host)
	if err != nil {{
		revel.ERROR.Fatalf("mgo: cannot dial %s: %v", host, err)
	}}
	Session.SetMode(mgo.Monotonic, true)
}}

// Collection returns a collection handle on a copied session.
// Close the returned session when done.
func Collection(name string) (*mgo.Session, *mgo.Collection) {{
	s := Session.Copy()
	return s, s.DB(Database).C(name)
}}
"#,
        header = generated_header(date)
    )
}

/// Marker key used to detect an existing mgo block in app.conf.
pub const CONF_MARKER: &str = "mgo.host";

/// Block appended to `conf/app.conf`.
pub fn conf_block(host: &str, database: &str, secret: &str) -> String {
    format!(
        "\n# mgo settings (added by {bin})\n\
         {marker} = {host}\n\
         mgo.database = {database}\n\
         mgo.secret = {secret}\n",
        bin = BINARY_NAME,
        marker = CONF_MARKER,
    )
}

/// One struct field of a generated model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    pub go_name: String,
    pub go_type: &'static str,
    pub tag: String,
}

/// Model file for `generate model`.
pub fn model(date: &str, name: &str, collection: &str, fields: &[ModelField]) -> String {
    let needs_time = fields.iter().any(|f| f.go_type == "time.Time");

    let mut out = generated_header(date);
    out.push_str("\npackage models\n\nimport (\n");
    if needs_time {
        out.push_str("\t\"time\"\n\n");
    }
    out.push_str("\t\"gopkg.in/mgo.v2/bson\"\n)\n\n");

    out.push_str(&format!("type {} struct {{\n", name));
    out.push_str("\tId bson.ObjectId `bson:\"_id,omitempty\" json:\"id\"`\n");
    for f in fields {
        out.push_str(&format!(
            "\t{} {} `bson:\"{tag}\" json:\"{tag}\"`\n",
            f.go_name,
            f.go_type,
            tag = f.tag
        ));
    }
    out.push_str("}\n\n");

    out.push_str(&format!(
        "// Collection is the MongoDB collection backing {name}.\n\
         func ({name}) Collection() string {{\n\
         \treturn \"{collection}\"\n\
         }}\n"
    ));
    out
}
