use crate::error::{Result, ScaffoldError};
use crate::project_identity::{APP_CONF, MODELS_DIR, SESSION_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Locations inside a Revel application.
#[derive(Debug, Clone)]
pub struct AppLayout {
    root: PathBuf,
}

impl AppLayout {
    /// Open `root` as a Revel application; it must carry `conf/app.conf`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let layout = Self { root: root.into() };
        if !layout.conf_file().is_file() {
            return Err(ScaffoldError::NotAnApp { path: layout.root });
        }
        Ok(layout)
    }

    /// Directory name of the application, used as the default database name.
    pub fn app_name(&self) -> String {
        let resolved = fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());
        resolved
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "revel".to_string())
    }

    pub fn conf_file(&self) -> PathBuf {
        self.root.join(APP_CONF)
    }

    pub fn models_dir(&self) -> PathBuf {
        self.root.join(MODELS_DIR)
    }

    pub fn session_file(&self) -> PathBuf {
        self.models_dir().join(SESSION_FILE)
    }

    /// File for a model; refuses names that land on the session helper.
    pub fn model_file(&self, snake_name: &str) -> Result<PathBuf> {
        let file = format!("{}.go", snake_name);
        if file == SESSION_FILE {
            return Err(ScaffoldError::ReservedName {
                name: snake_name.to_string(),
                file,
            });
        }
        Ok(self.models_dir().join(file))
    }

    /// Models directory, which `setup` creates.
    pub fn require_models_dir(&self) -> Result<PathBuf> {
        let dir = self.models_dir();
        if !dir.is_dir() {
            return Err(ScaffoldError::MissingModels { path: dir });
        }
        Ok(dir)
    }
}

pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).map_err(|e| ScaffoldError::io(path, e))?;
    Ok(true)
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))
}

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ScaffoldError::io(path, e))
}

pub fn remove_file(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(ScaffoldError::NotFound {
            path: path.to_path_buf(),
        });
    }
    fs::remove_file(path).map_err(|e| ScaffoldError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revel_app() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("conf")).unwrap();
        fs::write(dir.path().join(APP_CONF), "app.name = demo\n").unwrap();
        dir
    }

    #[test]
    fn open_requires_app_conf() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppLayout::open(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::NotAnApp { .. }));
    }

    #[test]
    fn layout_paths_hang_off_the_root() {
        let dir = revel_app();
        let app = AppLayout::open(dir.path()).unwrap();
        assert_eq!(app.models_dir(), dir.path().join("app/models"));
        assert_eq!(app.session_file(), dir.path().join("app/models/mgo.go"));
        assert_eq!(
            app.model_file("blog_post").unwrap(),
            dir.path().join("app/models/blog_post.go")
        );
    }

    #[test]
    fn session_helper_is_not_a_model_file() {
        let dir = revel_app();
        let app = AppLayout::open(dir.path()).unwrap();
        assert!(matches!(
            app.model_file("mgo").unwrap_err(),
            ScaffoldError::ReservedName { .. }
        ));
    }

    #[test]
    fn models_dir_must_exist() {
        let dir = revel_app();
        let app = AppLayout::open(dir.path()).unwrap();
        assert!(matches!(
            app.require_models_dir().unwrap_err(),
            ScaffoldError::MissingModels { .. }
        ));
        assert!(ensure_dir(&app.models_dir()).unwrap());
        assert!(!ensure_dir(&app.models_dir()).unwrap());
        assert!(app.require_models_dir().is_ok());
    }

    #[test]
    fn remove_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = remove_file(&dir.path().join("nope.go")).unwrap_err();
        assert!(matches!(err, ScaffoldError::NotFound { .. }));
    }
}
