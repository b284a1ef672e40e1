use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::{
    detect::default_convention_dirs,
    error::{Result, StyleError},
    style::{ConflictPair, Style, default_pairs},
};

/// Config file names looked for in the project root, in order.
pub const CONFIG_FILENAMES: &[&str] = &[".zerostyle.json5", ".zerostyle.jsonc", ".zerostyle.json"];

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Filename pairs that must not exist together in one directory.
    #[serde(default = "default_pairs")]
    pub conflicts: Vec<ConflictPair>,

    /// Directories probed when detecting the project's style, relative to
    /// the project root.
    #[serde(default = "default_convention_dirs")]
    pub convention_dirs: Vec<PathBuf>,

    /// Style to use when none can be detected.
    #[serde(default)]
    pub default_style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conflicts: default_pairs(),
            convention_dirs: default_convention_dirs(),
            default_style: Style::default(),
        }
    }
}

impl Config {
    /// Read JSON config. We always read in JSON5 so this works with JSONC and JSON too.
    pub fn read(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| StyleError::Config {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Config> {
        let config: Config = serde_json5::from_str(content).map_err(|e| StyleError::Config {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        if config.conflicts.is_empty() {
            return Err(StyleError::Config {
                path: path.to_owned(),
                message: "`conflicts` must not be empty".to_owned(),
            });
        }
        for pair in &config.conflicts {
            pair.check().map_err(|e| StyleError::Config {
                path: path.to_owned(),
                message: e.to_string(),
            })?;
        }
        Ok(config)
    }

    /// Use `explicit` if given, otherwise the first config file found in
    /// `project_path`, otherwise the built-in defaults.
    pub fn find(project_path: &Path, explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        for filename in CONFIG_FILENAMES {
            let path = project_path.join(filename);
            if path.exists() {
                debug!("Using config {}", path.display());
                return Self::read(&path);
            }
        }
        Ok(Config::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn verify_sample_config() {
        let sample_config = include_str!("../sample_config.json5");
        let config = Config::parse(Path::new("sample_config.json5"), sample_config).unwrap();
        assert_eq!(config.conflicts[0], default_pairs()[0]);
        assert_eq!(config.convention_dirs, default_convention_dirs());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::parse(Path::new("x"), "{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_custom_config() {
        let config = Config::parse(
            Path::new("x"),
            r#"{
                // Extra pair.
                conflicts: [
                    { go_zero: "service_context.go", gozero: "servicecontext.go" },
                    { go_zero: "routes_gen.go", gozero: "routesgen.go" },
                ],
                default_style: "gozero",
            }"#,
        )
        .unwrap();
        assert_eq!(config.conflicts.len(), 2);
        assert_eq!(config.conflicts[1].name_for(Style::GoZeroFlat), "routesgen.go");
        assert_eq!(config.default_style, Style::GoZeroFlat);
        assert_eq!(config.convention_dirs, default_convention_dirs());
    }

    #[test]
    fn test_bad_config() {
        assert!(Config::parse(Path::new("x"), "{ conflicts: [] }").is_err());
        assert!(Config::parse(Path::new("x"), "{ default_style: \"go-zero\" }").is_err());
        assert!(Config::parse(Path::new("x"), "{ unknown: 1 }").is_err());

        for conflicts in [
            r#"[{ go_zero: "a.go", gozero: "a.go" }]"#,
            r#"[{ go_zero: "../victim.go", gozero: "victim.go" }]"#,
        ] {
            let err = Config::parse(Path::new("x"), &format!("{{ conflicts: {conflicts} }}"))
                .unwrap_err();
            assert!(
                matches!(&err, StyleError::Config { message, .. } if message.contains("invalid conflict pair")),
                "{conflicts} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_find_config() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(Config::find(temp_dir.path(), None).unwrap(), Config::default());

        std::fs::write(
            temp_dir.path().join(".zerostyle.json"),
            r#"{ "default_style": "gozero" }"#,
        )
        .unwrap();
        let config = Config::find(temp_dir.path(), None).unwrap();
        assert_eq!(config.default_style, Style::GoZeroFlat);

        let missing = temp_dir.path().join("missing.json5");
        assert!(matches!(
            Config::find(temp_dir.path(), Some(missing.as_path())),
            Err(StyleError::Config { .. })
        ));
    }
}
