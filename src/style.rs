use std::{
    path::{Component, Path},
    str::FromStr,
};

use clap::ValueEnum;
use derive_more::Display;
use serde::Deserialize;

use crate::error::StyleError;

/// File naming convention used by the code generator.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
pub enum Style {
    /// snake_case names, e.g. `service_context.go`.
    #[default]
    #[display("go_zero")]
    #[serde(rename = "go_zero")]
    #[value(name = "go_zero")]
    GoZero,
    /// Flat names, e.g. `servicecontext.go`.
    #[display("gozero")]
    #[serde(rename = "gozero")]
    #[value(name = "gozero")]
    GoZeroFlat,
}

impl Style {
    pub fn other(self) -> Style {
        match self {
            Style::GoZero => Style::GoZeroFlat,
            Style::GoZeroFlat => Style::GoZero,
        }
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "go_zero" => Ok(Style::GoZero),
            "gozero" => Ok(Style::GoZeroFlat),
            _ => Err(StyleError::UnknownStyle(s.to_owned())),
        }
    }
}

/// Two generated filenames with the same purpose that must not both exist in
/// one directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConflictPair {
    /// Name used by the go_zero style.
    pub go_zero: String,
    /// Name used by the gozero style.
    pub gozero: String,
}

impl ConflictPair {
    pub fn new(go_zero: impl Into<String>, gozero: impl Into<String>) -> Self {
        Self {
            go_zero: go_zero.into(),
            gozero: gozero.into(),
        }
    }

    pub fn name_for(&self, style: Style) -> &str {
        match style {
            Style::GoZero => &self.go_zero,
            Style::GoZeroFlat => &self.gozero,
        }
    }

    /// Both names must be plain file names (no directories, `.` or `..`) and
    /// must differ, otherwise cleanup could remove the file it should keep
    /// or reach outside the directory being checked.
    pub fn check(&self) -> Result<(), StyleError> {
        for name in [&self.go_zero, &self.gozero] {
            if !is_plain_file_name(name) {
                return Err(self.invalid(format!("'{name}' is not a plain file name")));
            }
        }
        if self.go_zero == self.gozero {
            return Err(self.invalid("both names are the same".to_owned()));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> StyleError {
        StyleError::InvalidPair {
            go_zero: self.go_zero.clone(),
            gozero: self.gozero.clone(),
            reason,
        }
    }
}

fn is_plain_file_name(name: &str) -> bool {
    if name.chars().any(std::path::is_separator) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Conflicts known to be produced by the generator.
pub fn default_pairs() -> Vec<ConflictPair> {
    vec![ConflictPair::new("service_context.go", "servicecontext.go")]
}
