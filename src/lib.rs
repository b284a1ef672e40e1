//! Resolve naming conflicts between the `go_zero` (snake_case) and `gozero`
//! (flat) code generation styles, e.g. `service_context.go` and
//! `servicecontext.go` being generated into the same directory.

pub mod cleanup;
pub mod config;
pub mod detect;
pub mod error;
pub mod style;
pub mod tree;
pub mod validate;

pub use cleanup::cleanup_style_conflicts;
pub use config::Config;
pub use detect::{detect_existing_style, suggest_style};
pub use error::StyleError;
pub use style::{ConflictPair, Style};
pub use validate::{Conflict, validate_no_style_conflicts};
