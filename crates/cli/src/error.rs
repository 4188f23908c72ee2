//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: sketch error (unknown sketch, preset or noise, bad viewport)
//! - 11: I/O error (SVG/PNG/recipe write, preset or recipe file missing)
//! - 12: input error (bad color, bad `--params`, malformed preset or
//!   recipe file)
//! - 13: serialization error (our own JSON output failed)
//!
//! `SketchError::Serialization` only comes from parsing files the user
//! handed us (`--presets`, `--from-recipe`), so it is an input error (12).
//! Code 13 is kept for failures to print `--json` output.

use pillar_core::SketchError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A sketch-level error (unknown sketch, preset or noise, bad dimensions).
    Sketch(SketchError),
    /// An I/O error (export, snapshot, recipe).
    Io(String),
    /// A user input error (bad color, bad JSON params).
    Input(String),
    /// Printing `--json` output failed.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sketch(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Sketch(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<SketchError> for CliError {
    fn from(e: SketchError) -> Self {
        match e {
            SketchError::Io(msg) => CliError::Io(msg),
            SketchError::InvalidColor(msg) => CliError::Input(format!("invalid color: {msg}")),
            SketchError::Serialization(msg) => CliError::Input(msg),
            other => CliError::Sketch(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sketch_error_exit_code_is_10() {
        let err = CliError::Sketch(SketchError::UnknownSketch("foo".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad color".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_sketch_error_io_routes_to_cli_io() {
        let cli_err = CliError::from(SketchError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_sketch_error_color_routes_to_input() {
        let cli_err = CliError::from(SketchError::InvalidColor("#12".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("#12"));
    }

    #[test]
    fn from_sketch_error_preset_file_parse_routes_to_input() {
        let cli_err = CliError::from(SketchError::Serialization("expected value".into()));
        assert_eq!(cli_err.exit_code(), 12);
    }

    #[test]
    fn from_sketch_error_other_routes_to_cli_sketch() {
        let cli_err = CliError::from(SketchError::UnknownPreset("xyz".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("xyz"));
    }

    #[test]
    fn malformed_preset_file_is_input_not_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = CliError::from(pillar_core::PresetBook::load(&path).unwrap_err());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn missing_recipe_file_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = pillar_core::Recipe::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(CliError::from(err).exit_code(), 11);
    }

    #[test]
    fn unknown_noise_and_bad_viewport_are_sketch_errors() {
        assert_eq!(CliError::from(SketchError::UnknownNoise("value".into())).exit_code(), 10);
        let err = pillar_core::Viewport::new(0.0, 10.0).unwrap_err();
        assert_eq!(CliError::from(err).exit_code(), 10);
    }

    #[test]
    fn from_io_error_routes_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(CliError::from(io).exit_code(), 11);
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
