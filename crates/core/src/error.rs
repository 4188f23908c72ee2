//! Error types for the pillar core.
//!
//! Generation itself never fails: bad parameters are normalized instead.
//! These errors cover construction, lookup and export.

use thiserror::Error;

/// Errors produced by sketch construction, preset lookup and export.
#[derive(Debug, Error)]
pub enum SketchError {
    /// The viewport width or height was zero, negative or not finite.
    #[error("invalid dimensions: width and height must be positive and finite")]
    InvalidDimensions,

    /// No sketch is registered under the given name.
    #[error("unknown sketch: {0}")]
    UnknownSketch(String),

    /// No preset is registered under the given name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// No noise field is registered under the given name.
    #[error("unknown noise field: {0}")]
    UnknownNoise(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Writing an export or snapshot failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// A preset file or recipe could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for SketchError {
    fn from(e: std::io::Error) -> Self {
        SketchError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SketchError {
    fn from(e: serde_json::Error) -> Self {
        SketchError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = SketchError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn unknown_sketch_includes_name() {
        let msg = SketchError::UnknownSketch("spiral".into()).to_string();
        assert!(msg.contains("spiral"), "missing name in: {msg}");
    }

    #[test]
    fn unknown_preset_includes_name() {
        let msg = SketchError::UnknownPreset("dune".into()).to_string();
        assert!(msg.contains("dune"), "missing name in: {msg}");
    }

    #[test]
    fn unknown_noise_includes_name() {
        let msg = SketchError::UnknownNoise("worley".into()).to_string();
        assert!(msg.contains("worley"), "missing name in: {msg}");
    }

    #[test]
    fn io_error_converts_with_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume");
        let err = SketchError::from(io);
        assert!(matches!(err, SketchError::Io(_)));
        assert!(err.to_string().contains("read-only volume"));
    }

    #[test]
    fn serde_error_converts_to_serialization() {
        let bad = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert!(matches!(
            SketchError::from(bad),
            SketchError::Serialization(_)
        ));
    }

    #[test]
    fn sketch_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SketchError>();
    }
}
