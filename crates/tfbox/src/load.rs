//! reading native values and overlays from documents
//!
//! Supported formats:
//! - json (e.g. values extracted from `terraform show -json`)
//! - yaml
//! - hcl (e.g. `.tfvars` files), the body is read as one object
use crate::native::NativeValue;
use crate::overlay::{Overlay, OverlayError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Hcl,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            "hcl" | "tf" | "tfvars" => Some(InputFormat::Hcl),
            _ => None,
        }
    }
}

/// Parse a document
pub fn parse_str(contents: &str, format: InputFormat) -> Result<NativeValue, LoadError> {
    let value = match format {
        InputFormat::Json => serde_json::from_str::<serde_json::Value>(contents)?.into(),
        InputFormat::Yaml => serde_yaml::from_str::<serde_json::Value>(contents)?.into(),
        InputFormat::Hcl => hcl::from_str::<hcl::Value>(contents)?.into(),
    };

    Ok(value)
}

/// Load a document from a file
///
/// Without an explicit `format` it is guessed from the extension, falling back to json.
pub fn load_file(file_path: &Path, format: Option<InputFormat>) -> Result<NativeValue, LoadError> {
    let format = format
        .or_else(|| InputFormat::from_path(file_path))
        .unwrap_or(InputFormat::Json);
    tracing::info!(path=%file_path.display(), ?format, "loading file");

    let file_contents = std::fs::read_to_string(file_path)?;
    parse_str(&file_contents, format)
}

/// Load an unknown or sensitive overlay from a file
pub fn load_overlay(file_path: &Path, format: Option<InputFormat>) -> Result<Overlay, LoadError> {
    Ok(Overlay::try_from(load_file(file_path, format)?)?)
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("IO error")]
    IoError(#[from] std::io::Error),
    #[error("Unable to parse json document")]
    JsonParseFailed(#[from] serde_json::Error),
    #[error("Unable to parse yaml document")]
    YamlParseFailed(#[from] serde_yaml::Error),
    #[error("Unable to parse hcl document")]
    HclParseFailed(#[from] hcl::Error),
    #[error("Invalid overlay")]
    InvalidOverlay(#[from] OverlayError),
}
