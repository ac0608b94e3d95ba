//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Model Types** - Metadata entered in the form
//! - **File Types** - Handles for the files picked by the user
//! - **Display Types** - Success screen step status
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when submitting without a model name.
pub const MSG_NAME_REQUIRED: &str = "Yo, your model needs a name!";

/// Shown when submitting without any selected file.
pub const MSG_FILES_REQUIRED: &str = "Can't upload nothing, bestie! Select files first.";

/// Appended when the simulated upload is rejected.
pub const MSG_UPLOAD_REJECTED: &str = "Server said 'nah' to your upload. Try again?";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

// =============================================================================
// Model Types
// =============================================================================

/// Category of the uploaded model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelType {
    #[default]
    TextGeneration,
    ImageGeneration,
    AudioGeneration,
    VideoGeneration,
    Embedding,
    Classification,
}

impl ModelType {
    /// Every category, in the order the select box lists them.
    pub const ALL: [ModelType; 6] = [
        ModelType::TextGeneration,
        ModelType::ImageGeneration,
        ModelType::AudioGeneration,
        ModelType::VideoGeneration,
        ModelType::Embedding,
        ModelType::Classification,
    ];

    /// Value used in the `<option value=...>` attribute.
    pub fn value(&self) -> &'static str {
        match self {
            ModelType::TextGeneration => "text-generation",
            ModelType::ImageGeneration => "image-generation",
            ModelType::AudioGeneration => "audio-generation",
            ModelType::VideoGeneration => "video-generation",
            ModelType::Embedding => "embedding",
            ModelType::Classification => "classification",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ModelType::TextGeneration => "Text Generation (LLM)",
            ModelType::ImageGeneration => "Image Generation",
            ModelType::AudioGeneration => "Audio Generation",
            ModelType::VideoGeneration => "Video Generation",
            ModelType::Embedding => "Embeddings",
            ModelType::Classification => "Classification",
        }
    }

    /// Parse a select box value.
    pub fn from_value(value: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.value() == value)
            .ok_or_else(|| AppError::UnknownModelType(value.to_string()))
    }
}

/// User-entered description of the model being uploaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Display name (required)
    pub name: String,
    /// Model category
    pub model_type: ModelType,
    /// Free-text description, may be empty
    pub description: String,
}

// =============================================================================
// File Types
// =============================================================================

/// A file picked by the user.
///
/// Only the name and size are kept; the contents are never read.
/// Two handles are equal when both fields match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Size formatted as megabytes with two decimals, e.g. `"1.50 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / BYTES_PER_MB)
    }
}

/// Snapshot of what is being uploaded, logged as JSON when an upload starts.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    pub name: String,
    pub model_type: ModelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub files: Vec<SelectedFile>,
    pub total_bytes: u64,
}

impl UploadSummary {
    pub fn new(metadata: &ModelMetadata, files: &[SelectedFile]) -> Self {
        let description = Some(metadata.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        Self {
            name: metadata.name.clone(),
            model_type: metadata.model_type,
            description,
            files: files.to_vec(),
            total_bytes: files.iter().map(|f| f.size).sum(),
        }
    }
}

// =============================================================================
// Display Types
// =============================================================================

/// Status badge of a pipeline step on the success screen.
///
/// Purely decorative: nothing tracks the real pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
}

impl StepStatus {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StepStatus::Pending => "step-pending",
            StepStatus::InProgress => "step-in-progress",
            StepStatus::Completed => "step-completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pending => "Pending",
            StepStatus::InProgress => "In Progress",
            StepStatus::Completed => "Completed",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Submitted form failed validation.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Action not allowed in the current upload state.
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    /// Select box sent a value we do not know.
    #[error("Unknown model type: {0}")]
    UnknownModelType(String),

    /// Simulated upload was rejected.
    #[error("Upload error: {0}")]
    Upload(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_type_values_match_serde() {
        for ty in ModelType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.value()));
            assert_eq!(ModelType::from_value(ty.value()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_model_type() {
        let err = ModelType::from_value("speech-to-text").unwrap_err();
        assert_eq!(err, AppError::UnknownModelType("speech-to-text".to_string()));
    }

    #[test]
    fn test_default_model_type() {
        assert_eq!(ModelMetadata::default().model_type, ModelType::TextGeneration);
    }

    #[test]
    fn test_size_label() {
        assert_eq!(SelectedFile::new("a.bin", 0).size_label(), "0.00 MB");
        assert_eq!(SelectedFile::new("b.bin", 1_572_864).size_label(), "1.50 MB");
        assert_eq!(SelectedFile::new("c.bin", 5_000).size_label(), "0.00 MB");
    }

    #[test]
    fn test_summary_serialization() {
        let metadata = ModelMetadata {
            name: "CoolModel".to_string(),
            model_type: ModelType::Embedding,
            description: "   ".to_string(),
        };
        let files = vec![SelectedFile::new("w.safetensors", 10), SelectedFile::new("cfg.json", 5)];

        let json = serde_json::to_value(UploadSummary::new(&metadata, &files)).unwrap();
        assert_eq!(json["name"], "CoolModel");
        assert_eq!(json["modelType"], "embedding");
        assert_eq!(json["totalBytes"], 15);
        assert!(json.get("description").is_none());
        assert_eq!(json["files"][1]["name"], "cfg.json");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Validation(vec![MSG_NAME_REQUIRED.to_string(), MSG_FILES_REQUIRED.to_string()]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Yo, your model needs a name!; Can't upload nothing, bestie! Select files first."
        );
        let err = AppError::InvalidTransition { from: "uploading", action: "submit" };
        assert_eq!(err.to_string(), "Cannot submit while uploading");
    }
}
