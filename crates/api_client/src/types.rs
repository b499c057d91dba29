//! Request/response shapes shared with the backend service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Credentials payload for login and registration.
pub struct AuthRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Successful auth response carrying the opaque bearer token.
pub struct AuthResponse {
    /// Bearer token; the client stores it verbatim and never inspects it.
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Response to an archive upload.
///
/// The extracted-files listing arrives in one of two shapes (nested tree or
/// flat path list) and is kept as raw JSON here; classification belongs to
/// the tree layer, not the wire layer.
pub struct UploadResponse {
    /// Server-assigned file name, typically `<uuid>_<original>.zip`.
    pub filename: String,
    /// Remaining payload, including `extracted_files` in either accepted
    /// shape (possibly nested under an `upload` object).
    #[serde(flatten)]
    pub extra: Value,
}

impl UploadResponse {
    /// Derives the project display name from the server-assigned filename.
    ///
    /// Strips the server's leading `<uuid>_` prefix (everything up to the
    /// first underscore, when present) and the `.zip` suffix.
    pub fn project_display_name(&self) -> String {
        let name = match self.filename.split_once('_') {
            Some((_, rest)) if !rest.is_empty() => rest,
            _ => self.filename.as_str(),
        };
        name.strip_suffix(".zip").unwrap_or(name).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// AI-generated analysis of one file.
pub struct FileAnalysis {
    /// Prose summary of the file.
    pub summary: String,
    /// Documented functions found in the file.
    #[serde(default)]
    pub functions: Vec<FunctionDoc>,
    /// Names of modules/crates the file depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One documented function within a file analysis.
pub struct FunctionDoc {
    /// Function name.
    pub name: String,
    /// What the function does.
    pub description: String,
    /// Parameter description, when the analyzer provides one.
    #[serde(default)]
    pub parameters: Option<Value>,
    /// Return type, when known.
    #[serde(default)]
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Raw text content of one project file.
pub struct FileContentResponse {
    /// UTF-8 file content.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A question sent to the project assistant.
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Current project name, when a project is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Name of the currently selected file, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_file_name: Option<String>,
    /// Path of the currently selected file, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_file_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The assistant's answer.
pub struct ChatResponse {
    /// Response text.
    pub response: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn project_display_name_strips_uuid_prefix_and_zip_suffix() {
        let cases = [
            ("3f2a_my-project.zip", "my-project"),
            ("plain.zip", "plain"),
            ("a_b_c.zip", "b_c"),
            ("noext", "noext"),
            ("trailing_", "trailing_"),
        ];

        for (filename, expected) in cases {
            let response = UploadResponse {
                filename: filename.to_string(),
                extra: json!({}),
            };
            assert_eq!(response.project_display_name(), expected, "filename={filename}");
        }
    }

    #[test]
    fn upload_response_keeps_listing_fields_in_extra() {
        let response: UploadResponse = serde_json::from_value(json!({
            "filename": "1_demo.zip",
            "extracted_files": [ { "path": "src/main.rs" } ],
        }))
        .expect("deserialize");

        assert_eq!(response.filename, "1_demo.zip");
        assert!(response.extra.get("extracted_files").is_some());
    }

    #[test]
    fn chat_request_omits_absent_context_fields() {
        let request = ChatRequest {
            message: "what does main do?".to_string(),
            project_name: Some("demo".to_string()),
            selected_file_name: None,
            selected_file_path: None,
        };

        let value = serde_json::to_value(&request).expect("serialize");
        let object = value.as_object().expect("object");
        assert!(object.contains_key("project_name"));
        assert!(!object.contains_key("selected_file_name"));
        assert!(!object.contains_key("selected_file_path"));
    }

    #[test]
    fn file_analysis_defaults_optional_sections() {
        let analysis: FileAnalysis =
            serde_json::from_value(json!({ "summary": "entry point" })).expect("deserialize");
        assert!(analysis.functions.is_empty());
        assert!(analysis.dependencies.is_empty());
    }
}
